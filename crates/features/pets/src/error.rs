use std::borrow::Cow;

#[petreg_derive::petreg_error]
pub enum PetsError {
    /// Rejected input; `message` is shown to the user as is.
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Pet not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Database error{}: {source}", format_context(.context))]
    Database {
        #[source]
        source: sqlx::Error,
        context: Option<Cow<'static, str>>,
    },

    #[cfg(feature = "server")]
    #[error("State error{}: {source}", format_context(.context))]
    State {
        #[source]
        source: petreg_kernel::server::state::ApiStateError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal pets error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
