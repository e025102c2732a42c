use std::borrow::Cow;

/// A specialized [`DatabaseError`] enum of this crate.
#[petreg_derive::petreg_error]
pub enum DatabaseError {
    /// Missing or malformed connection settings.
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The database stayed unreachable through every health check.
    #[error("Database connection failed{}: {message}", format_context(.context))]
    Connection { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A wrapper for underlying `sqlx` errors.
    #[error("SQL error{}: {source}", format_context(.context))]
    Sqlx {
        #[source]
        source: sqlx::Error,
        context: Option<Cow<'static, str>>,
    },

    /// A schema bootstrap statement failed.
    #[error("Schema error{}: {message}", format_context(.context))]
    Schema { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal database error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
