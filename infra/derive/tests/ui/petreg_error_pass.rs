use petreg_derive::petreg_error;
use std::borrow::Cow;

#[petreg_error]
pub enum StoreError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing record{}: {message}", format_context(.context))]
    Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("disk gone"))
}

fn load() -> Result<(), StoreError> {
    read().context("Reading the registry file")?;
    Ok(())
}

fn main() {
    let err = load().unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading the registry file): disk gone");

    let missing: Result<(), StoreError> =
        Err(StoreError::Missing { message: "pet 7".into(), context: None });
    let err = missing.context("Deleting").unwrap_err();
    assert_eq!(err.to_string(), "Missing record (Deleting): pet 7");

    let internal: StoreError = "unexpected".into();
    assert!(matches!(internal, StoreError::Internal { .. }));
}
