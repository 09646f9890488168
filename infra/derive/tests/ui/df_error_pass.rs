use df_derive::df_error;
use std::borrow::Cow;

#[df_error]
pub enum FetchError {
    #[error("Read failed{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unexpected status {code}")]
    Status { code: u16 },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), FetchError> {
    Err(std::io::Error::other("disk gone")).context("reading catalog")
}

fn main() {
    let err = read().unwrap_err();
    assert!(err.to_string().contains("(reading catalog)"));

    let err: FetchError = "broken invariant".into();
    assert!(matches!(err, FetchError::Internal { .. }));

    let status: Result<(), FetchError> = Err(FetchError::Status { code: 503 });
    assert_eq!(status.context("ignored").unwrap_err().to_string(), "Unexpected status 503");
}
