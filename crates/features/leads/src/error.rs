use std::borrow::Cow;
use std::time::Duration;

/// Why a lead could not be delivered.
///
/// Every variant is shown to the visitor as the same retry-later message; the distinction only
/// reaches the logs.
#[df_derive::df_error]
pub enum TransportError {
    #[error("Lead request timed out after {after:?}")]
    Timeout { after: Duration },

    #[error("Lead request failed{}: {source}", format_context(.context))]
    Network { source: reqwest::Error, context: Option<Cow<'static, str>> },

    #[error("Lead endpoint responded with status {code}")]
    Status { code: u16 },

    #[error("Lead payload could not be encoded{}: {source}", format_context(.context))]
    Encode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal lead error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl TransportError {
    /// Short cause label for logs.
    #[must_use]
    pub const fn cause(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::Network { .. } => "network",
            Self::Status { .. } => "status",
            Self::Encode { .. } => "encode",
            Self::Internal { .. } => "internal",
        }
    }
}
