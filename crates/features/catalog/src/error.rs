use std::borrow::Cow;

/// Why the catalog could not be loaded.
///
/// Never escapes [`crate::CatalogStore::load`]: the store logs it and serves an empty catalog.
#[df_derive::df_error]
pub enum CatalogError {
    #[error("Catalog request failed{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    #[error("Catalog responded with status {code}")]
    Status { code: u16 },

    #[error("Catalog is not a list of tools{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid catalog location{}: {message}", format_context(.context))]
    InvalidUrl { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal catalog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
