use std::time::Duration;

/// Endpoint receiving lead submissions.
pub const DEFAULT_CONTACT_ENDPOINT: &str =
    "https://zcrpvb8zn1.execute-api.us-west-2.amazonaws.com/prod/contact";

/// Maximum lead message length, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 1200;

pub const REQUEST_TIMEOUT_MS: u64 = 12_000;
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(REQUEST_TIMEOUT_MS);

/// Catalog file, relative to the site root.
pub const CATALOG_DATA_FILE: &str = "data/tools.json";
pub const FEATURED_LIMIT: usize = 6;

pub const DEFAULT_LANG: &str = "es";
pub const DEFAULT_TOPIC: &str = "general";

/// Preference key of the display theme.
pub const THEME_KEY: &str = "df-theme";
