use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Prefix of environment overrides, e.g. `DFSITE__LEAD__REQUEST_TIMEOUT_MS`.
pub const ENV_PREFIX: &str = "DFSITE";

#[df_derive::df_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration by layering environment overrides over an optional file.
///
/// 1. **File** (optional): TOML, JSON or YAML, picked by extension. When a path is given the
///    file must exist.
/// 2. **Environment**: variables prefixed with `DFSITE__`, nested with double underscores
///    (`DFSITE__CATALOG__FEATURED_LIMIT` maps to `catalog.featured_limit`).
///
/// Keys missing from both layers fall back to the `serde` defaults of `T`.
///
/// # Errors
/// Fails when the given file is missing or malformed, or when a value does not fit `T`.
///
/// # Example
/// ```rust
/// use df_kernel::config::load_config;
/// use df_kernel::domain::config::SiteConfig;
///
/// let cfg: SiteConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(cfg.lead.max_message_length > 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path.as_ref().map(AsRef::as_ref) {
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
