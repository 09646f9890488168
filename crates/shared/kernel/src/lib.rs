//! Kernel utilities shared by the catalog and lead crates.
//! Keep this crate lightweight: layered config loading, the `with_timeout` combinator and the
//! best-effort `Preferences` capability behind the theme toggle.
//!
//! ## Config loading
//! ```rust,ignore
//! use df_kernel::config::load_config;
//! use df_kernel::domain::config::SiteConfig;
//!
//! let cfg: SiteConfig = load_config(Some("dfsite.toml"))?;
//! ```
pub mod config;
pub mod prefs;
pub mod timeout;

pub use df_domain as domain;
pub use timeout::{TimeoutError, with_timeout};
