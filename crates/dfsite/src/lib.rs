//! Facade crate for the site engine.
//! Re-exports the domain, kernel and feature crates and composes them into page-level
//! building blocks. Keep this crate thin: it wires other crates together and holds no
//! catalog or lead logic of its own.
//!
//! ## Usage
//! ```rust,ignore
//! let page = PageContext::parse("https://delete-from.com/tools/")?;
//! let site = Site::connect(SiteConfig::default(), page)?;
//! let index = site.index().await;
//! let form = site.lead_form(LeadVariant::ideas())?;
//! ```

mod error;
mod site;

pub use df_catalog as catalog;
pub use df_domain as domain;
pub use df_kernel as kernel;
pub use df_leads as leads;

pub use crate::error::{SiteError, SiteErrorExt};
pub use crate::site::{IndexPage, Site};
