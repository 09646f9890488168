//! # Tool Catalog Engine
//!
//! Loads the static tool catalog once per page, renders it as cards or a detail page, and keeps
//! the live status filter and search state of the catalog index.
//!
//! ## Components
//!
//! * [`CatalogStore`] memoizes [`CatalogSource::fetch`]. Failures degrade to an empty catalog.
//! * [`render`] maps a record and a [`CardMode`] to card markup; [`detail`] builds the detail
//!   page, including the pricing block of paid tiers.
//! * [`PageContext`] resolves the detail slug and the catalog URL from the page location.
//! * [`FilterController`] owns the active status filter and search query over a [`CardIndex`]
//!   built at render time.
//!
//! ## Example
//!
//! ```rust,ignore
//! let page = PageContext::parse("https://delete-from.com/tools/")?;
//! let store = CatalogStore::new(HttpCatalogSource::new(page.data_url("data/tools.json")?));
//! let tools = store.load().await;
//! let html = render_cards(tools.iter(), CardMode::Full);
//! let mut filters = FilterController::from_tools(&tools);
//! filters.set_query("sync");
//! ```

pub mod detail;
mod error;
pub mod filter;
pub mod page;
pub mod render;
pub mod store;

pub use crate::detail::{DetailPage, DetailView, render_detail, render_detail_page};
pub use crate::error::{CatalogError, CatalogErrorExt};
pub use crate::filter::{CardIndex, FilterControl, FilterController, StatusFilter};
pub use crate::page::PageContext;
pub use crate::render::{CardMode, StatusBadge, escape_html, render_card, render_cards};
pub use crate::store::{Catalog, CatalogSource, CatalogStore, HttpCatalogSource};
pub use reqwest::Url;
