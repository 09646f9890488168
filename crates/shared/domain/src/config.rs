use crate::constants::{
    CATALOG_DATA_FILE, DEFAULT_CONTACT_ENDPOINT, FEATURED_LIMIT, MAX_MESSAGE_LENGTH,
    REQUEST_TIMEOUT_MS,
};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::time::Duration;

/// Top-level site configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub lead: LeadConfig,
    pub catalog: CatalogConfig,
}

/// Arc-wrapped config, cheap to clone into every page component.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Lead submission settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LeadConfig {
    pub endpoint: String,
    /// In characters.
    pub max_message_length: usize,
    pub request_timeout_ms: u64,
}

impl LeadConfig {
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Catalog settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog path relative to the site root.
    pub data_file: String,
    pub featured_limit: usize,
}

// --- Default ---

impl Default for LeadConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CONTACT_ENDPOINT.to_owned(),
            max_message_length: MAX_MESSAGE_LENGTH,
            request_timeout_ms: REQUEST_TIMEOUT_MS,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { data_file: CATALOG_DATA_FILE.to_owned(), featured_limit: FEATURED_LIMIT }
    }
}
