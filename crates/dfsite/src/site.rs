use crate::error::SiteError;
use df_catalog::{
    CardMode, CatalogSource, CatalogStore, DetailPage, FilterController, HttpCatalogSource,
    PageContext, render_cards, render_detail_page,
};
use df_domain::config::SiteConfig;
use df_leads::{HttpLeadTransport, LeadPipeline, LeadVariant};
use tracing::debug;

/// The catalog index: every card in full mode and the filter state over them.
#[derive(Debug)]
pub struct IndexPage {
    pub markup: String,
    pub filters: FilterController,
}

/// One rendered page of the site.
///
/// Holds the page location and a catalog store, so every component of the page shares a
/// single catalog fetch.
#[derive(Debug)]
pub struct Site<S> {
    config: SiteConfig,
    page: PageContext,
    store: CatalogStore<S>,
}

impl Site<HttpCatalogSource> {
    /// Site for `page`, loading the catalog over HTTP relative to the page location.
    pub fn connect(config: SiteConfig, page: PageContext) -> Result<Self, SiteError> {
        let url = page.data_url(&config.catalog.data_file)?;
        debug!(%url, "Resolved catalog location");
        Ok(Self::with_source(config, page, HttpCatalogSource::new(url)))
    }

    /// Lead form of this page, posting to the configured endpoint.
    pub fn lead_form(
        &self,
        variant: LeadVariant,
    ) -> Result<LeadPipeline<HttpLeadTransport>, SiteError> {
        let transport = HttpLeadTransport::new(&self.config.lead.endpoint)?;
        Ok(LeadPipeline::new(transport, variant, &self.config.lead))
    }
}

impl<S: CatalogSource> Site<S> {
    pub fn with_source(config: SiteConfig, page: PageContext, source: S) -> Self {
        Self { config, page, store: CatalogStore::new(source) }
    }

    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub const fn page(&self) -> &PageContext {
        &self.page
    }

    #[must_use]
    pub const fn store(&self) -> &CatalogStore<S> {
        &self.store
    }

    /// Compact cards of the first `limit` tools, or of `featured_limit` from the config.
    pub async fn featured(&self, limit: Option<usize>) -> String {
        let limit = limit.unwrap_or(self.config.catalog.featured_limit);
        let tools = self.store.load().await;
        render_cards(tools.iter().take(limit), CardMode::Compact)
    }

    pub async fn index(&self) -> IndexPage {
        let tools = self.store.load().await;
        IndexPage {
            markup: render_cards(tools.iter(), CardMode::Full),
            filters: FilterController::from_tools(&tools),
        }
    }

    /// Detail page for the slug this page resolves to.
    pub async fn detail(&self) -> DetailPage {
        let slug = self.page.resolve_slug();
        let tools = self.store.load().await;
        render_detail_page(&tools, slug.as_deref())
    }
}
