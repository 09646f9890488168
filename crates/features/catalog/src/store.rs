use crate::error::{CatalogError, CatalogErrorExt};
use df_domain::tool::ToolRecord;
use moka::future::Cache;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, Url};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Loaded catalog, shared by every caller of the same store.
pub type Catalog = Arc<[ToolRecord]>;

/// Where tool records come from.
pub trait CatalogSource: Send + Sync {
    /// Stable description of the source, used as the memo key and in logs.
    fn location(&self) -> &str;

    fn fetch(&self) -> impl Future<Output = Result<Vec<ToolRecord>, CatalogError>> + Send;
}

/// Fetches the catalog JSON over HTTP, bypassing response caches.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    url: Url,
}

impl HttpCatalogSource {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    #[must_use]
    pub const fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }
}

impl CatalogSource for HttpCatalogSource {
    fn location(&self) -> &str {
        self.url.as_str()
    }

    async fn fetch(&self) -> Result<Vec<ToolRecord>, CatalogError> {
        let response = self
            .client
            .get(self.url.clone())
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .context("sending catalog request")?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status { code: status.as_u16() });
        }

        let body = response.bytes().await.context("reading catalog body")?;
        debug!(bytes = body.len(), "Catalog body received");
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Memoized catalog loader.
///
/// The source is fetched at most once per store, including when several loads race: later
/// callers await the first fetch. A failed fetch is memoized as an empty catalog; a new store
/// is the only way to retry.
#[derive(Debug)]
pub struct CatalogStore<S> {
    source: S,
    memo: Cache<String, Catalog>,
}

impl<S: CatalogSource> CatalogStore<S> {
    pub fn new(source: S) -> Self {
        Self { source, memo: Cache::builder().initial_capacity(1).build() }
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the catalog, fetching it on first use. Never fails: errors degrade to empty.
    #[instrument(skip(self), fields(source = %self.source.location()))]
    pub async fn load(&self) -> Catalog {
        self.memo
            .get_with(self.source.location().to_owned(), async {
                match self.source.fetch().await {
                    Ok(records) => {
                        info!(tools = records.len(), "Catalog loaded");
                        Catalog::from(records)
                    },
                    Err(e) => {
                        warn!(error = %e, "Catalog unavailable, continuing without tools");
                        Catalog::from(Vec::new())
                    },
                }
            })
            .await
    }
}
