use crate::error::CatalogError;
use reqwest::Url;

/// Section whose pages sit one or two directories below the site root.
const TOOLS_SECTION: &str = "tools";
const QUERY_SLUG: &str = "tool";

/// Where the current page lives, plus an optional slug the page pins explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    url: Url,
    explicit_slug: Option<String>,
}

impl PageContext {
    pub const fn new(url: Url) -> Self {
        Self { url, explicit_slug: None }
    }

    /// Parses an absolute page URL.
    pub fn parse(url: &str) -> Result<Self, CatalogError> {
        Url::parse(url).map(Self::new).map_err(|e| CatalogError::InvalidUrl {
            message: e.to_string().into(),
            context: Some(format!("page {url}").into()),
        })
    }

    /// Pins the slug, taking precedence over the URL.
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.explicit_slug = Some(slug.into());
        self
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    fn segments(&self) -> Vec<&str> {
        self.url.path_segments().map(|s| s.filter(|p| !p.is_empty()).collect()).unwrap_or_default()
    }

    /// Slug of the tool this page describes.
    ///
    /// First non-empty of: the pinned slug, the `tool` query parameter, the last path segment.
    /// An `index`/`index.html` segment yields the one before it, or nothing when it stands alone.
    #[must_use]
    pub fn resolve_slug(&self) -> Option<String> {
        if let Some(slug) = self.explicit_slug.as_deref().filter(|s| !s.trim().is_empty()) {
            return Some(slug.to_owned());
        }

        if let Some((_, slug)) =
            self.url.query_pairs().find(|(key, value)| key == QUERY_SLUG && !value.is_empty())
        {
            return Some(slug.into_owned());
        }

        let segments = self.segments();
        match segments.as_slice() {
            [] => None,
            [.., last] if !is_index(last) => Some((*last).to_owned()),
            [.., previous, _] => Some((*previous).to_owned()),
            [_] => None,
        }
    }

    /// Catalog path relative to this page, by how deep the page sits under `tools/`.
    #[must_use]
    pub fn relative_data_path(&self, data_file: &str) -> String {
        let segments = self.segments();
        let depth = match segments.as_slice() {
            [TOOLS_SECTION] => 1,
            [TOOLS_SECTION, last] if is_index(last) => 1,
            [TOOLS_SECTION, ..] => 2,
            _ => 0,
        };
        format!("{}{}", "../".repeat(depth), data_file.trim_start_matches('/'))
    }

    /// Absolute catalog URL for this page.
    pub fn data_url(&self, data_file: &str) -> Result<Url, CatalogError> {
        let relative = self.relative_data_path(data_file);
        self.url.join(&relative).map_err(|e| CatalogError::InvalidUrl {
            message: e.to_string().into(),
            context: Some(format!("joining {relative}").into()),
        })
    }
}

fn is_index(segment: &str) -> bool {
    matches!(segment, "index" | "index.html")
}
