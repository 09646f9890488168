use df_domain::tool::{ToolRecord, ToolStatus};
use std::fmt;
use tracing::trace;

/// Selected status filter control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ToolStatus),
}

impl StatusFilter {
    /// Filter controls in display order.
    pub const CONTROLS: [Self; 5] = [
        Self::All,
        Self::Only(ToolStatus::Free),
        Self::Only(ToolStatus::Freemium),
        Self::Only(ToolStatus::Premium),
        Self::Only(ToolStatus::Wip),
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.label(),
        }
    }

    #[must_use]
    pub fn admits(self, status: ToolStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl From<&str> for StatusFilter {
    /// A control without a value, or with `All`, selects everything.
    fn from(s: &str) -> Self {
        match s {
            "" | "All" => Self::All,
            other => Self::Only(ToolStatus::from(other)),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Filterable attributes of one rendered card.
#[derive(Debug, Clone)]
struct IndexedCard {
    slug: String,
    status: ToolStatus,
    name: String,
    /// Tags joined with a space, lowercased.
    tags: String,
}

impl IndexedCard {
    fn matches(&self, query: &str) -> bool {
        query.is_empty() || self.name.contains(query) || self.tags.contains(query)
    }
}

/// In-memory index of rendered cards, built once per render.
#[derive(Debug, Clone, Default)]
pub struct CardIndex {
    cards: Vec<IndexedCard>,
}

impl CardIndex {
    #[must_use]
    pub fn build(tools: &[ToolRecord]) -> Self {
        let cards = tools
            .iter()
            .map(|tool| IndexedCard {
                slug: tool.slug.clone(),
                status: tool.status,
                name: tool.name.to_lowercase(),
                tags: tool.tags.join(" ").to_lowercase(),
            })
            .collect();
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }
}

/// One filter control as the view should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterControl {
    pub filter: StatusFilter,
    pub active: bool,
}

/// Live status filter and search over the rendered cards.
///
/// Visibility is recomputed on construction and after every state change.
#[derive(Debug, Clone)]
pub struct FilterController {
    index: CardIndex,
    active: StatusFilter,
    query: String,
    visible: Vec<bool>,
    visible_count: usize,
}

impl FilterController {
    #[must_use]
    pub fn new(index: CardIndex) -> Self {
        let mut controller = Self {
            visible: vec![true; index.len()],
            visible_count: index.len(),
            index,
            active: StatusFilter::All,
            query: String::new(),
        };
        controller.recompute();
        controller
    }

    #[must_use]
    pub fn from_tools(tools: &[ToolRecord]) -> Self {
        Self::new(CardIndex::build(tools))
    }

    /// Selects a filter control. Exactly one control is active afterwards.
    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.active = filter;
        self.recompute();
    }

    /// Replaces the search text. Surrounding whitespace is ignored, matching is case-insensitive.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
        self.recompute();
    }

    fn recompute(&mut self) {
        let mut count = 0;
        for (card, visible) in self.index.cards.iter().zip(self.visible.iter_mut()) {
            *visible = self.active.admits(card.status) && card.matches(&self.query);
            count += usize::from(*visible);
        }
        self.visible_count = count;
        trace!(filter = %self.active, query = %self.query, visible = count, "Recomputed card visibility");
    }

    #[must_use]
    pub const fn active(&self) -> StatusFilter {
        self.active
    }

    /// Normalized query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn controls(&self) -> [FilterControl; 5] {
        StatusFilter::CONTROLS.map(|filter| FilterControl { filter, active: filter == self.active })
    }

    /// Whether the card at `position` (render order) is shown.
    #[must_use]
    pub fn is_visible(&self, position: usize) -> bool {
        self.visible.get(position).copied().unwrap_or(false)
    }

    pub fn visible_slugs(&self) -> impl Iterator<Item = &str> {
        self.index
            .cards
            .iter()
            .zip(&self.visible)
            .filter(|(_, visible)| **visible)
            .map(|(card, _)| card.slug.as_str())
    }

    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// The "no tools match" indicator is shown iff nothing is visible.
    #[must_use]
    pub const fn empty_state_visible(&self) -> bool {
        self.visible_count == 0
    }
}
