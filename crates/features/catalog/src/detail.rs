use crate::render::{DOCS_LABEL, StatusBadge, VIEW_LABEL, escape_html, tag_line};
use df_domain::tool::{Pricing, ToolRecord};
use std::fmt::Write;

/// Everything the detail page shows for one tool.
///
/// Text fields are plain (assigned as text content); `*_html` fields are escaped markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub badge: StatusBadge,
    pub tags: String,
    pub quickstart_html: String,
    pub links_html: String,
    /// Empty unless the tool is Freemium or Premium.
    pub pricing_html: String,
}

/// Outcome of rendering a detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPage {
    Found(Box<DetailView>),
    /// Hide the detail section and show the "tool not found" state.
    NotFound,
}

impl DetailPage {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// First record with the given slug.
#[must_use]
pub fn find_tool<'a>(tools: &'a [ToolRecord], slug: &str) -> Option<&'a ToolRecord> {
    tools.iter().find(|tool| tool.slug == slug)
}

/// Resolves the detail page for `slug` against the loaded catalog.
#[must_use]
pub fn render_detail_page(tools: &[ToolRecord], slug: Option<&str>) -> DetailPage {
    slug.and_then(|slug| find_tool(tools, slug))
        .map_or(DetailPage::NotFound, |tool| DetailPage::Found(Box::new(render_detail(tool))))
}

#[must_use]
pub fn render_detail(tool: &ToolRecord) -> DetailView {
    let quickstart_html = list_items(&tool.quickstart);
    let links_html = format!(
        r#"<a class="btn btn-secondary" href="{}">{VIEW_LABEL}</a><a class="btn btn-ghost" href="{}">{DOCS_LABEL}</a>"#,
        escape_html(tool.download_href()),
        escape_html(tool.docs_href()),
    );

    let pricing_html = if tool.status.has_pricing() {
        let fallback = Pricing::default();
        render_pricing(tool.pricing.as_ref().unwrap_or(&fallback))
    } else {
        String::new()
    };

    DetailView {
        slug: tool.slug.clone(),
        title: tool.name.clone(),
        description: tool.description.clone(),
        badge: StatusBadge::from(tool.status),
        tags: tag_line(tool),
        quickstart_html,
        links_html,
        pricing_html,
    }
}

fn render_pricing(pricing: &Pricing) -> String {
    let mut out = String::with_capacity(512);
    out.push_str(r#"<div class="pricing-card"><h3>Pricing</h3>"#);
    out.push_str(r#"<p class="section-muted">Gratis para uso personal + upgrade opcional.</p>"#);
    out.push_str(r#"<div class="pricing-columns">"#);
    let _ = write!(out, "<div><h4>Free</h4><ul>{}</ul></div>", list_items(&pricing.free_includes));
    let _ = write!(
        out,
        r#"<div><h4>Premium</h4><ul>{}</ul><p class="section-muted">Idea premium: {}</p></div>"#,
        list_items(&pricing.premium_includes),
        escape_html(&pricing.starter_idea),
    );
    out.push_str("</div></div>");
    out
}

fn list_items(items: &[String]) -> String {
    items.iter().fold(String::new(), |mut out, item| {
        let _ = write!(out, "<li>{}</li>", escape_html(item));
        out
    })
}
