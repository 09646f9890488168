use df_domain::tool::{ToolRecord, ToolStatus};
use std::fmt::Write;

/// Separator between tags on cards and detail pages.
pub const TAG_SEPARATOR: &str = " · ";
pub const VIEW_LABEL: &str = "Ver / Descargar";
pub const DOCS_LABEL: &str = "Docs";

/// Link scheme of the "view/download" action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardMode {
    /// Featured widget on the site root: links to `tools/<slug>/`.
    Compact,
    /// Catalog index one directory down: links to `../tools/<slug>/`.
    #[default]
    Full,
}

impl CardMode {
    #[must_use]
    pub fn tool_href(self, slug: &str) -> String {
        match self {
            Self::Compact => format!("tools/{slug}/"),
            Self::Full => format!("../tools/{slug}/"),
        }
    }
}

/// Visual treatment of a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub class: &'static str,
}

impl From<ToolStatus> for StatusBadge {
    fn from(status: ToolStatus) -> Self {
        Self { label: status.label(), class: status.badge_class() }
    }
}

impl StatusBadge {
    #[must_use]
    pub fn markup(self) -> String {
        format!(r#"<span class="badge {}">{}</span>"#, self.class, self.label)
    }
}

/// Escapes text for element content and quoted attribute values.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Tags as one display line, empty when there are none.
#[must_use]
pub fn tag_line(tool: &ToolRecord) -> String {
    tool.tags.join(TAG_SEPARATOR)
}

/// Renders one catalog card. Pure: same record and mode, same markup.
#[must_use]
pub fn render_card(tool: &ToolRecord, mode: CardMode) -> String {
    let slug = escape_html(&tool.slug);
    let view = escape_html(&mode.tool_href(&tool.slug));
    let docs = escape_html(tool.docs_href());

    let mut out = String::with_capacity(512);
    let _ = write!(
        out,
        concat!(
            r#"<article class="tool-card" data-slug="{slug}">"#,
            r#"<div class="tool-header"><div>"#,
            r#"<h3>{name}</h3><p class="section-muted">{description}</p>"#,
            "</div>{badge}</div>",
            r#"<p class="tool-tags">{tags}</p>"#,
            r#"<div class="tool-actions">"#,
            r#"<a class="btn btn-secondary" href="{view}">{view_label}</a>"#,
            r#"<a class="btn btn-ghost" href="{docs}">{docs_label}</a>"#,
            "</div></article>",
        ),
        slug = slug,
        name = escape_html(&tool.name),
        description = escape_html(&tool.description),
        badge = StatusBadge::from(tool.status).markup(),
        tags = escape_html(&tag_line(tool)),
        view = view,
        view_label = VIEW_LABEL,
        docs = docs,
        docs_label = DOCS_LABEL,
    );
    out
}

/// Renders a list of cards back to back.
#[must_use]
pub fn render_cards<'a>(tools: impl IntoIterator<Item = &'a ToolRecord>, mode: CardMode) -> String {
    tools.into_iter().map(|tool| render_card(tool, mode)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use df_domain::tool::ToolLinks;

    fn tool(status: ToolStatus) -> ToolRecord {
        ToolRecord {
            slug: "sync-kit".into(),
            name: "Sync Kit".into(),
            description: "Sincroniza carpetas".into(),
            status,
            tags: vec!["sync".into(), "backup".into()],
            links: Some(ToolLinks { download: None, docs: Some("https://docs.example".into()) }),
            ..ToolRecord::default()
        }
    }

    #[test]
    fn test_compact_and_full_links() {
        let record = tool(ToolStatus::Free);
        assert!(render_card(&record, CardMode::Compact).contains(r#"href="tools/sync-kit/""#));
        assert!(render_card(&record, CardMode::Full).contains(r#"href="../tools/sync-kit/""#));
    }

    #[test]
    fn test_card_content() {
        let html = render_card(&tool(ToolStatus::Premium), CardMode::Full);
        assert!(html.contains("<h3>Sync Kit</h3>"));
        assert!(html.contains(r#"<span class="badge badge-premium">Premium</span>"#));
        assert!(html.contains(r#"<p class="tool-tags">sync · backup</p>"#));
        assert!(html.contains(r#"href="https://docs.example""#));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let record = tool(ToolStatus::Freemium);
        assert_eq!(render_card(&record, CardMode::Full), render_card(&record, CardMode::Full));
    }

    #[test]
    fn test_missing_parts_degrade() {
        let record = ToolRecord { slug: "x".into(), name: "X".into(), ..ToolRecord::default() };
        let html = render_card(&record, CardMode::Compact);
        assert!(html.contains(r#"<span class="badge badge-wip">WIP</span>"#));
        assert!(html.contains(r#"<p class="tool-tags"></p>"#));
        assert!(html.contains(r##"href="#""##));
    }

    #[test]
    fn test_record_text_is_escaped() {
        let record = ToolRecord {
            slug: "x".into(),
            name: "<script>alert('x')</script>".into(),
            description: "A & B \"quoted\"".into(),
            ..ToolRecord::default()
        };
        let html = render_card(&record, CardMode::Full);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("A &amp; B &quot;quoted&quot;"));
    }
}
