use crate::cli::{Command, SubmitArgs, Variant};
use anyhow::{Context, bail};
use dfsite::Site;
use dfsite::catalog::{DetailPage, HttpCatalogSource, PageContext, StatusFilter};
use dfsite::domain::config::SiteConfig;
use dfsite::kernel::prefs::{FilePreferences, ThemeToggle};
use dfsite::leads::{LeadForm, LeadVariant, SubmissionOutcome};
use std::io::{self, Write};
use tracing::info;

pub(crate) async fn run(command: Command, config: SiteConfig, page: &str) -> anyhow::Result<()> {
    let mut page = PageContext::parse(page).with_context(|| format!("invalid page url {page}"))?;
    if let Command::Detail { slug: Some(slug) } = &command {
        page = page.with_slug(slug.as_str());
    }
    let site = Site::connect(config, page)?;
    let mut out = io::stdout().lock();

    match command {
        Command::Featured { limit } => {
            writeln!(out, "{}", site.featured(limit).await)?;
        },
        Command::Index { status, query, markup } => {
            let mut index = site.index().await;
            index.filters.set_status_filter(StatusFilter::from(status.as_str()));
            index.filters.set_query(&query);
            if markup {
                writeln!(out, "{}", index.markup)?;
            } else if index.filters.empty_state_visible() {
                writeln!(out, "No tools match.")?;
            } else {
                for slug in index.filters.visible_slugs() {
                    writeln!(out, "{slug}")?;
                }
            }
        },
        Command::Detail { .. } => match site.detail().await {
            DetailPage::Found(view) => {
                writeln!(out, "{} [{}]", view.title, view.badge.label)?;
                writeln!(out, "{}", view.description)?;
                if !view.tags.is_empty() {
                    writeln!(out, "{}", view.tags)?;
                }
                writeln!(out, "{}{}{}", view.quickstart_html, view.links_html, view.pricing_html)?;
            },
            DetailPage::NotFound => bail!("tool not found"),
        },
        Command::Submit(args) => submit(&site, args, &mut out).await?,
        Command::Theme { prefs, toggle } => {
            let mut theme = ThemeToggle::new(FilePreferences::new(prefs));
            if toggle {
                theme.toggle();
            }
            writeln!(out, "{} (aria-pressed={})", theme.theme(), theme.aria_pressed())?;
        },
    }
    Ok(())
}

async fn submit(
    site: &Site<HttpCatalogSource>,
    args: SubmitArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let variant = match args.variant {
        Variant::Ideas => LeadVariant::ideas(),
        Variant::Contact => LeadVariant::contact(),
    };
    let pipeline = site.lead_form(variant)?;
    let mut form = LeadForm {
        name: args.name,
        email: args.email,
        message: args.message,
        topic: args.topic,
        premium: args.premium,
        lang: args.lang,
        company: String::new(),
    };

    let outcome = pipeline.submit(&mut form).await;
    if let Some(status) = pipeline.snapshot().status {
        writeln!(out, "{}", status.text)?;
    }

    match outcome {
        SubmissionOutcome::Delivered | SubmissionOutcome::Suppressed => {
            info!("Lead accepted");
            Ok(())
        },
        SubmissionOutcome::Rejected(e) => bail!(e),
        SubmissionOutcome::Failed(e) => bail!(e),
        SubmissionOutcome::Ignored => bail!("another submission is in flight"),
    }
}
