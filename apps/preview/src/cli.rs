use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dfsite", version, about = "Preview the site engine against a live site")]
pub(crate) struct Cli {
    /// Config file layered under `DFSITE__*` environment overrides.
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Page the components run on.
    #[arg(long, global = true, default_value = "https://delete-from.com/")]
    pub(crate) page: String,

    /// Also write logs to rolling files in this directory.
    #[arg(long, global = true)]
    pub(crate) log_dir: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Featured widget: compact cards of the first tools.
    Featured {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Catalog index with the live filter applied.
    Index {
        /// All, Free, Freemium, Premium or WIP.
        #[arg(long, default_value = "All")]
        status: String,
        #[arg(long, default_value = "")]
        query: String,
        /// Print card markup instead of the visible slugs.
        #[arg(long)]
        markup: bool,
    },
    /// Detail page of the tool the page resolves to.
    Detail {
        /// Pin the slug instead of resolving it from the page.
        #[arg(long)]
        slug: Option<String>,
    },
    /// Submit a lead to the configured endpoint.
    Submit(SubmitArgs),
    /// Show or flip the saved theme.
    Theme {
        /// JSON file holding the saved preferences.
        #[arg(long, default_value = "dfsite-prefs.json")]
        prefs: PathBuf,
        #[arg(long)]
        toggle: bool,
    },
}

#[derive(Debug, Args)]
pub(crate) struct SubmitArgs {
    #[arg(long, value_enum, default_value_t = Variant::Ideas)]
    pub(crate) variant: Variant,
    #[arg(long, default_value = "")]
    pub(crate) name: String,
    #[arg(long, default_value = "")]
    pub(crate) email: String,
    #[arg(long)]
    pub(crate) message: String,
    #[arg(long, default_value = "")]
    pub(crate) topic: String,
    #[arg(long)]
    pub(crate) premium: bool,
    #[arg(long, default_value = "es")]
    pub(crate) lang: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Variant {
    Ideas,
    Contact,
}
