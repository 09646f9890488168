mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use df_logger::{LevelFilter, Logger};
use dfsite::domain::config::SiteConfig;
use dfsite::kernel::config::load_config;

#[df_runtime::main(event_loop)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).console(true);
    let _logger = match &cli.log_dir {
        Some(dir) => builder.path(dir).init()?,
        None => builder.init()?,
    };

    let config: SiteConfig = load_config(cli.config.as_deref())?;
    commands::run(cli.command, config, &cli.page).await
}
