mod cli;
mod commands;
mod dispatcher;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let loaded = retention_roi::config::load_config(cli.config.as_deref())?;
    let command = cli::runner::to_internal_command(&cli.command, &loaded)?;

    dispatcher::dispatch_command(command, cli.json)
}
