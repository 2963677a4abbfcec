use anyhow::Result;
use clap::Parser;

mod catalog;
mod categories;
mod cli;
mod config;
mod report;
mod search;
mod types;

use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
