mod ask;
mod categories;
mod completions;
mod list;
mod recommend;
mod report;
mod search;
mod show;
mod stats;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fpa-finder")]
#[command(about = "Searchable catalog of AI-assisted use cases for FP&A teams")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Show detailed output
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search use cases by keyword
    Search(search::SearchArgs),

    /// Match a free-form task description against the catalog
    Ask(ask::AskArgs),

    /// List use cases, optionally filtered
    List(list::ListArgs),

    /// Show a use case in full detail
    Show(show::ShowArgs),

    /// Recommend use cases for a role, toolset, and experience level
    Recommend(recommend::RecommendArgs),

    /// Generate catalog reports
    Report(report::ReportArgs),

    /// Show catalog statistics
    Stats(stats::StatsArgs),

    /// List categories with their descriptions
    Categories(categories::CategoriesArgs),

    /// Generate shell completion scripts
    Completions(completions::CompletionsArgs),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let output = OutputConfig {
            json: self.json,
            quiet: self.quiet,
            verbose: self.verbose,
        };

        match self.command {
            Commands::Search(args) => search::run(args, output),
            Commands::Ask(args) => ask::run(args, output),
            Commands::List(args) => list::run(args, output),
            Commands::Show(args) => show::run(args, output),
            Commands::Recommend(args) => recommend::run(args, output),
            Commands::Report(args) => report::run(args, output),
            Commands::Stats(args) => stats::run(args, output),
            Commands::Categories(args) => categories::run(args, output),
            Commands::Completions(args) => completions::run(args, output),
        }
    }
}

/// Output configuration passed to all commands
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
    pub verbose: bool,
}
