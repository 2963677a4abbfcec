use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::OutputConfig;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::report;
use crate::types::Category;

#[derive(Args)]
pub struct ReportArgs {
    /// Report to generate
    #[arg(long, short = 't', default_value = "summary")]
    r#type: ReportType,

    /// Category for `--type category`
    #[arg(long, short = 'c')]
    category: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportType {
    /// Catalog totals by category, complexity, and source
    Summary,
    /// All records in one category
    Category,
    /// One-line reference guide grouped by category
    Reference,
    /// Records grouped by complexity level
    Complexity,
    /// Every example prompt, grouped by category
    Cookbook,
    /// The full catalog as a markdown document
    Markdown,
}

pub fn run(args: ReportArgs, output: OutputConfig) -> Result<()> {
    let config = Config::load_or_default()?;
    let catalog = Catalog::builtin();

    let content = match args.r#type {
        ReportType::Summary => report::summary(&catalog),
        ReportType::Category => {
            let Some(name) = args.category.as_deref() else {
                bail!("--type category requires --category, e.g. --category budgeting");
            };
            report::category(&catalog, Category::parse(name)?)
        }
        ReportType::Reference => report::quick_reference(&catalog),
        ReportType::Complexity => report::complexity_guide(&catalog),
        ReportType::Cookbook => report::prompt_cookbook(&catalog),
        ReportType::Markdown => report::markdown_export(&catalog),
    };

    match args.output {
        Some(path) => {
            let path = resolve_output_path(path, &config.report.output_dir);
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            std::fs::write(&path, &content)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            if !output.quiet && !output.json {
                println!("{} Report written to {}", "✓".green(), path.display());
            }
        }
        None => println!("{content}"),
    }

    Ok(())
}

/// Bare filenames land in the configured output directory; anything
/// with a directory component is used as-is.
fn resolve_output_path(path: PathBuf, output_dir: &str) -> PathBuf {
    if output_dir.is_empty() || path.parent().is_some_and(|p| !p.as_os_str().is_empty()) {
        path
    } else {
        PathBuf::from(output_dir).join(path)
    }
}
