use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::search::ResultOutput;
use super::OutputConfig;
use crate::catalog::Catalog;
use crate::categories;
use crate::report;
use crate::search::SearchEngine;

#[derive(Args)]
pub struct AskArgs {
    /// A task description, e.g. "automate our monthly variance commentary"
    task: Vec<String>,
}

#[derive(Serialize)]
struct AskOutput {
    task: String,
    detected_categories: Vec<String>,
    count: usize,
    results: Vec<ResultOutput>,
}

pub fn run(args: AskArgs, output: OutputConfig) -> Result<()> {
    let task = args.task.join(" ");
    if task.trim().is_empty() {
        anyhow::bail!("Describe the task, e.g.: fpa-finder ask build a rolling forecast");
    }

    let detected = categories::detect_categories(&task);
    let engine = SearchEngine::new(Catalog::builtin());
    let results = engine.search_by_prompt(&task);

    if output.json {
        let json_output = AskOutput {
            task,
            detected_categories: detected.iter().map(ToString::to_string).collect(),
            count: results.len(),
            results: results.iter().map(ResultOutput::from_result).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&json_output)?);
    } else if !output.quiet {
        if results.is_empty() {
            println!("{} Nothing in the catalog matches that task.", "!".yellow());
            return Ok(());
        }

        println!("{} Use cases matching: {}", "✓".green(), task.cyan());
        if output.verbose && !detected.is_empty() {
            let names: Vec<&str> = detected
                .iter()
                .map(|&c| categories::display_name(c))
                .collect();
            println!("  Detected categories: {}", names.join(", ").dimmed());
        }
        println!();
        println!("{}", report::search_results(&results));
    }

    Ok(())
}
