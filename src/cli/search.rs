use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::OutputConfig;
use crate::catalog::Catalog;
use crate::categories;
use crate::config::Config;
use crate::search::SearchEngine;
use crate::types::{Category, Complexity, SearchResult};

#[derive(Args)]
pub struct SearchArgs {
    /// The search query
    query: String,

    /// Filter by category (repeatable)
    #[arg(long, short = 'c')]
    category: Vec<String>,

    /// Filter by complexity (beginner, intermediate, advanced, expert)
    #[arg(long, short = 'x')]
    complexity: Option<String>,

    /// Maximum number of results (defaults to the configured limit)
    #[arg(long, short = 'n')]
    limit: Option<usize>,
}

/// JSON output format for search results
#[derive(Serialize)]
struct SearchOutput {
    query: String,
    count: usize,
    results: Vec<ResultOutput>,
}

#[derive(Serialize)]
pub(super) struct ResultOutput {
    pub id: String,
    pub title: String,
    pub category: String,
    pub complexity: String,
    pub score: f64,
    pub matched_fields: Vec<String>,
}

impl ResultOutput {
    pub(super) fn from_result(result: &SearchResult<'_>) -> Self {
        Self {
            id: result.use_case.id.clone(),
            title: result.use_case.title.clone(),
            category: result.use_case.category.to_string(),
            complexity: result.use_case.complexity.to_string(),
            score: result.score,
            matched_fields: result
                .matched_fields
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

pub fn run(args: SearchArgs, output: OutputConfig) -> Result<()> {
    let config = Config::load_or_default()?;

    let category_filters = args
        .category
        .iter()
        .map(|c| Category::parse(c))
        .collect::<Result<Vec<_>>>()?;
    let complexity_filter = args
        .complexity
        .as_deref()
        .map(Complexity::parse)
        .transpose()?;
    let limit = args.limit.unwrap_or(config.search.default_limit);

    let engine = SearchEngine::new(Catalog::builtin());
    let results = engine.search(&args.query, &category_filters, complexity_filter, limit);

    if output.json {
        let json_output = SearchOutput {
            query: args.query,
            count: results.len(),
            results: results.iter().map(ResultOutput::from_result).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&json_output)?);
    } else if !output.quiet {
        print_results(&args.query, &results, output.verbose);
    }

    Ok(())
}

fn print_results(query: &str, results: &[SearchResult<'_>], verbose: bool) {
    if results.is_empty() {
        println!("{} No results found for: {}", "!".yellow(), query.cyan());
        return;
    }

    println!(
        "{} Found {} results for: {}",
        "✓".green(),
        results.len(),
        query.cyan()
    );
    println!();

    for (i, result) in results.iter().enumerate() {
        let uc = result.use_case;
        println!(
            "{}. {} ({})",
            (i + 1).to_string().bold(),
            uc.title.blue(),
            uc.id.cyan()
        );

        let matched: Vec<&str> = result.matched_fields.iter().map(|f| f.as_str()).collect();
        println!(
            "   {} · {} · score {:.1} · matched: {}",
            categories::display_name(uc.category).magenta(),
            uc.complexity.as_str().dimmed(),
            result.score,
            matched.join(", ").dimmed()
        );

        if verbose {
            println!("   {}", uc.description.dimmed());
            println!("   Tools: {}", uc.tools_used.join(", ").dimmed());
        }

        println!();
    }
}
