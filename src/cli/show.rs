use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::OutputConfig;
use crate::catalog::Catalog;
use crate::categories;
use crate::config::Config;
use crate::report;
use crate::search::SearchEngine;
use crate::types::UseCase;

#[derive(Args)]
pub struct ShowArgs {
    /// Use case id, e.g. budget-001
    id: String,

    /// Also list similar use cases
    #[arg(long, short = 's')]
    similar: bool,
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    use_case: &'a UseCase,
    #[serde(skip_serializing_if = "Option::is_none")]
    similar: Option<Vec<SimilarOutput>>,
}

#[derive(Serialize)]
struct SimilarOutput {
    id: String,
    title: String,
    category: String,
}

pub fn run(args: ShowArgs, output: OutputConfig) -> Result<()> {
    let config = Config::load_or_default()?;
    let engine = SearchEngine::new(Catalog::builtin());

    let Some(uc) = engine.catalog().get(&args.id) else {
        bail!(
            "No use case with id '{}'. Run `fpa-finder list` to see all ids.",
            args.id
        );
    };

    let similar: Option<Vec<&UseCase>> = args
        .similar
        .then(|| engine.similar(&args.id, config.search.similar_limit));

    if output.json {
        let json_output = ShowOutput {
            use_case: uc,
            similar: similar.map(|records| {
                records
                    .into_iter()
                    .map(|s| SimilarOutput {
                        id: s.id.clone(),
                        title: s.title.clone(),
                        category: s.category.to_string(),
                    })
                    .collect()
            }),
        };
        println!("{}", serde_json::to_string_pretty(&json_output)?);
        return Ok(());
    }

    if output.quiet {
        return Ok(());
    }

    println!("{}", report::use_case_detail(uc));

    if let Some(records) = similar {
        println!();
        if records.is_empty() {
            println!("{} No similar use cases found.", "!".yellow());
        } else {
            println!("{}", "SIMILAR USE CASES:".bold());
            for s in records {
                println!(
                    "  {} {} {}",
                    s.id.cyan(),
                    s.title,
                    format!("[{}]", categories::display_name(s.category)).dimmed()
                );
            }
        }
    }

    Ok(())
}
