use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::OutputConfig;
use crate::catalog::Catalog;
use crate::categories;
use crate::search::SearchEngine;

#[derive(Args)]
pub struct StatsArgs {
    /// Include search-index statistics
    #[arg(long, short = 'd')]
    detailed: bool,

    /// Look up which records carry an indexed keyword
    #[arg(long, short = 'k')]
    keyword: Option<String>,
}

#[derive(Serialize)]
struct StatsOutput {
    total: usize,
    by_category: Vec<CountOutput>,
    by_complexity: Vec<CountOutput>,
    sources: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<IndexOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyword_lookup: Option<KeywordLookupOutput>,
}

#[derive(Serialize)]
struct CountOutput {
    name: String,
    count: usize,
}

#[derive(Serialize)]
struct IndexOutput {
    keyword_count: usize,
    top_keywords: Vec<KeywordOutput>,
}

#[derive(Serialize)]
struct KeywordOutput {
    keyword: String,
    records: usize,
}

#[derive(Serialize)]
struct KeywordLookupOutput {
    keyword: String,
    ids: Vec<String>,
}

const TOP_KEYWORDS: usize = 15;

pub fn run(args: StatsArgs, output: OutputConfig) -> Result<()> {
    let engine = SearchEngine::new(Catalog::builtin());
    let stats = engine.catalog().stats();

    let index = args.detailed.then(|| IndexOutput {
        keyword_count: engine.index().keyword_count(),
        top_keywords: engine
            .index()
            .top_keywords(TOP_KEYWORDS)
            .into_iter()
            .map(|(keyword, records)| KeywordOutput {
                keyword: keyword.to_string(),
                records,
            })
            .collect(),
    });

    let keyword_lookup = args.keyword.as_ref().map(|kw| {
        let normalized = kw.to_lowercase();
        KeywordLookupOutput {
            ids: engine.index().ids_for_keyword(&normalized).to_vec(),
            keyword: normalized,
        }
    });

    if output.json {
        let json_output = StatsOutput {
            total: stats.total,
            by_category: stats
                .by_category
                .iter()
                .map(|(cat, count)| CountOutput {
                    name: cat.to_string(),
                    count: *count,
                })
                .collect(),
            by_complexity: stats
                .by_complexity
                .iter()
                .map(|(level, count)| CountOutput {
                    name: level.to_string(),
                    count: *count,
                })
                .collect(),
            sources: stats.sources,
            index,
            keyword_lookup,
        };
        println!("{}", serde_json::to_string_pretty(&json_output)?);
        return Ok(());
    }

    if output.quiet {
        return Ok(());
    }

    println!("{} {} use cases in the catalog", "✓".green(), stats.total);
    println!();

    println!("{}", "By category:".bold());
    for (category, count) in &stats.by_category {
        println!(
            "  {:<24} {}",
            categories::display_name(*category).magenta(),
            count
        );
    }
    println!();

    println!("{}", "By complexity:".bold());
    for (level, count) in &stats.by_complexity {
        println!("  {:<24} {}", level.as_str(), count);
    }
    println!();

    println!("{}", "Sources:".bold());
    for source in &stats.sources {
        println!("  - {source}");
    }

    if let Some(index) = index {
        println!();
        println!("{}", "Search index:".bold());
        println!("  {} distinct keywords", index.keyword_count);
        println!("  Most common:");
        for kw in index.top_keywords {
            println!("    {:<20} {} records", kw.keyword.cyan(), kw.records);
        }
    }

    if let Some(lookup) = keyword_lookup {
        println!();
        if lookup.ids.is_empty() {
            println!("No records indexed under '{}'", lookup.keyword);
        } else {
            println!(
                "{} records indexed under '{}': {}",
                lookup.ids.len(),
                lookup.keyword.cyan(),
                lookup.ids.join(", ")
            );
        }
    }

    Ok(())
}
