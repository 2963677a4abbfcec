use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::OutputConfig;
use crate::catalog::Catalog;
use crate::categories;
use crate::search::SearchEngine;
use crate::types::Category;

#[derive(Args)]
pub struct CategoriesArgs {}

#[derive(Serialize)]
struct CategoriesOutput {
    categories: Vec<CategoryOutput>,
}

#[derive(Serialize)]
struct CategoryOutput {
    id: String,
    name: String,
    description: String,
    keywords: Vec<String>,
    typical_tools: Vec<String>,
    use_case_count: usize,
}

pub fn run(_args: CategoriesArgs, output: OutputConfig) -> Result<()> {
    let engine = SearchEngine::new(Catalog::builtin());
    let index = engine.index();

    if output.json {
        let json_output = CategoriesOutput {
            categories: Category::ALL
                .iter()
                .map(|&cat| {
                    let info = categories::info(cat);
                    CategoryOutput {
                        id: info.category.to_string(),
                        name: info.name.to_string(),
                        description: info.description.to_string(),
                        keywords: info.keywords.iter().map(|s| (*s).to_string()).collect(),
                        typical_tools: info
                            .typical_tools
                            .iter()
                            .map(|s| (*s).to_string())
                            .collect(),
                        use_case_count: index.ids_in_category(cat).len(),
                    }
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&json_output)?);
        return Ok(());
    }

    if output.quiet {
        return Ok(());
    }

    for cat in Category::ALL {
        let info = categories::info(cat);
        println!(
            "{} {} ({} use cases)",
            info.name.magenta().bold(),
            format!("[{cat}]").cyan(),
            index.ids_in_category(cat).len()
        );
        println!("  {}", info.description);
        if output.verbose {
            println!("  Keywords: {}", info.keywords.join(", ").dimmed());
            println!("  Typical tools: {}", info.typical_tools.join(", ").dimmed());
        }
        println!();
    }

    Ok(())
}
