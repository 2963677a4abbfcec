use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::OutputConfig;
use crate::catalog::Catalog;
use crate::categories;
use crate::types::{Category, Complexity, UseCase};

#[derive(Args)]
pub struct ListArgs {
    /// Filter by category
    #[arg(long, short = 'c')]
    category: Option<String>,

    /// Filter by complexity (beginner, intermediate, advanced, expert)
    #[arg(long, short = 'x')]
    complexity: Option<String>,
}

#[derive(Serialize)]
struct ListOutput<'a> {
    count: usize,
    use_cases: Vec<&'a UseCase>,
}

pub fn run(args: ListArgs, output: OutputConfig) -> Result<()> {
    let category = args.category.as_deref().map(Category::parse).transpose()?;
    let complexity = args
        .complexity
        .as_deref()
        .map(Complexity::parse)
        .transpose()?;

    let catalog = Catalog::builtin();
    let use_cases: Vec<&UseCase> = catalog
        .all()
        .iter()
        .filter(|uc| category.is_none_or(|c| uc.category == c))
        .filter(|uc| complexity.is_none_or(|c| uc.complexity == c))
        .collect();

    if output.json {
        let json_output = ListOutput {
            count: use_cases.len(),
            use_cases,
        };
        println!("{}", serde_json::to_string_pretty(&json_output)?);
        return Ok(());
    }

    if output.quiet {
        return Ok(());
    }

    if use_cases.is_empty() {
        println!("{} No use cases match those filters.", "!".yellow());
        return Ok(());
    }

    println!("{} {} use cases", "✓".green(), use_cases.len());
    println!();

    let mut current_category: Option<Category> = None;
    for uc in use_cases {
        if current_category != Some(uc.category) {
            current_category = Some(uc.category);
            println!("{}", categories::display_name(uc.category).magenta().bold());
        }

        println!(
            "  {} {} {}",
            uc.id.cyan(),
            uc.title,
            format!("[{}]", uc.complexity).dimmed()
        );

        if output.verbose {
            println!("    {}", uc.description.dimmed());
        }
    }

    Ok(())
}
