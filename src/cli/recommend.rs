use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::OutputConfig;
use crate::catalog::Catalog;
use crate::categories;
use crate::search::{RecommendContext, SearchEngine};

#[derive(Args)]
pub struct RecommendArgs {
    /// Your role, e.g. "FP&A analyst" or "budget manager"
    #[arg(long, short = 'r')]
    role: Option<String>,

    /// A tool you already use (repeatable)
    #[arg(long, short = 't')]
    tool: Vec<String>,

    /// A challenge you face, e.g. "consolidation" (repeatable)
    #[arg(long, short = 'c')]
    challenge: Vec<String>,

    /// Experience level (beginner boosts simpler use cases)
    #[arg(long, short = 'e')]
    experience: Option<String>,
}

#[derive(Serialize)]
struct RecommendOutput {
    count: usize,
    recommendations: Vec<RecommendationOutput>,
}

#[derive(Serialize)]
struct RecommendationOutput {
    id: String,
    title: String,
    category: String,
    complexity: String,
    implementation_time: String,
}

pub fn run(args: RecommendArgs, output: OutputConfig) -> Result<()> {
    if args.role.is_none() && args.tool.is_empty() && args.challenge.is_empty() {
        bail!(
            "Nothing to recommend from. Provide at least one of --role, --tool, or --challenge."
        );
    }

    let context = RecommendContext {
        role: args.role,
        tools: args.tool,
        challenges: args.challenge,
        experience: args.experience,
    };

    let engine = SearchEngine::new(Catalog::builtin());
    let recommendations = engine.recommend(&context);

    if output.json {
        let json_output = RecommendOutput {
            count: recommendations.len(),
            recommendations: recommendations
                .iter()
                .map(|uc| RecommendationOutput {
                    id: uc.id.clone(),
                    title: uc.title.clone(),
                    category: uc.category.to_string(),
                    complexity: uc.complexity.to_string(),
                    implementation_time: uc.implementation_time.to_string(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&json_output)?);
        return Ok(());
    }

    if output.quiet {
        return Ok(());
    }

    if recommendations.is_empty() {
        println!("{} No matching use cases for that profile.", "!".yellow());
        return Ok(());
    }

    println!(
        "{} {} recommended use cases",
        "✓".green(),
        recommendations.len()
    );
    println!();

    for (i, uc) in recommendations.iter().enumerate() {
        println!(
            "{}. {} ({})",
            (i + 1).to_string().bold(),
            uc.title.blue(),
            uc.id.cyan()
        );
        println!(
            "   {} · {} · {}",
            categories::display_name(uc.category).magenta(),
            uc.complexity.as_str().dimmed(),
            format!("~{}", uc.implementation_time).dimmed()
        );

        if output.verbose {
            println!("   {}", uc.description.dimmed());
            if let Some(prompt) = uc.example_prompts.first() {
                println!("   Try: \"{}\"", prompt.dimmed());
            }
        }

        println!();
    }

    Ok(())
}
