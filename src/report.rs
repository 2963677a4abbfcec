//! Plain-text and markdown report rendering.
//!
//! Reports are built as line vectors and joined once, so they can go to
//! stdout or a file unchanged.

use chrono::Local;

use crate::catalog::Catalog;
use crate::categories;
use crate::types::{Category, Complexity, SearchResult, UseCase};

const WIDE_RULE: &str =
    "======================================================================";
const NARROW_RULE: &str = "----------------------------------------";

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_len).collect();
        format!("{}...", cut.trim_end())
    }
}

/// Summary report: totals by category, complexity, and source
pub fn summary(catalog: &Catalog) -> String {
    let stats = catalog.stats();
    let mut lines = vec![
        WIDE_RULE.to_string(),
        "FP&A USE-CASE CATALOG - SUMMARY REPORT".to_string(),
        format!("Generated: {}", Local::now().format("%Y-%m-%d %H:%M")),
        WIDE_RULE.to_string(),
        String::new(),
        format!("Total Use Cases: {}", stats.total),
        String::new(),
        "BY CATEGORY:".to_string(),
        NARROW_RULE.to_string(),
    ];

    for (category, count) in &stats.by_category {
        lines.push(format!("  {}: {count}", categories::display_name(*category)));
    }

    lines.extend([String::new(), "BY COMPLEXITY:".to_string(), NARROW_RULE.to_string()]);
    for (complexity, count) in &stats.by_complexity {
        lines.push(format!("  {}: {count}", capitalize(complexity.as_str())));
    }

    lines.extend([String::new(), "SOURCES:".to_string(), NARROW_RULE.to_string()]);
    for source in &stats.sources {
        lines.push(format!("  - {source}"));
    }

    lines.push(String::new());
    lines.push(WIDE_RULE.to_string());
    lines.join("\n")
}

fn brief(uc: &UseCase, number: usize) -> Vec<String> {
    vec![
        format!("{number}. {}", uc.title),
        format!(
            "   Complexity: {} | Time: {}",
            capitalize(uc.complexity.as_str()),
            capitalize(uc.implementation_time.as_str())
        ),
        format!("   {}", truncate(&uc.description, 100)),
        format!("   Tools: {}", uc.tools_used.join(", ")),
    ]
}

/// Detailed report for one category
pub fn category(catalog: &Catalog, category: Category) -> String {
    let use_cases = catalog.by_category(category);
    let info = categories::info(category);

    let mut lines = vec![
        WIDE_RULE.to_string(),
        format!("CATEGORY: {}", info.name.to_uppercase()),
        WIDE_RULE.to_string(),
        String::new(),
        format!("Description: {}", info.description),
        format!("Typical Tools: {}", info.typical_tools.join(", ")),
        format!("Use Cases: {}", use_cases.len()),
        String::new(),
    ];

    for (i, uc) in use_cases.iter().enumerate() {
        lines.extend(brief(uc, i + 1));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Full detail view of a single record
pub fn use_case_detail(uc: &UseCase) -> String {
    let mut lines = vec![
        WIDE_RULE.to_string(),
        format!("USE CASE: {}", uc.title),
        WIDE_RULE.to_string(),
        String::new(),
        format!("ID: {}", uc.id),
        format!("Category: {}", categories::display_name(uc.category)),
        format!("Complexity: {}", capitalize(uc.complexity.as_str())),
        format!(
            "Implementation Time: {}",
            capitalize(uc.implementation_time.as_str())
        ),
        String::new(),
        "DESCRIPTION:".to_string(),
        NARROW_RULE.to_string(),
        uc.description.clone(),
        String::new(),
        "BENEFITS:".to_string(),
        NARROW_RULE.to_string(),
    ];

    for benefit in &uc.benefits {
        lines.push(format!("  * {benefit}"));
    }

    lines.extend([String::new(), "EXAMPLE PROMPTS:".to_string(), NARROW_RULE.to_string()]);
    for (i, prompt) in uc.example_prompts.iter().enumerate() {
        lines.push(format!("  {}. \"{prompt}\"", i + 1));
    }

    lines.extend([
        String::new(),
        "TOOLS USED:".to_string(),
        NARROW_RULE.to_string(),
        format!("  {}", uc.tools_used.join(", ")),
        String::new(),
    ]);

    if let Some(gain) = &uc.productivity_gain {
        lines.extend([
            "PRODUCTIVITY GAIN:".to_string(),
            NARROW_RULE.to_string(),
            format!("  {gain}"),
            String::new(),
        ]);
    }

    lines.extend([
        "SOURCE:".to_string(),
        NARROW_RULE.to_string(),
        format!("  {}", uc.source),
    ]);
    if let Some(url) = &uc.source_url {
        lines.push(format!("  {url}"));
    }

    lines.push(String::new());
    lines.push(WIDE_RULE.to_string());
    lines.join("\n")
}

/// Numbered list of scored search hits
pub fn search_results(results: &[SearchResult<'_>]) -> String {
    if results.is_empty() {
        return "No matching use cases found.".to_string();
    }

    let mut lines = vec![
        WIDE_RULE.to_string(),
        format!("SEARCH RESULTS ({} matches)", results.len()),
        WIDE_RULE.to_string(),
        String::new(),
    ];

    for (i, result) in results.iter().enumerate() {
        let uc = result.use_case;
        let matched: Vec<&str> = result.matched_fields.iter().map(|f| f.as_str()).collect();
        lines.extend([
            format!("{}. {}", i + 1, uc.title),
            format!("   Category: {}", categories::display_name(uc.category)),
            format!("   Complexity: {}", capitalize(uc.complexity.as_str())),
            format!("   Relevance: {:.1}", result.score),
            format!("   Matched: {}", matched.join(", ")),
            String::new(),
        ]);
    }

    lines.join("\n")
}

/// One-line-per-record reference guide grouped by category
pub fn quick_reference(catalog: &Catalog) -> String {
    let mut lines = vec![
        WIDE_RULE.to_string(),
        "FP&A QUICK REFERENCE GUIDE".to_string(),
        WIDE_RULE.to_string(),
        String::new(),
    ];

    for cat in Category::ALL {
        let use_cases = catalog.by_category(cat);
        if use_cases.is_empty() {
            continue;
        }
        let info = categories::info(cat);

        lines.push(format!("## {}", info.name.to_uppercase()));
        lines.push(format!("   {}", info.description));
        lines.push(String::new());

        for uc in use_cases {
            lines.push(format!("   * {}", uc.title));
            if let Some(prompt) = uc.example_prompts.first() {
                lines.push(format!("     Example: \"{}...\"", truncate(prompt, 60)));
            }
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Records grouped by complexity level with short level descriptions
pub fn complexity_guide(catalog: &Catalog) -> String {
    let mut lines = vec![
        WIDE_RULE.to_string(),
        "USE CASES BY COMPLEXITY LEVEL".to_string(),
        WIDE_RULE.to_string(),
        String::new(),
    ];

    for level in Complexity::ALL {
        let use_cases = catalog.by_complexity(level);
        if use_cases.is_empty() {
            continue;
        }

        let description = match level {
            Complexity::Beginner => "Simple tasks, minimal technical setup required",
            Complexity::Intermediate => "Moderate complexity, some technical knowledge helpful",
            Complexity::Advanced => "Complex implementations, requires programming skills",
            Complexity::Expert => "Sophisticated projects, deep technical expertise needed",
        };

        lines.extend([
            format!("### {}", level.as_str().to_uppercase()),
            format!("    {description}"),
            format!("    ({} use cases)", use_cases.len()),
            String::new(),
        ]);

        for uc in use_cases {
            lines.push(format!(
                "    * [{}] {}",
                categories::display_name(uc.category),
                uc.title
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// All example prompts grouped by category
pub fn prompt_cookbook(catalog: &Catalog) -> String {
    let mut lines = vec![
        WIDE_RULE.to_string(),
        "FP&A PROMPT COOKBOOK".to_string(),
        WIDE_RULE.to_string(),
        String::new(),
        "Ready-to-use prompts for common FP&A tasks".to_string(),
        String::new(),
    ];

    for cat in Category::ALL {
        let use_cases = catalog.by_category(cat);
        if use_cases.is_empty() {
            continue;
        }
        let info = categories::info(cat);

        lines.push(format!("### {}", info.name.to_uppercase()));
        lines.push(String::new());

        for uc in use_cases {
            lines.push(format!("**{}**", uc.title));
            for prompt in &uc.example_prompts {
                lines.push(format!("  > {prompt}"));
            }
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

/// The whole catalog as a markdown document with a table of contents
pub fn markdown_export(catalog: &Catalog) -> String {
    let mut lines = vec![
        "# AI-Assisted Use Cases for FP&A".to_string(),
        String::new(),
        format!("*Generated: {}*", Local::now().format("%Y-%m-%d")),
        String::new(),
        "## Table of Contents".to_string(),
        String::new(),
    ];

    for cat in Category::ALL {
        let use_cases = catalog.by_category(cat);
        if use_cases.is_empty() {
            continue;
        }
        let info = categories::info(cat);
        let anchor = info.name.to_lowercase().replace(' ', "-").replace('&', "and");
        lines.push(format!(
            "- [{}](#{anchor}) ({} use cases)",
            info.name,
            use_cases.len()
        ));
    }

    lines.extend([String::new(), "---".to_string(), String::new()]);

    for cat in Category::ALL {
        let use_cases = catalog.by_category(cat);
        if use_cases.is_empty() {
            continue;
        }
        let info = categories::info(cat);

        lines.extend([
            format!("## {}", info.name),
            String::new(),
            format!("*{}*", info.description),
            String::new(),
            format!("**Typical Tools:** {}", info.typical_tools.join(", ")),
            String::new(),
        ]);

        for uc in use_cases {
            lines.extend([
                format!("### {}", uc.title),
                String::new(),
                format!(
                    "**Complexity:** {} | **Time:** {}",
                    capitalize(uc.complexity.as_str()),
                    capitalize(uc.implementation_time.as_str())
                ),
                String::new(),
                uc.description.clone(),
                String::new(),
                "**Benefits:**".to_string(),
            ]);

            for benefit in &uc.benefits {
                lines.push(format!("- {benefit}"));
            }

            lines.push(String::new());
            lines.push("**Example Prompts:**".to_string());
            for prompt in &uc.example_prompts {
                lines.push(format!("- `{prompt}`"));
            }

            if let Some(gain) = &uc.productivity_gain {
                lines.push(String::new());
                lines.push(format!("**Productivity Gain:** {gain}"));
            }

            let source_line = match &uc.source_url {
                Some(url) => format!("*Source: [{}]({url})*", uc.source),
                None => format!("*Source: {}*", uc.source),
            };
            lines.extend([
                String::new(),
                source_line,
                String::new(),
                "---".to_string(),
                String::new(),
            ]);
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchEngine;

    #[test]
    fn summary_lists_all_sections() {
        let report = summary(&Catalog::builtin());
        assert!(report.contains("BY CATEGORY:"));
        assert!(report.contains("BY COMPLEXITY:"));
        assert!(report.contains("SOURCES:"));
    }

    #[test]
    fn category_report_counts_records() {
        let catalog = Catalog::builtin();
        let report = category(&catalog, Category::Budgeting);
        let count = catalog.by_category(Category::Budgeting).len();
        assert!(report.contains(&format!("Use Cases: {count}")));
    }

    #[test]
    fn detail_includes_prompts_and_source() {
        let catalog = Catalog::builtin();
        let uc = catalog.get("budget-001").unwrap();
        let report = use_case_detail(uc);
        assert!(report.contains("EXAMPLE PROMPTS:"));
        assert!(report.contains(&uc.source));
    }

    #[test]
    fn empty_search_results_message() {
        assert_eq!(search_results(&[]), "No matching use cases found.");
    }

    #[test]
    fn search_results_show_relevance() {
        let engine = SearchEngine::new(Catalog::builtin());
        let results = engine.search("budget", &[], None, 3);
        let report = search_results(&results);
        assert!(report.contains("Relevance:"));
        assert!(report.contains("Matched:"));
    }

    #[test]
    fn markdown_export_has_toc_and_sections() {
        let report = markdown_export(&Catalog::builtin());
        assert!(report.contains("## Table of Contents"));
        assert!(report.contains("## Budgeting & Planning"));
        assert!(report.contains("**Example Prompts:**"));
    }

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer sentence", 8), "a longer...");
    }
}
