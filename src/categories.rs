//! Category metadata: display names, descriptions, keywords, typical tools.
//!
//! Kept in one closed table so every `Category` variant is guaranteed an
//! entry (the match is exhaustive) and string literals stay out of the
//! rest of the codebase.

use crate::types::Category;

/// Static metadata for one FP&A category
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub category: Category,
    pub name: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub typical_tools: &'static [&'static str],
}

/// Look up the metadata entry for a category
pub fn info(category: Category) -> CategoryInfo {
    match category {
        Category::Budgeting => CategoryInfo {
            category,
            name: "Budgeting & Planning",
            description: "Annual budgets, rolling budgets, departmental budget consolidation",
            keywords: &["budget", "planning", "allocation", "cost center", "departmental"],
            typical_tools: &["Excel", "Python", "SQL", "Power Query"],
        },
        Category::Forecasting => CategoryInfo {
            category,
            name: "Financial Forecasting",
            description: "Revenue forecasting, expense projections, cash flow predictions",
            keywords: &["forecast", "projection", "prediction", "trend", "time series"],
            typical_tools: &["Python", "R", "Excel", "Statistical models"],
        },
        Category::VarianceAnalysis => CategoryInfo {
            category,
            name: "Variance Analysis",
            description: "Budget vs actuals, trend analysis, root cause identification",
            keywords: &["variance", "deviation", "comparison", "actuals", "budget vs actual"],
            typical_tools: &["Excel", "Python", "BI tools", "SQL"],
        },
        Category::FinancialModeling => CategoryInfo {
            category,
            name: "Financial Modeling",
            description: "DCF models, three-statement models, valuation, M&A analysis",
            keywords: &["model", "DCF", "valuation", "three-statement", "LBO", "M&A"],
            typical_tools: &["Excel", "Python", "VBA"],
        },
        Category::Reporting => CategoryInfo {
            category,
            name: "Financial Reporting",
            description: "Management reports, board presentations, KPI dashboards",
            keywords: &["report", "dashboard", "KPI", "presentation", "visualization"],
            typical_tools: &["Excel", "PowerPoint", "Power BI", "Tableau"],
        },
        Category::DataIntegration => CategoryInfo {
            category,
            name: "Data Integration",
            description: "ERP integration, data warehouse queries, API connections",
            keywords: &["integration", "ERP", "API", "database", "ETL", "data warehouse"],
            typical_tools: &["Python", "SQL", "APIs", "Snowflake", "Databricks"],
        },
        Category::ScenarioPlanning => CategoryInfo {
            category,
            name: "Scenario Planning",
            description: "What-if analysis, sensitivity analysis, Monte Carlo simulations",
            keywords: &["scenario", "sensitivity", "what-if", "Monte Carlo", "simulation"],
            typical_tools: &["Excel", "Python", "@RISK", "Crystal Ball"],
        },
        Category::Compliance => CategoryInfo {
            category,
            name: "Compliance & Controls",
            description: "SOX compliance, audit support, internal controls documentation",
            keywords: &["compliance", "SOX", "audit", "controls", "documentation"],
            typical_tools: &["Excel", "Documentation tools", "Workflow systems"],
        },
        Category::Automation => CategoryInfo {
            category,
            name: "Process Automation",
            description: "Automated workflows, scheduled reports, data pipelines",
            keywords: &["automation", "workflow", "pipeline", "scheduled", "batch"],
            typical_tools: &["Python", "VBA", "Power Automate", "Airflow"],
        },
        Category::ExcelIntegration => CategoryInfo {
            category,
            name: "Excel Integration",
            description: "Excel automation, formula debugging, template creation",
            keywords: &["Excel", "spreadsheet", "formula", "VBA", "macro", "template"],
            typical_tools: &["Excel", "VBA", "Python openpyxl", "xlwings"],
        },
    }
}

/// Display name for a category
pub fn display_name(category: Category) -> &'static str {
    info(category).name
}

/// Categories whose keyword lists match the given text (case-insensitive)
pub fn detect_categories(text: &str) -> Vec<Category> {
    let text_lower = text.to_lowercase();
    let mut matches = Vec::new();

    for category in Category::ALL {
        let entry = info(category);
        if entry
            .keywords
            .iter()
            .any(|kw| text_lower.contains(&kw.to_lowercase()))
        {
            matches.push(category);
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_metadata() {
        for category in Category::ALL {
            let entry = info(category);
            assert!(!entry.name.is_empty());
            assert!(!entry.keywords.is_empty());
            assert!(!entry.typical_tools.is_empty());
        }
    }

    #[test]
    fn detect_categories_matches_keywords() {
        let detected = detect_categories("we need a rolling budget and a revenue forecast");
        assert!(detected.contains(&Category::Budgeting));
        assert!(detected.contains(&Category::Forecasting));
        assert!(!detected.contains(&Category::Compliance));
    }

    #[test]
    fn detect_categories_empty_text() {
        assert!(detect_categories("").is_empty());
    }
}
