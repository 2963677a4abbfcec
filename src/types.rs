use anyhow::bail;
use serde::{Deserialize, Serialize};

/// A single catalog entry describing an AI-assisted FP&A use case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UseCase {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub subcategories: Vec<String>,
    pub complexity: Complexity,
    pub implementation_time: ImplementationTime,
    pub benefits: Vec<String>,
    pub example_prompts: Vec<String>,
    pub tools_used: Vec<String>,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub productivity_gain: Option<String>,
    pub tags: Vec<String>,
}

/// FP&A functional categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Budgeting,
    Forecasting,
    VarianceAnalysis,
    FinancialModeling,
    Reporting,
    DataIntegration,
    ScenarioPlanning,
    Compliance,
    Automation,
    ExcelIntegration,
}

impl Category {
    /// All categories in declaration order
    pub const ALL: [Category; 10] = [
        Category::Budgeting,
        Category::Forecasting,
        Category::VarianceAnalysis,
        Category::FinancialModeling,
        Category::Reporting,
        Category::DataIntegration,
        Category::ScenarioPlanning,
        Category::Compliance,
        Category::Automation,
        Category::ExcelIntegration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Budgeting => "budgeting",
            Category::Forecasting => "forecasting",
            Category::VarianceAnalysis => "variance_analysis",
            Category::FinancialModeling => "financial_modeling",
            Category::Reporting => "reporting",
            Category::DataIntegration => "data_integration",
            Category::ScenarioPlanning => "scenario_planning",
            Category::Compliance => "compliance",
            Category::Automation => "automation",
            Category::ExcelIntegration => "excel_integration",
        }
    }

    /// Parse a user-supplied category string
    pub fn parse(s: &str) -> anyhow::Result<Category> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "budgeting" => Ok(Category::Budgeting),
            "forecasting" => Ok(Category::Forecasting),
            "variance_analysis" => Ok(Category::VarianceAnalysis),
            "financial_modeling" => Ok(Category::FinancialModeling),
            "reporting" => Ok(Category::Reporting),
            "data_integration" => Ok(Category::DataIntegration),
            "scenario_planning" => Ok(Category::ScenarioPlanning),
            "compliance" => Ok(Category::Compliance),
            "automation" => Ok(Category::Automation),
            "excel_integration" => Ok(Category::ExcelIntegration),
            _ => bail!(
                "Unknown category '{}'. Valid categories: budgeting, forecasting, variance_analysis, financial_modeling, reporting, data_integration, scenario_planning, compliance, automation, excel_integration",
                s
            ),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Implementation complexity, ordered from beginner to expert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Complexity {
    pub const ALL: [Complexity; 4] = [
        Complexity::Beginner,
        Complexity::Intermediate,
        Complexity::Advanced,
        Complexity::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Beginner => "beginner",
            Complexity::Intermediate => "intermediate",
            Complexity::Advanced => "advanced",
            Complexity::Expert => "expert",
        }
    }

    pub fn parse(s: &str) -> anyhow::Result<Complexity> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Complexity::Beginner),
            "intermediate" => Ok(Complexity::Intermediate),
            "advanced" => Ok(Complexity::Advanced),
            "expert" => Ok(Complexity::Expert),
            _ => bail!(
                "Unknown complexity '{}'. Valid levels: beginner, intermediate, advanced, expert",
                s
            ),
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Estimated implementation effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImplementationTime {
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl ImplementationTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImplementationTime::Minutes => "minutes",
            ImplementationTime::Hours => "hours",
            ImplementationTime::Days => "days",
            ImplementationTime::Weeks => "weeks",
        }
    }
}

impl std::fmt::Display for ImplementationTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A field that contributed to a record's relevance score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedField {
    Title,
    Description,
    Tags,
    Prompts,
    Tools,
    Benefits,
}

impl MatchedField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchedField::Title => "title",
            MatchedField::Description => "description",
            MatchedField::Tags => "tags",
            MatchedField::Prompts => "prompts",
            MatchedField::Tools => "tools",
            MatchedField::Benefits => "benefits",
        }
    }
}

impl std::fmt::Display for MatchedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scored search hit against one catalog record
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    pub use_case: &'a UseCase,
    pub score: f64,
    /// Fields that contributed to the score, in first-match order
    pub matched_fields: Vec<MatchedField>,
}

/// Aggregate statistics over the catalog
#[derive(Debug, Clone)]
pub struct CatalogStats {
    pub total: usize,
    /// Counts in `Category::ALL` order; categories with no records are omitted
    pub by_category: Vec<(Category, usize)>,
    /// Counts in `Complexity::ALL` order; levels with no records are omitted
    pub by_complexity: Vec<(Complexity, usize)>,
    /// Distinct sources, sorted
    pub sources: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::parse(cat.as_str()).unwrap(), cat);
        }
    }

    #[test]
    fn category_parse_accepts_hyphens() {
        assert_eq!(
            Category::parse("variance-analysis").unwrap(),
            Category::VarianceAnalysis
        );
    }

    #[test]
    fn category_parse_rejects_unknown() {
        assert!(Category::parse("treasury").is_err());
    }

    #[test]
    fn complexity_is_ordered() {
        assert!(Complexity::Beginner < Complexity::Intermediate);
        assert!(Complexity::Advanced < Complexity::Expert);
    }

    #[test]
    fn complexity_parse_rejects_unknown() {
        assert!(Complexity::parse("wizard").is_err());
    }
}
