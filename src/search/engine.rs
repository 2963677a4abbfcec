//! The search engine: full-scan relevance search plus similarity,
//! recommendation, and phrase-based prompt matching.

use std::collections::{HashMap, HashSet};

use crate::catalog::Catalog;
use crate::search::index::SearchIndex;
use crate::search::keywords::normalize;
use crate::search::scorer;
use crate::types::{Category, Complexity, SearchResult, UseCase};

/// Domain phrases recognized in free-form task descriptions. Checked by
/// substring, so "month-end" also hits "month-end close process".
const KEY_PHRASES: &[&str] = &[
    "budget",
    "forecast",
    "variance",
    "model",
    "report",
    "dashboard",
    "automate",
    "excel",
    "dcf",
    "lbo",
    "consolidate",
    "scenario",
    "sensitivity",
    "monte carlo",
    "cash flow",
    "revenue",
    "expense",
    "audit",
    "compliance",
    "sox",
    "erp",
    "integration",
    "api",
    "kpi",
    "close",
    "month-end",
    "vba",
    "python",
    "sql",
];

/// Role keywords mapped to the categories they imply. Order is the
/// evaluation order; a role string can hit several entries.
const ROLE_CATEGORIES: &[(&str, &[Category])] = &[
    ("budget", &[Category::Budgeting]),
    ("forecast", &[Category::Forecasting]),
    (
        "analyst",
        &[Category::VarianceAnalysis, Category::FinancialModeling],
    ),
    (
        "manager",
        &[Category::Reporting, Category::ScenarioPlanning],
    ),
    (
        "controller",
        &[Category::Compliance, Category::Automation],
    ),
];

const RECOMMEND_LIMIT: usize = 10;
const PROMPT_PHRASE_LIMIT: usize = 5;
const PROMPT_RESULT_LIMIT: usize = 10;

/// What we know about the user asking for recommendations
#[derive(Debug, Default, Clone)]
pub struct RecommendContext {
    pub role: Option<String>,
    pub tools: Vec<String>,
    pub challenges: Vec<String>,
    pub experience: Option<String>,
}

/// Catalog-backed search engine with a derived keyword index
pub struct SearchEngine {
    catalog: Catalog,
    index: SearchIndex,
}

impl SearchEngine {
    pub fn new(catalog: Catalog) -> Self {
        let index = SearchIndex::build(&catalog);
        Self { catalog, index }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Score every record against the query and return the top `limit`
    /// hits, highest first. Ties keep catalog order. An empty category
    /// filter means no filter; a blank query returns no results.
    pub fn search(
        &self,
        query: &str,
        categories: &[Category],
        complexity: Option<Complexity>,
        limit: usize,
    ) -> Vec<SearchResult<'_>> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return Vec::new();
        }

        let normalized = normalize(&query_lower);
        let query_tokens: HashSet<&str> = normalized.split_whitespace().collect();

        let mut results: Vec<SearchResult<'_>> = self
            .catalog
            .all()
            .iter()
            .filter(|uc| categories.is_empty() || categories.contains(&uc.category))
            .filter(|uc| complexity.is_none_or(|c| uc.complexity == c))
            .filter_map(|uc| {
                let (score, matched_fields) = scorer::relevance(uc, &query_lower, &query_tokens);
                (score > 0.0).then_some(SearchResult {
                    use_case: uc,
                    score,
                    matched_fields,
                })
            })
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(limit);
        results
    }

    /// Records most similar to the given one, by shared category, tags,
    /// complexity, and tools. Unknown ids return nothing.
    pub fn similar(&self, use_case_id: &str, limit: usize) -> Vec<&UseCase> {
        let Some(source) = self.catalog.get(use_case_id) else {
            return Vec::new();
        };

        let source_tags: HashSet<&str> = source.tags.iter().map(String::as_str).collect();
        let source_tools: HashSet<&str> = source.tools_used.iter().map(String::as_str).collect();

        let mut scored: Vec<(&UseCase, f64)> = self
            .catalog
            .all()
            .iter()
            .filter(|uc| uc.id != use_case_id)
            .filter_map(|uc| {
                let mut score = 0.0;

                if uc.category == source.category {
                    score += 5.0;
                }

                let tag_overlap = uc
                    .tags
                    .iter()
                    .filter(|t| source_tags.contains(t.as_str()))
                    .count();
                score += tag_overlap as f64 * 2.0;

                if uc.complexity == source.complexity {
                    score += 1.0;
                }

                let tool_overlap = uc
                    .tools_used
                    .iter()
                    .filter(|t| source_tools.contains(t.as_str()))
                    .count();
                score += tool_overlap as f64 * 1.5;

                (score > 0.0).then_some((uc, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.into_iter().take(limit).map(|(uc, _)| uc).collect()
    }

    /// Recommend records for a user profile: their tools, the problems
    /// they describe, their role, and their experience level.
    pub fn recommend(&self, context: &RecommendContext) -> Vec<&UseCase> {
        let mut scored: Vec<(&UseCase, f64)> = self
            .catalog
            .all()
            .iter()
            .filter_map(|uc| {
                let mut score = 0.0;

                for tool in &context.tools {
                    let tool_lower = tool.to_lowercase();
                    if uc
                        .tools_used
                        .iter()
                        .any(|t| t.to_lowercase().contains(&tool_lower))
                    {
                        score += 3.0;
                    }
                }

                for challenge in &context.challenges {
                    let challenge_lower = challenge.to_lowercase();
                    if uc.description.to_lowercase().contains(&challenge_lower) {
                        score += 4.0;
                    }
                    for benefit in &uc.benefits {
                        if benefit.to_lowercase().contains(&challenge_lower) {
                            score += 2.0;
                        }
                    }
                }

                if let Some(role) = &context.role {
                    let role_lower = role.to_lowercase();
                    for (keyword, categories) in ROLE_CATEGORIES {
                        if role_lower.contains(keyword) && categories.contains(&uc.category) {
                            score += 5.0;
                        }
                    }
                }

                if context.experience.as_deref() == Some("beginner")
                    && matches!(uc.complexity, Complexity::Beginner | Complexity::Intermediate)
                {
                    score += 2.0;
                }

                (score > 0.0).then_some((uc, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored
            .into_iter()
            .take(RECOMMEND_LIMIT)
            .map(|(uc, _)| uc)
            .collect()
    }

    /// Match a free-form task description against the catalog.
    ///
    /// Recognized domain phrases each run a small search; per-record
    /// scores are summed across phrases so records hitting several
    /// phrases rank higher. With no recognized phrase the whole
    /// description runs as a plain query.
    pub fn search_by_prompt(&self, task_description: &str) -> Vec<SearchResult<'_>> {
        let task_lower = task_description.to_lowercase();
        let found: Vec<&str> = KEY_PHRASES
            .iter()
            .copied()
            .filter(|p| task_lower.contains(p))
            .collect();

        if found.is_empty() {
            tracing::debug!("no recognized phrases, falling back to plain search");
            return self.search(task_description, &[], None, PROMPT_RESULT_LIMIT);
        }
        tracing::debug!(phrases = ?found, "matched task phrases");

        // Accumulate in first-seen order so equal scores rank stably.
        let mut combined: Vec<SearchResult<'_>> = Vec::new();
        let mut position: HashMap<String, usize> = HashMap::new();

        for phrase in found {
            for result in self.search(phrase, &[], None, PROMPT_PHRASE_LIMIT) {
                match position.get(result.use_case.id.as_str()) {
                    Some(&i) => combined[i].score += result.score,
                    None => {
                        position.insert(result.use_case.id.clone(), combined.len());
                        combined.push(result);
                    }
                }
            }
        }

        combined.sort_by(|a, b| b.score.total_cmp(&a.score));
        combined.truncate(PROMPT_RESULT_LIMIT);
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SearchEngine {
        SearchEngine::new(Catalog::builtin())
    }

    #[test]
    fn search_ranks_title_match_first() {
        let e = engine();
        let results = e.search("budget consolidation", &[], None, 10);
        assert!(!results.is_empty());
        assert_eq!(results[0].use_case.id, "budget-001");
    }

    #[test]
    fn search_results_sorted_descending() {
        let e = engine();
        let results = e.search("forecast", &[], None, 20);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn search_respects_category_filter() {
        let e = engine();
        let results = e.search("model", &[Category::FinancialModeling], None, 20);
        assert!(!results.is_empty());
        assert!(results
            .iter()
            .all(|r| r.use_case.category == Category::FinancialModeling));
    }

    #[test]
    fn search_respects_complexity_filter() {
        let e = engine();
        let results = e.search("excel", &[], Some(Complexity::Beginner), 20);
        assert!(results
            .iter()
            .all(|r| r.use_case.complexity == Complexity::Beginner));
    }

    #[test]
    fn search_empty_query_returns_nothing() {
        let e = engine();
        assert!(e.search("", &[], None, 10).is_empty());
        assert!(e.search("   ", &[], None, 10).is_empty());
    }

    #[test]
    fn search_respects_limit() {
        let e = engine();
        assert!(e.search("excel", &[], None, 3).len() <= 3);
    }

    #[test]
    fn search_substring_hits_without_token_match() {
        let e = engine();
        // "consolidat" is a substring of several descriptions but never
        // a whole token.
        let results = e.search("consolidat", &[], None, 10);
        assert!(results.iter().any(|r| r.use_case.id == "budget-001"));
    }

    #[test]
    fn similar_excludes_self() {
        let e = engine();
        let similar = e.similar("budget-001", 5);
        assert!(!similar.is_empty());
        assert!(similar.iter().all(|uc| uc.id != "budget-001"));
    }

    #[test]
    fn similar_prefers_same_category() {
        let e = engine();
        let similar = e.similar("model-001", 3);
        assert_eq!(similar[0].category, Category::FinancialModeling);
    }

    #[test]
    fn similar_unknown_id_is_empty() {
        let e = engine();
        assert!(e.similar("no-such-id", 5).is_empty());
    }

    #[test]
    fn recommend_matches_role_to_categories() {
        let e = engine();
        let context = RecommendContext {
            role: Some("Budget Manager".into()),
            ..RecommendContext::default()
        };
        let recs = e.recommend(&context);
        assert!(!recs.is_empty());
        // "budget" and "manager" both fire, so every hit is in one of
        // the implied categories.
        assert!(recs.iter().all(|uc| matches!(
            uc.category,
            Category::Budgeting | Category::Reporting | Category::ScenarioPlanning
        )));
    }

    #[test]
    fn recommend_analyst_role_hits_analysis_categories() {
        let e = engine();
        let context = RecommendContext {
            role: Some("senior fp&a analyst".into()),
            ..RecommendContext::default()
        };
        let recs = e.recommend(&context);
        assert!(!recs.is_empty());
        assert!(recs.iter().all(|uc| matches!(
            uc.category,
            Category::VarianceAnalysis | Category::FinancialModeling
        )));
    }

    #[test]
    fn recommend_beginner_prefers_lower_complexity() {
        let e = engine();
        let context = RecommendContext {
            experience: Some("beginner".into()),
            tools: vec!["Excel".into()],
            ..RecommendContext::default()
        };
        let recs = e.recommend(&context);
        assert!(!recs.is_empty());
        assert!(recs.len() <= 10);
    }

    #[test]
    fn recommend_empty_context_is_empty() {
        let e = engine();
        assert!(e.recommend(&RecommendContext::default()).is_empty());
    }

    #[test]
    fn recommend_tools_match_by_substring() {
        let e = engine();
        let context = RecommendContext {
            tools: vec!["python".into()],
            ..RecommendContext::default()
        };
        let recs = e.recommend(&context);
        assert!(recs
            .iter()
            .all(|uc| uc.tools_used.iter().any(|t| t.to_lowercase().contains("python"))));
    }

    #[test]
    fn prompt_search_aggregates_phrases() {
        let e = engine();
        let results = e.search_by_prompt("I need to automate our budget forecast reports");
        assert!(!results.is_empty());
        assert!(results.len() <= 10);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn prompt_search_ranks_multi_phrase_records_first() {
        let e = engine();
        // "budget", "automate", and "consolidate" all hit the
        // consolidation record; single-phrase matches rank below it.
        let results = e.search_by_prompt("how to automate budget consolidation");
        assert_eq!(results[0].use_case.id, "budget-001");
    }

    #[test]
    fn empty_catalog_yields_empty_everything() {
        let e = SearchEngine::new(Catalog::new(vec![]));
        assert!(e.search("budget", &[], None, 10).is_empty());
        assert!(e.similar("budget-001", 5).is_empty());
        let context = RecommendContext {
            role: Some("analyst".into()),
            ..RecommendContext::default()
        };
        assert!(e.recommend(&context).is_empty());
        assert!(e.search_by_prompt("budget forecast").is_empty());
    }

    #[test]
    fn prompt_search_falls_back_to_plain_search() {
        let e = engine();
        // No recognized phrase, but "valuation" appears in record text.
        let results = e.search_by_prompt("valuation");
        assert!(!results.is_empty());
    }

    #[test]
    fn prompt_search_is_deterministic() {
        let e = engine();
        let a: Vec<String> = e
            .search_by_prompt("monthly close and variance reporting in excel")
            .iter()
            .map(|r| r.use_case.id.clone())
            .collect();
        let b: Vec<String> = e
            .search_by_prompt("monthly close and variance reporting in excel")
            .iter()
            .map(|r| r.use_case.id.clone())
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn index_agrees_with_scan() {
        let e = engine();
        // Every id the index lists for "budget" should also be a search
        // hit for that query.
        for id in e.index().ids_for_keyword("budget") {
            let results = e.search("budget", &[], None, e.catalog().len());
            assert!(
                results.iter().any(|r| &r.use_case.id == id),
                "{id} indexed but not found by scan"
            );
        }
    }
}
