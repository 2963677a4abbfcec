//! Per-record relevance scoring.
//!
//! Each field contributes a fixed weight. Title and description get an
//! exact-substring bonus with a token-overlap fallback; list fields add
//! per-item or first-match bonuses. A record is only a hit when the
//! total score is positive.

use std::collections::HashSet;

use crate::types::{MatchedField, UseCase};

const TITLE_EXACT: f64 = 10.0;
const TITLE_PER_TOKEN: f64 = 3.0;
const DESCRIPTION_EXACT: f64 = 5.0;
const DESCRIPTION_PER_TOKEN: f64 = 1.5;
const TAG_MATCH: f64 = 4.0;
const PROMPT_MATCH: f64 = 3.0;
const TOOL_MATCH: f64 = 2.0;
const BENEFIT_MATCH: f64 = 1.5;

/// Count of distinct field tokens that appear in the query token set
fn token_overlap(field: &str, query_tokens: &HashSet<&str>) -> usize {
    let field_tokens: HashSet<&str> = field.split_whitespace().collect();
    field_tokens
        .iter()
        .filter(|t| query_tokens.contains(*t))
        .count()
}

/// Score one record against a lowercased query and its token set.
///
/// Returns the total score and the fields that contributed, in
/// first-match order. Tags and tools score per matching item but are
/// reported once; prompts and benefits stop at the first match.
pub(super) fn relevance(
    use_case: &UseCase,
    query: &str,
    query_tokens: &HashSet<&str>,
) -> (f64, Vec<MatchedField>) {
    let mut score = 0.0;
    let mut matched = Vec::new();

    let title_lower = use_case.title.to_lowercase();
    if title_lower.contains(query) {
        score += TITLE_EXACT;
        matched.push(MatchedField::Title);
    } else {
        let overlap = token_overlap(&title_lower, query_tokens);
        if overlap > 0 {
            score += overlap as f64 * TITLE_PER_TOKEN;
            matched.push(MatchedField::Title);
        }
    }

    let description_lower = use_case.description.to_lowercase();
    if description_lower.contains(query) {
        score += DESCRIPTION_EXACT;
        matched.push(MatchedField::Description);
    } else {
        let overlap = token_overlap(&description_lower, query_tokens);
        if overlap > 0 {
            score += overlap as f64 * DESCRIPTION_PER_TOKEN;
            matched.push(MatchedField::Description);
        }
    }

    for tag in &use_case.tags {
        let tag_lower = tag.to_lowercase();
        if query.contains(&tag_lower) || tag_lower.contains(query) {
            score += TAG_MATCH;
            if !matched.contains(&MatchedField::Tags) {
                matched.push(MatchedField::Tags);
            }
        }
    }

    for prompt in &use_case.example_prompts {
        if prompt.to_lowercase().contains(query) {
            score += PROMPT_MATCH;
            matched.push(MatchedField::Prompts);
            break;
        }
    }

    for tool in &use_case.tools_used {
        let tool_lower = tool.to_lowercase();
        if query.contains(&tool_lower) || tool_lower.contains(query) {
            score += TOOL_MATCH;
            if !matched.contains(&MatchedField::Tools) {
                matched.push(MatchedField::Tools);
            }
        }
    }

    for benefit in &use_case.benefits {
        if benefit.to_lowercase().contains(query) {
            score += BENEFIT_MATCH;
            matched.push(MatchedField::Benefits);
            break;
        }
    }

    (score, matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Complexity, ImplementationTime};

    fn record() -> UseCase {
        UseCase {
            id: "test-001".into(),
            title: "Automated Budget Consolidation".into(),
            description: "Consolidate departmental budgets from multiple files".into(),
            category: Category::Budgeting,
            subcategories: vec![],
            complexity: Complexity::Intermediate,
            implementation_time: ImplementationTime::Hours,
            benefits: vec!["Reduce consolidation time".into()],
            example_prompts: vec!["Consolidate all budget files".into()],
            tools_used: vec!["Python".into(), "Excel".into()],
            source: "test".into(),
            source_url: None,
            productivity_gain: None,
            tags: vec!["automation".into(), "consolidation".into()],
        }
    }

    fn tokens(query: &str) -> HashSet<&str> {
        query.split_whitespace().collect()
    }

    #[test]
    fn exact_title_substring_outscores_token_overlap() {
        let uc = record();
        let (exact, _) = relevance(&uc, "budget consolidation", &tokens("budget consolidation"));
        let (partial, _) = relevance(&uc, "budget variance", &tokens("budget variance"));
        assert!(exact > partial);
    }

    #[test]
    fn title_token_fallback_scores_per_token() {
        let uc = record();
        // Not a title substring, but two tokens overlap.
        let (score, matched) = relevance(&uc, "consolidation budget review", &tokens("consolidation budget review"));
        assert!(matched.contains(&MatchedField::Title));
        assert!(score > 0.0);
    }

    #[test]
    fn tags_score_per_matching_tag_but_report_once() {
        let uc = record();
        let (score, matched) = relevance(&uc, "automation and consolidation", &tokens("automation and consolidation"));
        // Both tags are substrings of the query: 4.0 each.
        assert!(score >= 8.0);
        assert_eq!(
            matched.iter().filter(|f| **f == MatchedField::Tags).count(),
            1
        );
    }

    #[test]
    fn tools_match_bidirectionally() {
        let uc = record();
        // Record tool "Python" is a substring of the query.
        let (_, matched) = relevance(&uc, "python scripting", &tokens("python scripting"));
        assert!(matched.contains(&MatchedField::Tools));
        // Query is a substring of the record tool.
        let (_, matched) = relevance(&uc, "pyth", &tokens("pyth"));
        assert!(matched.contains(&MatchedField::Tools));
    }

    #[test]
    fn prompts_and_benefits_stop_at_first_match() {
        let mut uc = record();
        uc.example_prompts = vec!["budget one".into(), "budget two".into()];
        uc.benefits = vec!["budget saving".into(), "budget clarity".into()];
        let (score, _) = relevance(&uc, "budget", &tokens("budget"));
        let mut single = record();
        single.example_prompts = vec!["budget one".into()];
        single.benefits = vec!["budget saving".into()];
        let (single_score, _) = relevance(&single, "budget", &tokens("budget"));
        assert_eq!(score, single_score);
    }

    #[test]
    fn no_match_scores_zero() {
        let uc = record();
        let (score, matched) = relevance(&uc, "kubernetes", &tokens("kubernetes"));
        assert_eq!(score, 0.0);
        assert!(matched.is_empty());
    }

    #[test]
    fn field_tokens_are_deduplicated() {
        let mut uc = record();
        uc.title = "budget budget budget".into();
        // Not a substring match; token overlap counts "budget" once.
        let (score, _) = relevance(&uc, "budget review", &tokens("budget review"));
        let mut single = record();
        single.title = "budget".into();
        let (single_score, _) = relevance(&single, "budget review", &tokens("budget review"));
        assert_eq!(score, single_score);
    }
}
