//! Keyword extraction for the search index.
//!
//! Stopwords apply only to indexed record text. Query tokens are left
//! unfiltered: a query like "budget for the board" should still overlap
//! the literal words of a record field.

use std::collections::BTreeSet;

use crate::types::UseCase;

/// Stopwords removed from indexed keywords. Kept minimal so domain
/// terms are never dropped.
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "can", "that", "this", "these",
    "those",
];

/// Lowercase text and fold comma/period into whitespace so token
/// splitting treats "budgets," and "budgets" the same.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace([',', '.'], " ")
}

/// Distinct indexable keywords from a record's title, description, and
/// tags. Words of three letters or more, stopwords removed, sorted for
/// deterministic index construction.
pub fn extract_keywords(use_case: &UseCase) -> Vec<String> {
    let text = format!(
        "{} {} {}",
        use_case.title,
        use_case.description,
        use_case.tags.join(" ")
    );

    let keywords: BTreeSet<String> = normalize(&text)
        .split_whitespace()
        .filter(|w| w.len() > 2 && !STOPWORDS.contains(w))
        .map(str::to_string)
        .collect();

    keywords.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Complexity, ImplementationTime};

    fn record(title: &str, description: &str, tags: &[&str]) -> UseCase {
        UseCase {
            id: "test-001".into(),
            title: title.into(),
            description: description.into(),
            category: Category::Budgeting,
            subcategories: vec![],
            complexity: Complexity::Beginner,
            implementation_time: ImplementationTime::Hours,
            benefits: vec![],
            example_prompts: vec![],
            tools_used: vec![],
            source: "test".into(),
            source_url: None,
            productivity_gain: None,
            tags: tags.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn normalize_folds_punctuation() {
        assert_eq!(normalize("Budgets, plans. Done"), "budgets  plans  done");
    }

    #[test]
    fn extract_drops_stopwords_and_short_words() {
        let uc = record("The Budget for Q3", "A plan of record", &["fy"]);
        let keywords = extract_keywords(&uc);
        assert!(keywords.contains(&"budget".to_string()));
        assert!(keywords.contains(&"plan".to_string()));
        assert!(keywords.contains(&"record".to_string()));
        assert!(!keywords.contains(&"the".to_string()));
        assert!(!keywords.contains(&"for".to_string()));
        // "q3" and "fy" are too short
        assert!(!keywords.iter().any(|k| k.len() <= 2));
    }

    #[test]
    fn extract_dedupes_across_fields() {
        let uc = record("Budget Review", "Review the budget monthly", &["budget"]);
        let keywords = extract_keywords(&uc);
        assert_eq!(keywords.iter().filter(|k| *k == "budget").count(), 1);
    }

    #[test]
    fn extract_is_sorted() {
        let uc = record("Zebra Alpha", "middle words here", &[]);
        let keywords = extract_keywords(&uc);
        let mut sorted = keywords.clone();
        sorted.sort();
        assert_eq!(keywords, sorted);
    }
}
