//! Derived keyword and category indexes.
//!
//! Built once from the catalog at engine construction. The indexes back
//! `stats --detailed` and category lookups; relevance scoring always
//! scans full records so substring matches are never lost.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::search::keywords::extract_keywords;
use crate::types::Category;

/// Inverted keyword index plus a category index over record ids
pub struct SearchIndex {
    keyword_index: HashMap<String, Vec<String>>,
    category_index: HashMap<Category, Vec<String>>,
}

impl SearchIndex {
    /// Build both indexes in one pass over the catalog
    pub fn build(catalog: &Catalog) -> Self {
        let mut keyword_index: HashMap<String, Vec<String>> = HashMap::new();
        let mut category_index: HashMap<Category, Vec<String>> = HashMap::new();

        for uc in catalog.all() {
            for keyword in extract_keywords(uc) {
                keyword_index.entry(keyword).or_default().push(uc.id.clone());
            }
            category_index
                .entry(uc.category)
                .or_default()
                .push(uc.id.clone());
        }

        tracing::debug!(
            keywords = keyword_index.len(),
            categories = category_index.len(),
            "built search index"
        );

        Self {
            keyword_index,
            category_index,
        }
    }

    /// Number of distinct indexed keywords
    pub fn keyword_count(&self) -> usize {
        self.keyword_index.len()
    }

    /// Record ids containing the given keyword, catalog order preserved
    pub fn ids_for_keyword(&self, keyword: &str) -> &[String] {
        self.keyword_index
            .get(keyword)
            .map_or(&[], Vec::as_slice)
    }

    /// Record ids in the given category, catalog order preserved
    pub fn ids_in_category(&self, category: Category) -> &[String] {
        self.category_index
            .get(&category)
            .map_or(&[], Vec::as_slice)
    }

    /// The most frequent keywords with their record counts, ties broken
    /// alphabetically
    pub fn top_keywords(&self, n: usize) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = self
            .keyword_index
            .iter()
            .map(|(kw, ids)| (kw.as_str(), ids.len()))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts.truncate(n);
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_covers_every_record() {
        let catalog = Catalog::builtin();
        let index = SearchIndex::build(&catalog);
        for uc in catalog.all() {
            assert!(
                index.ids_in_category(uc.category).contains(&uc.id),
                "{} missing from category index",
                uc.id
            );
        }
    }

    #[test]
    fn keyword_lookup_matches_extraction() {
        let catalog = Catalog::builtin();
        let index = SearchIndex::build(&catalog);
        let ids = index.ids_for_keyword("budget");
        assert!(ids.contains(&"budget-001".to_string()));
    }

    #[test]
    fn unknown_keyword_is_empty() {
        let catalog = Catalog::builtin();
        let index = SearchIndex::build(&catalog);
        assert!(index.ids_for_keyword("zzzzz").is_empty());
    }

    #[test]
    fn top_keywords_sorted_by_count() {
        let catalog = Catalog::builtin();
        let index = SearchIndex::build(&catalog);
        let top = index.top_keywords(10);
        assert_eq!(top.len(), 10);
        for pair in top.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }
}
