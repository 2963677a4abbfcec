//! The immutable use-case catalog.
//!
//! Records are loaded once at construction and never mutated. The catalog
//! is explicitly constructed and passed to the search engine, so tests can
//! run against fabricated record sets.

mod entries;

use std::collections::BTreeSet;

use crate::types::{CatalogStats, Category, Complexity, UseCase};

/// Read-only, ordered collection of use-case records
pub struct Catalog {
    use_cases: Vec<UseCase>,
}

impl Catalog {
    /// Build a catalog from an explicit record list
    pub fn new(use_cases: Vec<UseCase>) -> Self {
        Self { use_cases }
    }

    /// The built-in record set shipped with the binary
    pub fn builtin() -> Self {
        Self::new(entries::builtin())
    }

    /// All records in catalog order
    pub fn all(&self) -> &[UseCase] {
        &self.use_cases
    }

    pub fn len(&self) -> usize {
        self.use_cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.use_cases.is_empty()
    }

    /// Look up one record by id
    pub fn get(&self, id: &str) -> Option<&UseCase> {
        self.use_cases.iter().find(|uc| uc.id == id)
    }

    /// Records in the given category, catalog order preserved
    pub fn by_category(&self, category: Category) -> Vec<&UseCase> {
        self.use_cases
            .iter()
            .filter(|uc| uc.category == category)
            .collect()
    }

    /// Records at the given complexity level, catalog order preserved
    pub fn by_complexity(&self, complexity: Complexity) -> Vec<&UseCase> {
        self.use_cases
            .iter()
            .filter(|uc| uc.complexity == complexity)
            .collect()
    }

    /// Aggregate counts by category and complexity, plus distinct sources
    pub fn stats(&self) -> CatalogStats {
        let by_category = Category::ALL
            .iter()
            .map(|&cat| (cat, self.by_category(cat).len()))
            .filter(|(_, n)| *n > 0)
            .collect();

        let by_complexity = Complexity::ALL
            .iter()
            .map(|&level| (level, self.by_complexity(level).len()))
            .filter(|(_, n)| *n > 0)
            .collect();

        let sources: BTreeSet<String> = self
            .use_cases
            .iter()
            .map(|uc| uc.source.clone())
            .collect();

        CatalogStats {
            total: self.use_cases.len(),
            by_category,
            by_complexity,
            sources: sources.into_iter().collect(),
        }
    }
}
