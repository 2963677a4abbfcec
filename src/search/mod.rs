//! Relevance search over the use-case catalog.
//!
//! The engine scans every record and scores it against the query; the
//! keyword index is a derived cache used for statistics and category
//! lookups, never a pre-filter. Substring scoring must see full field
//! text ("automat" should still hit "automated"), so filtering through
//! the index first would change results.

mod engine;
mod index;
mod keywords;
mod scorer;

pub use engine::{RecommendContext, SearchEngine};
pub use index::SearchIndex;
