//! Search index adapter over nucleo
//!
//! Wraps a nucleo matcher as the replaceable full-text component: built
//! once per collection version, it answers queries with ranked item
//! ids. Tokenization and fuzzy semantics belong to nucleo; the engine
//! only relies on the ranking being stable for a fixed index and query.

use crate::schema::Item;
use nucleo::pattern::{CaseMatching, Normalization};
use nucleo::{Config, Nucleo};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while building the search index
#[derive(Debug, Error)]
pub enum IndexError {
    /// An item without an identifier cannot be indexed
    #[error("Item at position {0} has no identifier")]
    MissingId(usize),
}

/// Ranked full-text index over one item collection
///
/// One searchable column per item: title, summary, abstract, and
/// keywords joined, so tag names match as literal tokens through the
/// same path as free text. Rebuild whenever the collection changes —
/// the collection is static per page, so in practice exactly once.
pub struct SearchIndex {
    nucleo: Nucleo<String>,
    prev_query: String,
}

impl SearchIndex {
    /// Build the index over a collection
    ///
    /// # Errors
    /// Returns `IndexError::MissingId` if an item has an empty id. A
    /// malformed collection is a programmer error; it fails the build
    /// immediately rather than being skipped.
    pub fn build(items: &[Item]) -> Result<Self, IndexError> {
        let nucleo: Nucleo<String> = Nucleo::new(Config::DEFAULT, Arc::new(|| {}), None, 1);

        let injector = nucleo.injector();
        for (idx, item) in items.iter().enumerate() {
            if item.id.is_empty() {
                return Err(IndexError::MissingId(idx));
            }
            let _ = injector.push(item.id.clone(), |_, cols| {
                cols[0] = item.searchable_text().into();
            });
        }

        Ok(Self {
            nucleo,
            prev_query: String::new(),
        })
    }

    /// Ranked ids for the query, best match first
    ///
    /// Stable across repeated calls with the same index and query. Zero
    /// matches yield an empty sequence. An empty query matches every
    /// item in injection order, but callers resolve that case without
    /// consulting the index.
    pub fn search(&mut self, query: &str) -> Vec<String> {
        let append = query.starts_with(self.prev_query.as_str());
        self.nucleo
            .pattern
            .reparse(0, query, CaseMatching::Smart, Normalization::Smart, append);
        self.prev_query.clear();
        self.prev_query.push_str(query);

        // Drain the matcher until the snapshot is complete
        while self.nucleo.tick(10).running {}

        let snapshot = self.nucleo.snapshot();
        snapshot
            .matched_items(..)
            .map(|item| item.data.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::item;

    fn corpus() -> Vec<Item> {
        let mut neural = item("neural", "2024-01-01", &["nlp"]);
        neural.title = "Neural language parsing".to_string();

        let mut storage = item("storage", "2024-02-01", &["systems"]);
        storage.title = "Disk storage layouts".to_string();

        vec![neural, storage]
    }

    #[test]
    fn test_build_rejects_empty_id() {
        let mut items = corpus();
        items[0].id = String::new();

        let result = SearchIndex::build(&items);
        assert!(matches!(result, Err(IndexError::MissingId(0))));
    }

    #[test]
    fn test_search_matches_keywords() {
        let items = corpus();
        let mut index = SearchIndex::build(&items).unwrap();

        let ids = index.search("nlp");
        assert_eq!(ids, vec!["neural".to_string()]);
    }

    #[test]
    fn test_search_matches_title_text() {
        let items = corpus();
        let mut index = SearchIndex::build(&items).unwrap();

        let ids = index.search("storage");
        assert_eq!(ids, vec!["storage".to_string()]);
    }

    #[test]
    fn test_search_no_matches() {
        let items = corpus();
        let mut index = SearchIndex::build(&items).unwrap();

        assert!(index.search("zzzqqq").is_empty());
    }

    #[test]
    fn test_search_is_stable_across_calls() {
        let items = corpus();
        let mut index = SearchIndex::build(&items).unwrap();

        let first = index.search("a");
        let second = index.search("a");
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_after_narrowing_and_widening() {
        let items = corpus();
        let mut index = SearchIndex::build(&items).unwrap();

        let narrow = index.search("nlp");
        let _ = index.search("nlpzz");
        let again = index.search("nlp");
        assert_eq!(narrow, again);
    }
}
