//! Resolution of the visible, ordered id sequence
//!
//! `resolve` derives everything from the item collection, the search
//! index, and the current filter state — no hidden state and no memory
//! of previous resolutions, so identical inputs always produce the
//! identical sequence. One parameterized pipeline serves every listing
//! kind; the comparator table keyed by sort key replaces per-listing
//! copies of the filter/search/sort logic.

use crate::filter::{FilterState, SortKey};
use crate::index::SearchIndex;
use crate::schema::Item;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Ordered, distinct item ids visible under the given filter state
///
/// Pipeline, in order:
/// 1. Candidates: a non-empty (trimmed) query asks the index and keeps
///    its relevance order; otherwise all ids in collection order. Zero
///    index matches short-circuit to an empty result.
/// 2. Tag filter: with tags selected, an item survives only if its
///    keyword set is a superset of the selection (AND conjunction).
///    Candidate order is preserved.
/// 3. Sort: relevance with a live query passes the index order through
///    untouched; every other case stable-sorts by the comparator for
///    the effective key, so equal-key items keep their incoming order.
#[must_use]
pub fn resolve(items: &[Item], index: &mut SearchIndex, state: &FilterState) -> Vec<String> {
    let by_id: HashMap<&str, &Item> = items.iter().map(|i| (i.id.as_str(), i)).collect();

    let query = state.trimmed_query();
    let mut ids: Vec<String> = if query.is_empty() {
        items.iter().map(|i| i.id.clone()).collect()
    } else {
        index.search(query)
    };

    let selected = state.selected_tags();
    if !selected.is_empty() {
        ids.retain(|id| {
            by_id
                .get(id.as_str())
                .is_some_and(|item| item.has_all_keywords(selected))
        });
    }

    if let Some(rank) = rank_of(effective_sort(query, state.sort())) {
        // Stable descending sort; ids the collection does not know sort last.
        ids.sort_by_key(|id| Reverse(by_id.get(id.as_str()).map(|item| rank(item))));
    }

    ids
}

/// The sort key actually applied for a query/key combination
///
/// Relevance is undefined without a query, so an empty query with
/// `Relevance` falls back to `Newest`. This is the single place that
/// fallback rule lives.
#[must_use]
pub fn effective_sort(trimmed_query: &str, key: SortKey) -> SortKey {
    if key == SortKey::Relevance && trimmed_query.is_empty() {
        SortKey::Newest
    } else {
        key
    }
}

/// Comparator table: the descending rank an item sorts by under a key
///
/// `None` for relevance — the index order passes through untouched.
fn rank_of(key: SortKey) -> Option<fn(&Item) -> i64> {
    match key {
        SortKey::Relevance => None,
        SortKey::Newest => Some(|item| {
            use chrono::Datelike;
            i64::from(item.date.num_days_from_ce())
        }),
        SortKey::Citations => Some(|item| rank_count(item.impact.citations)),
        SortKey::Stars => Some(|item| rank_count(item.impact.github_stars)),
    }
}

fn rank_count(count: Option<u64>) -> i64 {
    i64::try_from(count.unwrap_or(0)).unwrap_or(i64::MAX)
}
