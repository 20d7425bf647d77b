//! Tag catalog derivation

use crate::schema::Item;
use std::collections::BTreeSet;

/// Deduplicated set of all tags across items, lexicographically sorted
///
/// Pure and total: a linear scan with no failure modes. Recompute
/// whenever the item collection changes — in practice once, at load.
/// Every returned tag appears in at least one item's keyword set.
#[must_use]
pub fn catalog(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.keywords.iter().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
