//! Live filter state for a listing session
//!
//! Holds the current query text, selected tag set, and sort key.
//! Mutated only by explicit user actions (query edit, tag toggle, sort
//! change, clear); never by the resolver. Nothing here persists across
//! page loads.

use crate::schema::ListingKind;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Sort criterion for a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recent first
    #[default]
    Newest,
    /// Index ranking order; meaningful only with a non-empty query
    Relevance,
    /// Citation count, descending (absent counts as zero)
    Citations,
    /// GitHub star count, descending (absent counts as zero)
    Stars,
}

impl SortKey {
    /// Whether this sort key is offered for the given listing kind
    ///
    /// Writing posts carry no impact counters, so only date and
    /// relevance ordering make sense there.
    #[must_use]
    pub const fn valid_for(self, kind: ListingKind) -> bool {
        match kind {
            ListingKind::Projects => true,
            ListingKind::Writing => matches!(self, Self::Newest | Self::Relevance),
        }
    }
}

/// Mutable filter triple: query, selected tags, sort key
///
/// Initialized to `("", none, Newest)`. The selected-tag invariant
/// (tags come from the catalog) is a precondition on the controls that
/// call [`toggle_tag`](Self::toggle_tag); the session layer drops
/// unknown tags before they reach this struct.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    query: String,
    selected_tags: Vec<String>,
    sort: SortKey,
}

impl FilterState {
    /// Create the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the free-text query
    ///
    /// Stored verbatim; whitespace-only queries are treated as empty at
    /// resolution time, not here.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Toggle a tag: remove it if selected, add it otherwise
    ///
    /// Returns true if the tag was added, false if removed.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(pos);
            false
        } else {
            self.selected_tags.push(tag.to_string());
            true
        }
    }

    /// Replace the active sort key
    pub const fn set_sort(&mut self, key: SortKey) {
        self.sort = key;
    }

    /// Full reset: empty query, no tags, `Newest`
    ///
    /// Always `Newest`, independent of what sort was active — "Clear"
    /// resets everything, not just the filters.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The stored query, verbatim
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The query with surrounding whitespace stripped
    ///
    /// This is the form the resolver consumes; an all-whitespace query
    /// resolves as empty.
    #[must_use]
    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    /// Currently selected tags, in selection order
    #[must_use]
    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    /// Whether a tag is currently selected
    #[must_use]
    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected_tags.iter().any(|t| t == tag)
    }

    /// The active sort key
    #[must_use]
    pub const fn sort(&self) -> SortKey {
        self.sort
    }
}
