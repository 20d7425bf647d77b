//! Listing session: state ownership and the resolve→reconcile pipeline
//!
//! A session owns one listing's items, search index, tag catalog, and
//! filter state. Every user action funnels through
//! [`dispatch`](ListingSession::dispatch), which mutates the state and
//! then runs the two-stage pipeline synchronously: resolve the visible
//! id sequence, reconcile it onto the surface. There is no implicit
//! dependency tracking and no asynchronous work, so a resolution always
//! reflects the state value current at dispatch time.

use crate::FacetrError;
use crate::catalog::catalog;
use crate::filter::{FilterState, SortKey};
use crate::index::SearchIndex;
use crate::reconcile;
use crate::resolve::resolve;
use crate::schema::{self, Item, ListingKind};
use crate::surface::{Anchors, RenderSurface};

/// A user action against the filter controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Replace the free-text query
    SetQuery(String),
    /// Toggle one catalog tag
    ToggleTag(String),
    /// Switch the sort criterion
    SetSort(SortKey),
    /// Reset query, tags, and sort
    Clear,
}

/// One listing's engine state
///
/// Items are read-only for the session's lifetime; the index and
/// catalog are derived from them once, at build time. Use
/// [`builder`](Self::builder) to construct.
pub struct ListingSession {
    items: Vec<Item>,
    index: SearchIndex,
    state: FilterState,
    tags: Vec<String>,
    kind: ListingKind,
    anchors: Anchors,
}

impl ListingSession {
    /// Create a new builder for constructing a session
    #[must_use]
    pub fn builder() -> ListingSessionBuilder {
        ListingSessionBuilder::new()
    }

    /// Apply one user action and synchronize the surface
    ///
    /// Tags outside the catalog and sort keys the listing kind does not
    /// support are ignored — controls offering them are a View
    /// precondition, and a violation is a no-op rather than an error.
    pub fn dispatch(&mut self, action: FilterAction, surface: &mut impl RenderSurface) {
        match action {
            FilterAction::SetQuery(text) => self.state.set_query(text),
            FilterAction::ToggleTag(tag) => {
                if !self.tags.iter().any(|t| *t == tag) {
                    return;
                }
                self.state.toggle_tag(&tag);
            }
            FilterAction::SetSort(key) => {
                if !key.valid_for(self.kind) {
                    return;
                }
                self.state.set_sort(key);
            }
            FilterAction::Clear => self.state.clear(),
        }
        self.on_state_changed(surface);
    }

    /// Re-derive the visible sequence and reconcile the surface
    ///
    /// Also the entry point for the initial synchronization after the
    /// cards are first rendered. Safe to call redundantly: an unchanged
    /// sequence reconciles to zero surface mutations.
    pub fn on_state_changed(&mut self, surface: &mut impl RenderSurface) {
        let ids = resolve(&self.items, &mut self.index, &self.state);
        reconcile::apply(&ids, surface, &self.anchors, self.items.len());
    }

    /// Current resolution, without touching any surface
    #[must_use]
    pub fn visible_ids(&mut self) -> Vec<String> {
        resolve(&self.items, &mut self.index, &self.state)
    }

    /// Tag catalog for this listing, sorted ascending
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The item collection
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Current filter state
    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// Listing kind
    #[must_use]
    pub const fn kind(&self) -> ListingKind {
        self.kind
    }

    /// Anchor chains this session reconciles against
    #[must_use]
    pub const fn anchors(&self) -> &Anchors {
        &self.anchors
    }
}

/// Builder for [`ListingSession`]
///
/// ```no_run
/// use facetr::schema::ListingKind;
/// use facetr::session::ListingSession;
/// # fn example(items: Vec<facetr::schema::Item>) -> Result<(), facetr::FacetrError> {
/// let session = ListingSession::builder()
///     .items(items)
///     .kind(ListingKind::Writing)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ListingSessionBuilder {
    items: Vec<Item>,
    kind: ListingKind,
    anchors: Option<Anchors>,
}

impl ListingSessionBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            kind: ListingKind::Projects,
            anchors: None,
        }
    }

    /// Set the item collection (required)
    #[must_use]
    pub fn items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Set the listing kind
    #[must_use]
    pub const fn kind(mut self, kind: ListingKind) -> Self {
        self.kind = kind;
        self
    }

    /// Override the anchor chains (defaults come from the kind)
    #[must_use]
    pub fn anchors(mut self, anchors: Anchors) -> Self {
        self.anchors = Some(anchors);
        self
    }

    /// Build the session
    ///
    /// Validates the collection and derives the search index and tag
    /// catalog.
    ///
    /// # Errors
    /// Returns `FacetrError::SchemaError` on a missing or duplicate
    /// item identifier, or `FacetrError::IndexError` if the index
    /// cannot be built over the collection.
    pub fn build(self) -> Result<ListingSession, FacetrError> {
        schema::validate(&self.items)?;
        let index = SearchIndex::build(&self.items)?;
        let tags = catalog(&self.items);
        let anchors = self
            .anchors
            .unwrap_or_else(|| Anchors::for_kind(self.kind));

        Ok(ListingSession {
            items: self.items,
            index,
            state: FilterState::new(),
            tags,
            kind: self.kind,
            anchors,
        })
    }
}

impl Default for ListingSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
