//! Prioritized selector resolution
//!
//! Anchors are located through a fixed, ordered chain that is identical
//! across listing kinds: explicit override, then the kind-specific
//! default, then a generic catch-all. One lookup function implements
//! the policy; callers never chain alternatives ad hoc.

use super::traits::RenderSurface;
use crate::schema::ListingKind;

/// Ordered candidate selectors for one anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorChain {
    /// Caller-provided override, tried first
    pub explicit: Option<String>,
    /// Kind-specific default
    pub type_default: String,
    /// Generic catch-all, tried last
    pub generic: String,
}

impl SelectorChain {
    /// Chain with no explicit override
    #[must_use]
    pub fn new(type_default: impl Into<String>, generic: impl Into<String>) -> Self {
        Self {
            explicit: None,
            type_default: type_default.into(),
            generic: generic.into(),
        }
    }

    /// First candidate present on the surface, in chain order
    ///
    /// `None` when nothing matches; the caller decides whether that
    /// skips one sub-step (counter, empty state) or the whole pass
    /// (list container).
    #[must_use]
    pub fn locate(&self, surface: &impl RenderSurface) -> Option<&str> {
        self.candidates().find(|s| surface.exists(s))
    }

    fn candidates(&self) -> impl Iterator<Item = &str> {
        self.explicit
            .as_deref()
            .into_iter()
            .chain([self.type_default.as_str(), self.generic.as_str()])
    }
}

/// The three anchors one listing reconciles against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchors {
    /// Card list container; without it the whole pass is skipped
    pub list: SelectorChain,
    /// Result counter ("n of total")
    pub counter: SelectorChain,
    /// Empty-state placeholder, shown only for zero results
    pub empty: SelectorChain,
}

impl Anchors {
    /// Default anchor chains for a listing kind
    ///
    /// Type defaults are `#<kind>-list`, `#<kind>-count`, and
    /// `#<kind>-empty`; the catch-alls (`.cards-grid`,
    /// `.listing-count`, `.listing-empty`) are shared by every kind.
    #[must_use]
    pub fn for_kind(kind: ListingKind) -> Self {
        let name = kind.as_str();
        Self {
            list: SelectorChain::new(format!("#{name}-list"), ".cards-grid"),
            counter: SelectorChain::new(format!("#{name}-count"), ".listing-count"),
            empty: SelectorChain::new(format!("#{name}-empty"), ".listing-empty"),
        }
    }
}
