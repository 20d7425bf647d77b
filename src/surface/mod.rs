//! Render surface contract, selector policy, and the mock surface
//!
//! The View and its markup live outside this crate; these types are the
//! seam the reconciler works through.

mod mock;
mod selectors;
mod traits;

pub use mock::MockSurface;
pub use selectors::{Anchors, SelectorChain};
pub use traits::RenderSurface;
