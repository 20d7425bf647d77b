//! Item collection model, loading, and validation
//!
//! Items are the shared record between the filtering core and the feed
//! generators: searchable text fields, lowercase keywords, a calendar
//! date, and optional impact counters. A collection is loaded once per
//! page render; identifier problems are caught here, at load time.

mod error;
mod loader;
mod types;

pub use error::SchemaError;
pub use loader::{load_items, validate};
pub use types::{Impact, Item, ListingKind};
