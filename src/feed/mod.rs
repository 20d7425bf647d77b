//! Atom and RSS feed generation over the same item records
//!
//! Feeds are a sibling consumer of the item collections: entries are
//! the items of every listing combined, sorted date-descending, with
//! every interpolated field escaped for XML. Pure string producers — no
//! I/O happens here.

mod atom;
mod rss;

pub use atom::atom_feed;
pub use rss::rss_feed;

use crate::schema::{Item, ListingKind};
use serde::{Deserialize, Serialize};

/// Site-level metadata stamped into feed headers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteMeta {
    /// Absolute origin used to build entry URLs
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Feed title
    #[serde(default)]
    pub title: String,
    /// Feed description/subtitle
    #[serde(default)]
    pub description: String,
    /// Default entry author
    #[serde(default)]
    pub author: String,
}

fn default_origin() -> String {
    "https://example.org".to_string()
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            title: String::new(),
            description: String::new(),
            author: String::new(),
        }
    }
}

/// One feed entry: an item plus the listing it came from
struct Entry<'a> {
    item: &'a Item,
    kind: ListingKind,
}

impl Entry<'_> {
    /// Absolute URL: `<origin>/<kind>/<id>/`
    fn url(&self, origin: &str) -> String {
        format!("{}/{}/{}/", origin.trim_end_matches('/'), self.kind, self.item.id)
    }

    /// Summary text, falling back from summary to abstract to empty
    fn summary(&self) -> &str {
        self.item
            .summary
            .as_deref()
            .or(self.item.abstract_text.as_deref())
            .unwrap_or("")
    }
}

/// Items of every collection combined, newest first
///
/// The sort is stable, so entries sharing a date keep collection order
/// (projects before writing, as the collections were passed).
fn combined<'a>(collections: &[(ListingKind, &'a [Item])]) -> Vec<Entry<'a>> {
    let mut entries: Vec<Entry<'a>> = collections
        .iter()
        .flat_map(|(kind, items)| items.iter().map(|item| Entry { item, kind: *kind }))
        .collect();
    entries.sort_by_key(|e| std::cmp::Reverse(e.item.date));
    entries
}

/// Escape a string for XML element and attribute content
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::item;

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml(r#"<a href="x">R&D 'quotes'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D &apos;quotes&apos;&lt;/a&gt;"
        );
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_combined_sorts_newest_first() {
        let projects = vec![item("old", "2023-01-01", &[])];
        let writing = vec![item("new", "2024-01-01", &[])];
        let collections = [
            (ListingKind::Projects, projects.as_slice()),
            (ListingKind::Writing, writing.as_slice()),
        ];

        let entries = combined(&collections);
        assert_eq!(entries[0].item.id, "new");
        assert_eq!(entries[1].item.id, "old");
    }

    #[test]
    fn test_entry_url_and_summary_fallback() {
        let mut project = item("attention", "2024-01-01", &[]);
        project.abstract_text = Some("long form".to_string());

        let entry = Entry {
            item: &project,
            kind: ListingKind::Projects,
        };
        assert_eq!(
            entry.url("https://example.org/"),
            "https://example.org/projects/attention/"
        );
        assert_eq!(entry.summary(), "long form");
    }
}
