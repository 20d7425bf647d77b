//! Testing utilities for facetr
//!
//! Small fixture constructors shared across unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::schema::{Impact, Item};
use chrono::NaiveDate;

/// Build a minimal item fixture
///
/// The title derives from the id; dates parse from `YYYY-MM-DD`.
///
/// # Panics
/// Panics if the date string is not a valid calendar date.
#[must_use]
pub fn item(id: &str, date: &str, keywords: &[&str]) -> Item {
    Item {
        id: id.to_string(),
        title: format!("Title {id}"),
        summary: None,
        abstract_text: None,
        keywords: keywords.iter().map(ToString::to_string).collect(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid fixture date"),
        impact: Impact::default(),
    }
}

/// Two-item collection used across filter and resolution tests
///
/// `p1` is older and carries only `nlp`; `p2` is newer and carries
/// both `nlp` and `rl`.
#[must_use]
pub fn nlp_pair() -> Vec<Item> {
    vec![
        item("p1", "2024-01-01", &["nlp"]),
        item("p2", "2024-06-01", &["nlp", "rl"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_fixture_shape() {
        let fixture = item("p1", "2024-01-01", &["nlp"]);
        assert_eq!(fixture.id, "p1");
        assert_eq!(fixture.keywords, vec!["nlp"]);
        assert_eq!(fixture.impact, Impact::default());
    }

    #[test]
    fn test_nlp_pair_ids_are_distinct() {
        let items = nlp_pair();
        assert_eq!(items.len(), 2);
        assert_ne!(items[0].id, items[1].id);
        assert!(items[0].date < items[1].date);
    }
}
