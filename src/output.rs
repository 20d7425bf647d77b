//! Output formatting for CLI display
//!
//! Formatting utilities for the resolved-listing preview: one line per
//! visible card plus the result counter. Printing itself is left to the
//! caller.

use crate::schema::Item;
use colored::Colorize;

/// Format one visible item as a listing line
#[must_use]
pub fn item_line(item: &Item, quiet: bool) -> String {
    if quiet {
        return item.id.clone();
    }

    let date = item.date.to_string().dimmed();
    let title = item.title.bold();
    if item.keywords.is_empty() {
        format!("  {date}  {title}")
    } else {
        format!("  {date}  {title}  [{}]", item.keywords.join(", ").cyan())
    }
}

/// Format the result counter: `"<visible> of <total>"`
#[must_use]
pub fn counter_line(visible: usize, total: usize, quiet: bool) -> String {
    let text = format!("{visible} of {total}");
    if quiet {
        text
    } else {
        text.dimmed().to_string()
    }
}

/// The empty-state line shown when nothing matched
#[must_use]
pub fn empty_line() -> String {
    "  No results".yellow().to_string()
}

/// Format a tag catalog entry
#[must_use]
pub fn tag_line(tag: &str, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::item;

    #[test]
    fn test_item_line_quiet_is_bare_id() {
        let item = item("p1", "2024-01-01", &["nlp"]);
        assert_eq!(item_line(&item, true), "p1");
    }

    #[test]
    fn test_item_line_includes_date_and_tags() {
        colored::control::set_override(false);
        let item = item("p1", "2024-01-01", &["nlp", "rl"]);

        let line = item_line(&item, false);
        assert!(line.contains("2024-01-01"));
        assert!(line.contains("[nlp, rl]"));
        colored::control::unset_override();
    }

    #[test]
    fn test_counter_line_quiet() {
        assert_eq!(counter_line(2, 5, true), "2 of 5");
    }
}
