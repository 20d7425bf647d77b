//! Item model shared by listings and feeds

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One content entry: a research project or a writing post
///
/// Items are loaded once per page render and are read-only for the
/// lifetime of the engine; the filtering core never creates or destroys
/// them. The `id` matches the key attribute on the item's rendered card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Unique, stable identifier (slug)
    pub id: String,

    /// Display title (searched)
    pub title: String,

    /// Short summary (searched). Projects call this field `tldr`.
    #[serde(default, alias = "tldr")]
    pub summary: Option<String>,

    /// Longer abstract (searched; projects only)
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,

    /// Lowercase tag strings
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Publication date
    pub date: NaiveDate,

    /// Optional impact counters
    #[serde(default)]
    pub impact: Impact,
}

impl Item {
    /// Whether every tag in `tags` is present in this item's keyword set
    #[must_use]
    pub fn has_all_keywords(&self, tags: &[String]) -> bool {
        tags.iter().all(|t| self.keywords.iter().any(|k| k == t))
    }

    /// Concatenated text the search index matches against
    ///
    /// Keywords participate as literal tokens so tag-name queries
    /// surface through the same search path as free text.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        let mut text = self.title.clone();
        for field in [&self.summary, &self.abstract_text] {
            if let Some(s) = field {
                text.push(' ');
                text.push_str(s);
            }
        }
        for keyword in &self.keywords {
            text.push(' ');
            text.push_str(keyword);
        }
        text
    }
}

/// Impact counters for an item
///
/// Every counter is optional; an absent value counts as zero wherever a
/// sort or display needs a number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Impact {
    /// Citation count
    #[serde(default)]
    pub citations: Option<u64>,

    /// GitHub star count
    #[serde(default)]
    pub github_stars: Option<u64>,

    /// Download count
    #[serde(default)]
    pub downloads: Option<u64>,

    /// Press/social mentions
    #[serde(default)]
    pub mentions: Option<u64>,
}

/// Which listing a collection belongs to
///
/// The kind gates which sort keys are offered and picks the default
/// anchor selectors on the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    /// Research projects (impact-based sorts available)
    #[default]
    Projects,
    /// Writing posts
    Writing,
}

impl ListingKind {
    /// Lowercase name, also the URL path segment for this listing
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Writing => "writing",
        }
    }
}

impl std::fmt::Display for ListingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
