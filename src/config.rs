//! Site and listing configuration
//!
//! Read from a TOML file; an absent file falls back to defaults so the
//! engine runs with zero configuration. Selector overrides slot into
//! the explicit position of each anchor chain — the resolution order
//! itself (explicit, type default, generic) never changes.

use crate::feed::SiteMeta;
use crate::schema::ListingKind;
use crate::surface::Anchors;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Explicit selector overrides for one listing's anchors
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SelectorOverrides {
    /// Card list container
    #[serde(default)]
    pub list: Option<String>,
    /// Result counter element
    #[serde(default)]
    pub counter: Option<String>,
    /// Empty-state element
    #[serde(default)]
    pub empty: Option<String>,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FacetrConfig {
    /// Site metadata for feed generation
    #[serde(default)]
    pub site: SiteMeta,

    /// Selector overrides for the projects listing
    #[serde(default)]
    pub projects: SelectorOverrides,

    /// Selector overrides for the writing listing
    #[serde(default)]
    pub writing: SelectorOverrides,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl FacetrConfig {
    /// Load configuration from a TOML file, or defaults when absent
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or
    /// deserialized.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Anchor chains for a listing kind with overrides applied
    #[must_use]
    pub fn anchors(&self, kind: ListingKind) -> Anchors {
        let overrides = match kind {
            ListingKind::Projects => &self.projects,
            ListingKind::Writing => &self.writing,
        };

        let mut anchors = Anchors::for_kind(kind);
        anchors.list.explicit = overrides.list.clone();
        anchors.counter.explicit = overrides.counter.clone();
        anchors.empty.explicit = overrides.empty.clone();
        anchors
    }
}
