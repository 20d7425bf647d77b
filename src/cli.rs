//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **list**: resolve a listing under the given filters and print it
//! - **tags**: print the tag catalog for a collection
//! - **feed**: print an Atom or RSS document over one or more collections
//!
//! A global `--quiet` flag suppresses informational output and a global
//! `--config` flag points at a TOML configuration file.

use crate::filter::SortKey;
use crate::schema::ListingKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Feed output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    /// Atom 1.0
    Atom,
    /// RSS 2.0
    Rss,
}

/// Faceted search and listing over content card collections
#[derive(Parser, Debug)]
#[command(name = "facetr", version, about)]
pub struct Cli {
    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve and print a listing under the given filters
    #[command(alias = "l")]
    List {
        /// Item collection file (JSON array)
        #[arg(short, long)]
        items: PathBuf,

        /// Listing kind; gates which sort keys are available
        #[arg(short, long, value_enum, default_value_t = ListingKind::Projects)]
        kind: ListingKind,

        /// Free-text query
        query: Option<String>,

        /// Tag that must be present; repeat for AND semantics
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Sort criterion
        #[arg(short, long, value_enum, default_value_t = SortKey::Newest)]
        sort: SortKey,
    },

    /// Print the tag catalog for a collection
    #[command(alias = "t")]
    Tags {
        /// Item collection file (JSON array)
        #[arg(short, long)]
        items: PathBuf,
    },

    /// Print an Atom or RSS feed over one or more collections
    #[command(alias = "f")]
    Feed {
        /// Projects collection file (JSON array)
        #[arg(long)]
        projects: Option<PathBuf>,

        /// Writing collection file (JSON array)
        #[arg(long)]
        writing: Option<PathBuf>,

        /// Feed format
        #[arg(short, long, value_enum, default_value_t = FeedFormat::Atom)]
        format: FeedFormat,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
