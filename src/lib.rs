//! Facetr - a faceted search and listing engine for content cards
//!
//! This library resolves precomputed content card collections against a
//! filter state (free-text query, conjunctive tags, sort key) into a
//! deterministic ordered sequence of card ids, then reconciles a render
//! surface toward that sequence with minimal mutations.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod feed;
pub mod filter;
pub mod index;
pub mod output;
pub mod reconcile;
pub mod resolve;
pub mod schema;
pub mod session;
pub mod surface;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FacetrError {
    /// Collection schema error
    #[error("Schema error: {0}")]
    SchemaError(#[from] schema::SchemaError),
    /// Search index error
    #[error("Index error: {0}")]
    IndexError(#[from] index::IndexError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
