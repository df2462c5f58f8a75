// src/errors.rs

//! Library error type. The binary wraps it in `anyhow` at the edge.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GapfillError {
    /// The parent relation loops back on itself, or a single upward walk
    /// exceeded the configured depth bound.
    ///
    /// This is a data-integrity bug in whatever built the tree; retrying
    /// will not help.
    #[error("Malformed hierarchy at '{node}' after walking {walked} ancestor(s)")]
    MalformedHierarchy { node: String, walked: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Cycle detected in project hierarchy: {0}")]
    HierarchyCycle(String),

    #[error("Project not found: {0}")]
    UnknownProject(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GapfillError>;
