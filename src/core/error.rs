//! Error types for `rbviz`

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for loading, rendering and viewing trees
#[derive(Error, Debug)]
pub enum VizError {
    /// A file could not be read or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path that was being read or written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The input was not a valid tree document
    #[error("Invalid tree JSON in {}: {source}", .path.display())]
    Json {
        /// Path of the offending document (`<inline>` for in-memory input)
        path: PathBuf,
        /// Underlying parse failure
        #[source]
        source: serde_json::Error,
    },

    /// The browser could not be launched
    #[error("Failed to open browser: {0}")]
    Browser(String),

    /// Unsupported output format name
    #[error("Unknown render format: '{0}' (expected dot, mermaid or text)")]
    UnknownFormat(String),
}

/// Result type alias for `rbviz` operations
pub type Result<T> = std::result::Result<T, VizError>;
