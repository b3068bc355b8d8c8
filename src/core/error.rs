//! Defines the custom error type for the collector.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for the collector.
///
/// This enum encapsulates all possible errors that can occur during
/// configuration, time-window parsing, directory traversal, and file copying.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// Represents an invalid or incomplete configuration payload.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Represents an operation attempted before any configuration was applied.
    #[error("engine is not configured")]
    NotConfigured,

    /// Represents a malformed boundary payload (configuration or query map).
    #[error("invalid payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Represents a `from`/`to` string that does not match the expected
    /// `YYYY-MM-DDTHH:MM` pattern or denotes an impossible date/time.
    /// The source is absent when the input fails the fixed-width shape check
    /// before a parse is ever attempted.
    #[error("error parsing time {input:?} (format required: YYYY-MM-DDTHH:MM)")]
    Parse {
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    /// Represents an I/O error, typically from file copy operations.
    #[error("I/O error for path {1}: {0}")]
    Io(#[source] std::io::Error, PathBuf),

    /// Represents a failure while traversing a search root.
    #[error("directory traversal failed: {0}")]
    Walk(#[from] walkdir::Error),
}
