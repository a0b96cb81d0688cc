//! Error types for showfinder
//!
//! Provides a single error enum with human-readable messages
//! and Tauri-compatible serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all showfinder operations
///
/// Implements Display for human-readable messages and Serialize
/// for Tauri command compatibility.
#[derive(Error, Debug)]
pub enum ShowfinderError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success status code
    #[error("HTTP {status} from {url}")]
    Status {
        /// Numeric status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Response body was not the JSON we expected
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Configured base URL is unusable
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Search query was empty or whitespace only
    #[error("Search query cannot be empty")]
    EmptyQuery,

    /// No rendered card carries the requested show id
    #[error("No show card rendered for show id {0}")]
    UnknownShow(u64),
}

impl Serialize for ShowfinderError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for showfinder operations
pub type Result<T> = std::result::Result<T, ShowfinderError>;
