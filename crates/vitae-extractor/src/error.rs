//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while building an extractor
///
/// Extraction itself is infallible. These only surface at construction time.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A rule pattern failed to compile
    #[error("Invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        /// Rule name
        rule: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
