//! Error types for the source layer

use thiserror::Error;

/// Errors raised while talking to the encyclopedia
///
/// All of these are transient from the resolver's point of view: a tier that
/// sees one simply yields nothing.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Transport failure (connect, timeout, TLS, body read)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status {
        /// Status code returned
        status: u16,
        /// Requested URL
        url: String,
    },

    /// No page exists for the requested title
    #[error("Page not found: {0}")]
    NotFound(String),

    /// The title resolves to a disambiguation page
    #[error("Disambiguation page: {0}")]
    Disambiguation(String),

    /// Body could not be decoded or lacked required fields
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A request URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure injected by a test double
    #[error("Injected failure on {0}")]
    Injected(String),
}
