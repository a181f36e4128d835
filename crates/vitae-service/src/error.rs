//! Error types for the resolution service

use thiserror::Error;
use vitae_extractor::ExtractorError;
use vitae_resolver::ResolverError;
use vitae_source::SourceError;

/// Errors that can occur while building or running the service
///
/// [`crate::PersonResolutionService::get_person_for_date`] never returns
/// these; it degrades to a placeholder record instead.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Encyclopedia client could not be built
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Extraction rules could not be compiled
    #[error("Extractor error: {0}")]
    Extractor(#[from] ExtractorError),

    /// Tier cascade failed or could not be built
    #[error("Resolver error: {0}")]
    Resolver(#[from] ResolverError),
}
