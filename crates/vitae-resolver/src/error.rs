//! Error types for source resolution

use chrono::NaiveDate;
use thiserror::Error;
use vitae_source::SourceError;

/// Why a single tier produced no accepted candidate
///
/// These are ordinary outcomes. The runner records them and moves on to the
/// next tier.
#[derive(Error, Debug)]
pub enum TierFailure {
    /// The encyclopedia could not be reached or answered badly
    #[error("transport: {0}")]
    Transport(#[from] SourceError),

    /// No featured article is published for the date
    #[error("no featured entry for the date")]
    NoFeaturedEntry,

    /// A listing (category, search, catalog) had nothing to pick from
    #[error("empty listing: {0}")]
    EmptyListing(String),

    /// The candidate was fetched but rejected by the classifier
    #[error("'{title}' is not a person: {}", reasons.join("; "))]
    NotAPerson {
        /// Title of the rejected article
        title: String,
        /// Classifier rejection reasons
        reasons: Vec<String>,
    },

    /// The candidate had no usable title
    #[error("candidate has no title")]
    IllFormed,

    /// The tier did not finish within its time budget
    #[error("timed out after {0}s")]
    Timeout(u64),
}

/// One tier that was tried and failed
#[derive(Debug)]
pub struct FailedAttempt {
    /// Tier name
    pub tier: String,
    /// What went wrong
    pub failure: TierFailure,
}

impl std::fmt::Display for FailedAttempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.tier, self.failure)
    }
}

/// Errors that can occur during resolution
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Every tier was tried and none produced an accepted candidate
    #[error("no candidate found for {date} after {} tier(s)", attempts.len())]
    ResolutionFailed {
        /// Date being resolved
        date: NaiveDate,
        /// Every tier's failure, in cascade order
        attempts: Vec<FailedAttempt>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
