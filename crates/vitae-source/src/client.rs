//! The client seam between resolution logic and the network

use crate::SourceError;
use async_trait::async_trait;
use chrono::NaiveDate;
use vitae_domain::ArticleCandidate;

/// Read-only access to an online encyclopedia
///
/// Each method is one request shape. Implementations report failures as
/// [`SourceError`]; deciding what a failure means is left to the caller.
#[async_trait]
pub trait EncyclopediaClient: Send + Sync {
    /// Title of the featured article for `date`, if one is published
    async fn featured_title(&self, date: NaiveDate) -> Result<Option<String>, SourceError>;

    /// Full summary of the article named `title`
    async fn page_summary(&self, title: &str) -> Result<ArticleCandidate, SourceError>;

    /// Summary of a random article
    async fn random_summary(&self) -> Result<ArticleCandidate, SourceError>;

    /// Up to `limit` main-namespace article titles in `category`
    async fn category_members(
        &self,
        category: &str,
        limit: usize,
    ) -> Result<Vec<String>, SourceError>;

    /// Up to `limit` main-namespace titles matching a full-text query
    async fn search_titles(&self, query: &str, limit: usize) -> Result<Vec<String>, SourceError>;
}
