//! Deterministic in-memory encyclopedia
//!
//! [`MockClient`] serves canned data without touching the network, counts
//! calls per endpoint and can be told to fail any endpoint. Clones share
//! state, so a test can keep a handle after giving one to the code under test.
//!
//! # Examples
//!
//! ```
//! use vitae_domain::ArticleCandidate;
//! use vitae_source::{Endpoint, EncyclopediaClient, MockClient};
//!
//! let client = MockClient::new()
//!     .with_category("Physicists", ["Lise Meitner"])
//!     .with_summary(ArticleCandidate::new("Lise Meitner", "42"));
//! client.fail(Endpoint::Featured);
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let titles = rt.block_on(client.category_members("Physicists", 50)).unwrap();
//! assert_eq!(titles, vec!["Lise Meitner".to_string()]);
//! assert_eq!(client.call_count(Endpoint::CategoryMembers), 1);
//! ```

use crate::{EncyclopediaClient, SourceError};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use vitae_domain::ArticleCandidate;

/// One request shape of [`EncyclopediaClient`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `featured_title`
    Featured,
    /// `page_summary`
    Summary,
    /// `random_summary`
    Random,
    /// `category_members`
    CategoryMembers,
    /// `search_titles`
    Search,
}

impl Endpoint {
    /// All endpoints
    pub const ALL: [Endpoint; 5] = [
        Endpoint::Featured,
        Endpoint::Summary,
        Endpoint::Random,
        Endpoint::CategoryMembers,
        Endpoint::Search,
    ];
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::Featured => "featured",
            Endpoint::Summary => "summary",
            Endpoint::Random => "random",
            Endpoint::CategoryMembers => "category-members",
            Endpoint::Search => "search",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Default)]
struct MockState {
    featured: HashMap<NaiveDate, String>,
    summaries: HashMap<String, ArticleCandidate>,
    random: Vec<ArticleCandidate>,
    random_cursor: usize,
    categories: HashMap<String, Vec<String>>,
    searches: HashMap<String, Vec<String>>,
    failing: HashSet<Endpoint>,
    failing_titles: HashSet<String>,
    calls: HashMap<Endpoint, usize>,
}

/// Mock encyclopedia client for deterministic testing
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    state: Arc<Mutex<MockState>>,
}

impl MockClient {
    /// Create an empty mock: no featured entries, no pages, empty listings
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Publish `title` as the featured article for `date`
    pub fn with_featured(self, date: NaiveDate, title: impl Into<String>) -> Self {
        self.state().featured.insert(date, title.into());
        self
    }

    /// Serve `candidate` for its own title
    pub fn with_summary(self, candidate: ArticleCandidate) -> Self {
        self.state()
            .summaries
            .insert(candidate.title.clone(), candidate);
        self
    }

    /// Append a candidate to the random-article rotation
    pub fn with_random(self, candidate: ArticleCandidate) -> Self {
        self.state().random.push(candidate);
        self
    }

    /// List `titles` as members of `category`
    pub fn with_category<I, S>(self, category: impl Into<String>, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state()
            .categories
            .insert(category.into(), titles.into_iter().map(Into::into).collect());
        self
    }

    /// Return `titles` for a search on `query`
    pub fn with_search<I, S>(self, query: impl Into<String>, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state()
            .searches
            .insert(query.into(), titles.into_iter().map(Into::into).collect());
        self
    }

    /// Make every call to `endpoint` fail
    pub fn fail(&self, endpoint: Endpoint) {
        self.state().failing.insert(endpoint);
    }

    /// Make summary lookups for `title` fail
    pub fn fail_title(&self, title: impl Into<String>) {
        self.state().failing_titles.insert(title.into());
    }

    /// Stop failing `endpoint`
    pub fn recover(&self, endpoint: Endpoint) {
        self.state().failing.remove(&endpoint);
    }

    /// Number of calls made to `endpoint`
    pub fn call_count(&self, endpoint: Endpoint) -> usize {
        self.state().calls.get(&endpoint).copied().unwrap_or(0)
    }

    /// Number of calls across all endpoints
    pub fn total_calls(&self) -> usize {
        self.state().calls.values().sum()
    }

    /// Reset all call counts
    pub fn reset_call_counts(&self) {
        self.state().calls.clear();
    }

    /// Record a call and return the state if the endpoint is healthy
    fn begin(&self, endpoint: Endpoint) -> Result<MutexGuard<'_, MockState>, SourceError> {
        let mut state = self.state();
        *state.calls.entry(endpoint).or_insert(0) += 1;
        if state.failing.contains(&endpoint) {
            return Err(SourceError::Injected(endpoint.to_string()));
        }
        Ok(state)
    }
}

#[async_trait]
impl EncyclopediaClient for MockClient {
    async fn featured_title(&self, date: NaiveDate) -> Result<Option<String>, SourceError> {
        let state = self.begin(Endpoint::Featured)?;
        Ok(state.featured.get(&date).cloned())
    }

    async fn page_summary(&self, title: &str) -> Result<ArticleCandidate, SourceError> {
        let state = self.begin(Endpoint::Summary)?;
        if state.failing_titles.contains(title) {
            return Err(SourceError::Injected(format!("summary of {}", title)));
        }
        state
            .summaries
            .get(title)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(title.to_string()))
    }

    async fn random_summary(&self) -> Result<ArticleCandidate, SourceError> {
        let mut state = self.begin(Endpoint::Random)?;
        if state.random.is_empty() {
            return Err(SourceError::NotFound("random article".to_string()));
        }
        let index = state.random_cursor % state.random.len();
        state.random_cursor += 1;
        Ok(state.random[index].clone())
    }

    async fn category_members(
        &self,
        category: &str,
        limit: usize,
    ) -> Result<Vec<String>, SourceError> {
        let state = self.begin(Endpoint::CategoryMembers)?;
        Ok(state
            .categories
            .get(category)
            .map(|titles| titles.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    async fn search_titles(&self, query: &str, limit: usize) -> Result<Vec<String>, SourceError> {
        let state = self.begin(Endpoint::Search)?;
        Ok(state
            .searches
            .get(query)
            .map(|titles| titles.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[tokio::test]
    async fn test_empty_mock() {
        let client = MockClient::new();
        assert_eq!(client.featured_title(date()).await.unwrap(), None);
        assert!(client.category_members("Any", 50).await.unwrap().is_empty());
        assert!(matches!(
            client.page_summary("Nobody").await,
            Err(SourceError::NotFound(_))
        ));
        assert!(client.random_summary().await.is_err());
    }

    #[tokio::test]
    async fn test_canned_responses() {
        let client = MockClient::new()
            .with_featured(date(), "Grace Hopper")
            .with_summary(ArticleCandidate::new("Grace Hopper", "9").with_extract("Computer scientist."))
            .with_search("biography born died", ["A", "B", "C"]);

        assert_eq!(
            client.featured_title(date()).await.unwrap().as_deref(),
            Some("Grace Hopper")
        );
        assert_eq!(client.page_summary("Grace Hopper").await.unwrap().source_page_id, "9");
        assert_eq!(
            client.search_titles("biography born died", 2).await.unwrap(),
            vec!["A".to_string(), "B".to_string()]
        );
    }

    #[tokio::test]
    async fn test_call_counts_are_shared_between_clones() {
        let client = MockClient::new();
        let handle = client.clone();

        client.featured_title(date()).await.unwrap();
        client.search_titles("q", 20).await.unwrap();
        client.search_titles("q", 20).await.unwrap();

        assert_eq!(handle.call_count(Endpoint::Featured), 1);
        assert_eq!(handle.call_count(Endpoint::Search), 2);
        assert_eq!(handle.total_calls(), 3);

        handle.reset_call_counts();
        assert_eq!(client.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let client = MockClient::new().with_featured(date(), "Someone");
        client.fail(Endpoint::Featured);

        assert!(matches!(
            client.featured_title(date()).await,
            Err(SourceError::Injected(_))
        ));
        assert_eq!(client.call_count(Endpoint::Featured), 1);

        client.recover(Endpoint::Featured);
        assert!(client.featured_title(date()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_title_failure() {
        let client = MockClient::new().with_summary(ArticleCandidate::new("Flaky", "1"));
        client.fail_title("Flaky");
        assert!(client.page_summary("Flaky").await.is_err());
    }

    #[tokio::test]
    async fn test_random_rotation() {
        let client = MockClient::new()
            .with_random(ArticleCandidate::new("First", "1"))
            .with_random(ArticleCandidate::new("Second", "2"));

        assert_eq!(client.random_summary().await.unwrap().title, "First");
        assert_eq!(client.random_summary().await.unwrap().title, "Second");
        assert_eq!(client.random_summary().await.unwrap().title, "First");
    }
}
