//! Wikipedia client
//!
//! Talks to the REST API for featured content and page summaries and to the
//! action API for category listings and full-text search.
//!
//! # Features
//!
//! - Per-request timeout
//! - Retry with exponential backoff for transport errors and 5xx answers
//! - Disambiguation pages reported as errors
//!
//! # Examples
//!
//! ```no_run
//! use vitae_source::{EncyclopediaClient, SourceConfig, WikipediaClient};
//!
//! # async fn run() -> Result<(), vitae_source::SourceError> {
//! let client = WikipediaClient::new(SourceConfig::default())?;
//! let candidate = client.page_summary("Ada Lovelace").await?;
//! println!("{}", candidate.extract);
//! # Ok(())
//! # }
//! ```

use crate::{EncyclopediaClient, SourceConfig, SourceError};
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use vitae_domain::ArticleCandidate;

/// Namespace prefix the action API expects on category titles
const CATEGORY_PREFIX: &str = "Category:";

/// HTTP client for the Wikipedia APIs
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    config: SourceConfig,
    rest_base: Url,
    action_api: Url,
    client: reqwest::Client,
}

/// Response from `/feed/featured/{y}/{m}/{d}`
#[derive(Debug, Deserialize)]
struct FeaturedResponse {
    tfa: Option<TitleOnly>,
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TitleOnly {
    title: String,
}

/// Response from `/page/summary/{title}` and `/page/random/summary`
#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    title: String,
    #[serde(default)]
    extract: String,
    #[serde(default)]
    description: String,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    thumbnail: Option<Thumbnail>,
    content_urls: Option<ContentUrls>,
    pageid: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: String,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<DesktopUrls>,
}

#[derive(Debug, Deserialize)]
struct DesktopUrls {
    page: String,
}

/// Envelope of an action API `list=` query
#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<QueryBody>,
}

#[derive(Debug, Default, Deserialize)]
struct QueryBody {
    #[serde(default)]
    categorymembers: Vec<TitleOnly>,
    #[serde(default)]
    search: Vec<TitleOnly>,
}

impl SummaryResponse {
    fn into_candidate(self) -> Result<ArticleCandidate, SourceError> {
        if self.title.trim().is_empty() {
            return Err(SourceError::InvalidResponse(
                "summary has no title".to_string(),
            ));
        }

        if self.kind.as_deref() == Some("disambiguation") {
            return Err(SourceError::Disambiguation(self.title));
        }

        let page_id = match self.pageid {
            Some(serde_json::Value::Number(n)) => n.to_string(),
            Some(serde_json::Value::String(s)) => s,
            _ => String::new(),
        };

        let mut candidate = ArticleCandidate::new(self.title, page_id)
            .with_extract(self.extract)
            .with_description(self.description);
        if let Some(thumbnail) = self.thumbnail {
            candidate = candidate.with_thumbnail(thumbnail.source);
        }
        if let Some(page) = self.content_urls.and_then(|urls| urls.desktop) {
            candidate = candidate.with_canonical_url(page.page);
        }
        Ok(candidate)
    }
}

impl WikipediaClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Config`] for an invalid configuration and
    /// [`SourceError::Http`] if the underlying client cannot be built.
    pub fn new(config: SourceConfig) -> Result<Self, SourceError> {
        config.validate().map_err(SourceError::Config)?;

        let rest_base = parse_base(&config.rest_base_url)?;
        let action_api = parse_base(&config.action_api_url)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            config,
            rest_base,
            action_api,
            client,
        })
    }

    /// Create a client against English Wikipedia with default settings
    pub fn default_config() -> Result<Self, SourceError> {
        Self::new(SourceConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    fn rest_url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, SourceError> {
        let mut url = self.rest_base.clone();
        url.path_segments_mut()
            .map_err(|_| SourceError::InvalidUrl(self.rest_base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn featured_url(&self, date: NaiveDate) -> Result<Url, SourceError> {
        let year = format!("{:04}", date.year());
        let month = format!("{:02}", date.month());
        let day = format!("{:02}", date.day());
        self.rest_url(["feed", "featured", year.as_str(), month.as_str(), day.as_str()])
    }

    fn summary_url(&self, title: &str) -> Result<Url, SourceError> {
        self.rest_url(["page", "summary", title])
    }

    fn random_url(&self) -> Result<Url, SourceError> {
        self.rest_url(["page", "random", "summary"])
    }

    fn query_url(&self, params: &[(&str, &str)]) -> Url {
        let mut url = self.action_api.clone();
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("format", "json")
            .extend_pairs(params.iter().copied());
        url
    }

    fn category_url(&self, category: &str, limit: usize) -> Url {
        let title = if category.starts_with(CATEGORY_PREFIX) {
            category.to_string()
        } else {
            format!("{}{}", CATEGORY_PREFIX, category)
        };
        let limit = limit.to_string();
        self.query_url(&[
            ("list", "categorymembers"),
            ("cmtitle", title.as_str()),
            ("cmlimit", limit.as_str()),
            ("cmnamespace", "0"),
        ])
    }

    fn search_url(&self, query: &str, limit: usize) -> Url {
        let limit = limit.to_string();
        self.query_url(&[
            ("list", "search"),
            ("srsearch", query),
            ("srlimit", limit.as_str()),
            ("srnamespace", "0"),
        ])
    }

    /// Backoff before retry number `retry` (1-based): base, then doubling
    fn retry_delay(&self, retry: u32) -> Duration {
        let factor = 1u64 << retry.saturating_sub(1).min(16);
        Duration::from_millis(self.config.retry_base_delay_ms.saturating_mul(factor))
    }

    /// GET `url` and decode the JSON body
    ///
    /// Transport errors and 5xx answers are retried up to `max_retries`
    /// attempts in total. 404 maps to [`SourceError::NotFound`] with
    /// `subject` and is never retried.
    async fn get_json<T: DeserializeOwned>(&self, url: Url, subject: &str) -> Result<T, SourceError> {
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.config.max_retries {
            debug!(url = %url, attempt = attempts + 1, "GET");
            match self.client.get(url.clone()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response
                            .json::<T>()
                            .await
                            .map_err(|e| SourceError::InvalidResponse(e.to_string()));
                    }
                    if status == StatusCode::NOT_FOUND {
                        return Err(SourceError::NotFound(subject.to_string()));
                    }

                    let error = SourceError::Status {
                        status: status.as_u16(),
                        url: url.to_string(),
                    };
                    if !status.is_server_error() {
                        return Err(error);
                    }
                    last_error = Some(error);
                }
                Err(e) => last_error = Some(SourceError::Http(e)),
            }

            attempts += 1;
            if attempts < self.config.max_retries {
                let delay = self.retry_delay(attempts);
                warn!(url = %url, attempt = attempts, ?delay, "request failed, retrying");
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error.unwrap_or_else(|| SourceError::InvalidResponse("no attempt made".to_string())))
    }
}

fn parse_base(raw: &str) -> Result<Url, SourceError> {
    Url::parse(raw).map_err(|e| SourceError::InvalidUrl(format!("{}: {}", raw, e)))
}

#[async_trait]
impl EncyclopediaClient for WikipediaClient {
    async fn featured_title(&self, date: NaiveDate) -> Result<Option<String>, SourceError> {
        let url = self.featured_url(date)?;
        let featured: FeaturedResponse = match self.get_json(url, &date.to_string()).await {
            Ok(featured) => featured,
            Err(SourceError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        Ok(featured
            .tfa
            .map(|tfa| tfa.title)
            .or(featured.title)
            .filter(|title| !title.trim().is_empty()))
    }

    async fn page_summary(&self, title: &str) -> Result<ArticleCandidate, SourceError> {
        let url = self.summary_url(title)?;
        let summary: SummaryResponse = self.get_json(url, title).await?;
        summary.into_candidate()
    }

    async fn random_summary(&self) -> Result<ArticleCandidate, SourceError> {
        let url = self.random_url()?;
        let summary: SummaryResponse = self.get_json(url, "random article").await?;
        summary.into_candidate()
    }

    async fn category_members(
        &self,
        category: &str,
        limit: usize,
    ) -> Result<Vec<String>, SourceError> {
        let url = self.category_url(category, limit);
        let response: QueryResponse = self.get_json(url, category).await?;
        Ok(response
            .query
            .unwrap_or_default()
            .categorymembers
            .into_iter()
            .map(|member| member.title)
            .collect())
    }

    async fn search_titles(&self, query: &str, limit: usize) -> Result<Vec<String>, SourceError> {
        let url = self.search_url(query, limit);
        let response: QueryResponse = self.get_json(url, query).await?;
        Ok(response
            .query
            .unwrap_or_default()
            .search
            .into_iter()
            .map(|hit| hit.title)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> WikipediaClient {
        WikipediaClient::default_config().unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = client();
        assert_eq!(client.config().max_retries, 1);
        assert_eq!(client.config().request_timeout_secs, 10);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SourceConfig {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            WikipediaClient::new(config),
            Err(SourceError::Config(_))
        ));
    }

    #[test]
    fn test_retry_delay_doubles_and_saturates() {
        let client = WikipediaClient::new(SourceConfig {
            retry_base_delay_ms: 100,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.retry_delay(1), Duration::from_millis(100));
        assert_eq!(client.retry_delay(3), Duration::from_millis(400));
        assert_eq!(client.retry_delay(u32::MAX), Duration::from_millis(100 << 16));
    }

    #[test]
    fn test_featured_url_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            client().featured_url(date).unwrap().as_str(),
            "https://en.wikipedia.org/api/rest_v1/feed/featured/2024/03/07"
        );
    }

    #[test]
    fn test_summary_url_encodes_title() {
        let client = client();
        assert_eq!(
            client.summary_url("Ada Lovelace").unwrap().as_str(),
            "https://en.wikipedia.org/api/rest_v1/page/summary/Ada%20Lovelace"
        );
        assert!(client
            .summary_url("AC/DC")
            .unwrap()
            .as_str()
            .ends_with("/page/summary/AC%2FDC"));
    }

    #[test]
    fn test_random_url() {
        assert_eq!(
            client().random_url().unwrap().as_str(),
            "https://en.wikipedia.org/api/rest_v1/page/random/summary"
        );
    }

    #[test]
    fn test_category_url() {
        let url = client().category_url("American inventors", 50);
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(url.path(), "/w/api.php");
        assert!(pairs.contains(&("list".into(), "categorymembers".into())));
        assert!(pairs.contains(&("cmtitle".into(), "Category:American inventors".into())));
        assert!(pairs.contains(&("cmlimit".into(), "50".into())));
        assert!(pairs.contains(&("cmnamespace".into(), "0".into())));
    }

    #[test]
    fn test_category_prefix_not_doubled() {
        let url = client().category_url("Category:Poets", 5);
        assert!(url
            .query_pairs()
            .any(|(k, v)| k == "cmtitle" && v == "Category:Poets"));
    }

    #[test]
    fn test_search_url() {
        let url = client().search_url("biography born died", 20);
        assert!(url
            .query_pairs()
            .any(|(k, v)| k == "srsearch" && v == "biography born died"));
        assert!(url.query_pairs().any(|(k, v)| k == "srlimit" && v == "20"));
        assert!(url.query_pairs().any(|(k, v)| k == "srnamespace" && v == "0"));
    }

    #[test]
    fn test_summary_maps_to_candidate() {
        let body = r#"{
            "type": "standard",
            "title": "Ada Lovelace",
            "pageid": 1001,
            "extract": "Augusta Ada King (10 December 1815 – 27 November 1852) was an English mathematician.",
            "description": "English mathematician (1815–1852)",
            "thumbnail": { "source": "https://upload.example/ada.jpg", "width": 320 },
            "content_urls": { "desktop": { "page": "https://en.wikipedia.org/wiki/Ada_Lovelace" } }
        }"#;
        let summary: SummaryResponse = serde_json::from_str(body).unwrap();
        let candidate = summary.into_candidate().unwrap();

        assert_eq!(candidate.title, "Ada Lovelace");
        assert_eq!(candidate.source_page_id, "1001");
        assert_eq!(candidate.description, "English mathematician (1815–1852)");
        assert_eq!(candidate.thumbnail_url.as_deref(), Some("https://upload.example/ada.jpg"));
        assert_eq!(
            candidate.canonical_url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Ada_Lovelace")
        );
    }

    #[test]
    fn test_summary_with_missing_optionals() {
        let summary: SummaryResponse =
            serde_json::from_str(r#"{ "title": "Nobody", "pageid": "77" }"#).unwrap();
        let candidate = summary.into_candidate().unwrap();
        assert_eq!(candidate.source_page_id, "77");
        assert!(candidate.extract.is_empty());
        assert!(candidate.thumbnail_url.is_none());
        assert!(candidate.canonical_url.is_none());
    }

    #[test]
    fn test_disambiguation_is_an_error() {
        let summary: SummaryResponse = serde_json::from_str(
            r#"{ "type": "disambiguation", "title": "Mercury", "pageid": 5 }"#,
        )
        .unwrap();
        assert!(matches!(
            summary.into_candidate(),
            Err(SourceError::Disambiguation(t)) if t == "Mercury"
        ));
    }

    #[test]
    fn test_untitled_summary_is_invalid() {
        let summary: SummaryResponse = serde_json::from_str(r#"{ "extract": "x" }"#).unwrap();
        assert!(matches!(
            summary.into_candidate(),
            Err(SourceError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_featured_prefers_tfa() {
        let featured: FeaturedResponse =
            serde_json::from_str(r#"{ "tfa": { "title": "Grace Hopper" }, "title": "Other" }"#)
                .unwrap();
        assert_eq!(
            featured.tfa.map(|t| t.title).or(featured.title).as_deref(),
            Some("Grace Hopper")
        );
    }

    #[test]
    fn test_query_response_shapes() {
        let members: QueryResponse = serde_json::from_str(
            r#"{ "query": { "categorymembers": [ { "pageid": 1, "ns": 0, "title": "A" }, { "title": "B" } ] } }"#,
        )
        .unwrap();
        assert_eq!(members.query.unwrap().categorymembers.len(), 2);

        let empty: QueryResponse = serde_json::from_str(r#"{ "batchcomplete": "" }"#).unwrap();
        assert!(empty.query.is_none());
    }

    // Requires network access to en.wikipedia.org
    #[tokio::test]
    #[ignore]
    async fn test_live_summary() {
        let candidate = client().page_summary("Ada Lovelace").await.unwrap();
        assert_eq!(candidate.title, "Ada Lovelace");
        assert!(!candidate.extract.is_empty());
    }
}
