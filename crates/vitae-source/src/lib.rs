//! Vitae Source Layer
//!
//! Access to the public encyclopedia that supplies candidate articles.
//!
//! # Architecture
//!
//! Everything above this crate talks to the [`EncyclopediaClient`] trait and
//! never sees HTTP. Two implementations are provided:
//!
//! - [`WikipediaClient`]: the REST + action API over `reqwest`
//! - [`MockClient`]: deterministic in-memory client for tests
//!
//! # Examples
//!
//! ```
//! use vitae_domain::ArticleCandidate;
//! use vitae_source::{EncyclopediaClient, MockClient};
//!
//! let client = MockClient::new()
//!     .with_summary(ArticleCandidate::new("Ada Lovelace", "1001"));
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let candidate = rt.block_on(client.page_summary("Ada Lovelace")).unwrap();
//! assert_eq!(candidate.source_page_id, "1001");
//! ```

#![warn(missing_docs)]

mod client;
mod config;
mod error;
pub mod mock;
pub mod wikipedia;

pub use client::EncyclopediaClient;
pub use config::{SourceConfig, MAX_ATTEMPTS, MAX_RETRY_BASE_DELAY_MS};
pub use error::SourceError;
pub use mock::{Endpoint, MockClient};
pub use wikipedia::WikipediaClient;
