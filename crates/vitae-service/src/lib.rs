//! Vitae Resolution Service
//!
//! Entry point of the pipeline: a date goes in, one fully populated
//! [`PersonRecord`](vitae_domain::PersonRecord) comes out.
//!
//! # Architecture
//!
//! ```text
//! PersonResolutionService
//!   ├─ DailyCache          (vitae-cache)
//!   ├─ SourceResolver      (vitae-resolver)
//!   │    ├─ tiers ──> EncyclopediaClient (vitae-source)
//!   │    └─ PersonClassifier             (vitae-classifier)
//!   ├─ PatternExtractor    (vitae-extractor)
//!   └─ RecordAssembler
//! ```
//!
//! The service never surfaces resolution failure to its caller. When every
//! tier is exhausted it returns a placeholder record instead.

#![warn(missing_docs)]

mod assembly;
mod config;
mod error;
mod service;

pub use assembly::{RecordAssembler, FALLBACK_DESCRIPTION, FALLBACK_TITLE, PLACEHOLDER_NAME};
pub use config::ServiceConfig;
pub use error::ServiceError;
pub use service::PersonResolutionService;
