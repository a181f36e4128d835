//! Vitae Domain Layer
//!
//! This crate contains the core data model for the Person-of-the-Day pipeline.
//! It has ZERO external dependencies and defines the value types and trait
//! interfaces that the classifier, extractor, resolver and service crates share.
//!
//! ## Key Concepts
//!
//! - **Candidate**: A raw article fetched from the encyclopedia, not yet known to describe a person
//! - **Facts**: Birth year, achievement and field pulled out of free-form article text
//! - **Record**: The fully populated result handed to presentation code
//! - **Sentinels**: Documented placeholder values used instead of empty strings
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and rules only
//! - Network access, caching and regex matching live in other crates
//! - Trait definitions for the two pure text components

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod candidate;
pub mod facts;
pub mod record;
pub mod text;
pub mod traits;

// Re-exports for convenience
pub use candidate::ArticleCandidate;
pub use facts::{BirthYear, Field, PersonFacts, DEFAULT_ACHIEVEMENT};
pub use record::PersonRecord;
