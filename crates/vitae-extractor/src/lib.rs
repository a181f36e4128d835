//! Vitae Extractor
//!
//! Pulls a birth year, an achievement phrase and a topical field out of
//! free-form encyclopedia prose.
//!
//! # Overview
//!
//! There is no structured source data, so every fact comes from layered,
//! priority-ordered pattern rules:
//!
//! - **Birth year**: life-span parentheticals first, looser "born ..." and bare
//!   "1853–" fragments after. Only years in `[1000, current year]` are accepted.
//! - **Achievement**: specific templates ("Invented the telephone", "Former
//!   President"), then the short description, then a generic role phrase, then
//!   the literal `"Notable historical figure"`.
//! - **Field**: first keyword bucket that matches, in a fixed order.
//!
//! Extraction never fails. Missing facts resolve to documented sentinels.
//!
//! # Example Usage
//!
//! ```
//! use vitae_extractor::PatternExtractor;
//! use vitae_domain::ArticleCandidate;
//! use vitae_domain::traits::FactExtractor;
//!
//! # fn main() -> Result<(), vitae_extractor::ExtractorError> {
//! let extractor = PatternExtractor::default_config()?;
//! let candidate = ArticleCandidate::new("Isaac Newton", "14627")
//!     .with_extract("Isaac Newton (1643–1727) was an English mathematician and physicist.")
//!     .with_description("English physicist and mathematician (1643–1727)");
//!
//! let facts = extractor.extract(&candidate);
//! assert_eq!(facts.birth_year.to_string(), "1643");
//! assert_eq!(facts.field.as_str(), "Science & Research");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod object;
mod rules;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::{AchievementSource, ExtractionTrace, PatternExtractor};
pub use rules::{FieldBucket, PatternRule, PatternRuleSet};
