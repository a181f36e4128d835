//! Trait definitions for the pure text components
//!
//! These traits define the seams between the resolution pipeline and its
//! heuristics. Implementations live in other crates.

use crate::{ArticleCandidate, PersonFacts};

/// Decides whether an article describes an individual person
///
/// Implemented by `vitae-classifier`. Must be pure and must never panic on
/// empty or malformed text.
pub trait Classifier {
    /// `true` only when the candidate is about one human being
    fn is_person(&self, candidate: &ArticleCandidate) -> bool;

    /// Human-readable reasons a candidate was rejected, empty when accepted
    fn rejection_reasons(&self, candidate: &ArticleCandidate) -> Vec<String> {
        if self.is_person(candidate) {
            Vec::new()
        } else {
            vec!["not classified as a person".to_string()]
        }
    }
}

/// Pulls structured facts out of a candidate's prose
///
/// Implemented by `vitae-extractor`. Always returns well-formed defaults.
pub trait FactExtractor {
    /// Extract birth year, achievement and field
    fn extract(&self, candidate: &ArticleCandidate) -> PersonFacts;
}
