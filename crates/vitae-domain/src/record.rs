//! Record module - the public Person-of-the-Day result

use crate::facts::{BirthYear, Field, PersonFacts};

/// Fully populated person record handed to presentation code
///
/// Every field is always set. Values that cannot be determined use the
/// documented sentinels rather than empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    /// Record identifier (source page id, or `placeholder_<date>`)
    pub id: String,

    /// Person's name (the candidate title)
    pub name: String,

    /// Short descriptor or fallback
    pub title: String,

    /// Truncated lead prose
    pub description: String,

    /// Birth year or `Unknown`
    pub birth_year: BirthYear,

    /// Short achievement phrase
    pub achievement: String,

    /// Topical bucket
    pub field: Field,

    /// Thumbnail or generated avatar
    pub image_url: String,

    /// Canonical encyclopedia page
    pub wiki_url: String,

    /// Whether this is the fetch-failure placeholder
    pub is_placeholder: bool,
}

impl PersonRecord {
    /// Copy the embedded facts back out
    pub fn facts(&self) -> PersonFacts {
        PersonFacts {
            birth_year: self.birth_year,
            achievement: self.achievement.clone(),
            field: self.field,
        }
    }

    /// Check the always-populated invariant
    pub fn is_fully_populated(&self) -> bool {
        [
            &self.id,
            &self.name,
            &self.title,
            &self.description,
            &self.achievement,
            &self.image_url,
            &self.wiki_url,
        ]
        .iter()
        .all(|s| !s.trim().is_empty())
    }
}
