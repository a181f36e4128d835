//! Turning an accepted candidate into a [`PersonRecord`]

use crate::ServiceConfig;
use chrono::NaiveDate;
use vitae_domain::text::truncate_with_ellipsis;
use vitae_domain::{ArticleCandidate, BirthYear, Field, PersonFacts, PersonRecord, DEFAULT_ACHIEVEMENT};

/// Title used when a candidate has no description
pub const FALLBACK_TITLE: &str = "Historical Figure";

/// Description used when a candidate has no extract
pub const FALLBACK_DESCRIPTION: &str = "No description available.";

/// Name shown when nothing could be resolved
pub const PLACEHOLDER_NAME: &str = "Person of the Day Unavailable";

/// Builds records with every field populated
#[derive(Debug, Clone)]
pub struct RecordAssembler {
    description_max_chars: usize,
    wiki_base_url: String,
    avatar_url: String,
}

impl RecordAssembler {
    /// Assembler using the record settings of `config`
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            description_max_chars: config.description_max_chars,
            wiki_base_url: config.wiki_base_url.clone(),
            avatar_url: config.placeholder_avatar_url.clone(),
        }
    }

    /// Merge a candidate with its extracted facts
    ///
    /// # Examples
    ///
    /// ```
    /// use vitae_domain::{ArticleCandidate, PersonFacts};
    /// use vitae_service::{RecordAssembler, ServiceConfig};
    ///
    /// let assembler = RecordAssembler::from_config(&ServiceConfig::default());
    /// let record = assembler.assemble(&ArticleCandidate::new("Rosa Parks", "7"), PersonFacts::default());
    ///
    /// assert_eq!(record.title, "Historical Figure");
    /// assert_eq!(record.wiki_url, "https://en.wikipedia.org/wiki/Rosa_Parks");
    /// assert!(record.image_url.contains("name=Rosa+Parks"));
    /// ```
    pub fn assemble(&self, candidate: &ArticleCandidate, facts: PersonFacts) -> PersonRecord {
        let name = candidate.title.trim().to_string();

        let title = non_blank(&candidate.description)
            .unwrap_or(FALLBACK_TITLE)
            .to_string();

        let description = match non_blank(&candidate.extract) {
            Some(extract) => truncate_with_ellipsis(extract, self.description_max_chars),
            None => FALLBACK_DESCRIPTION.to_string(),
        };

        let image_url = candidate
            .thumbnail_url
            .as_deref()
            .and_then(non_blank)
            .map(str::to_string)
            .unwrap_or_else(|| self.avatar_for(&name));

        let wiki_url = candidate
            .canonical_url
            .as_deref()
            .and_then(non_blank)
            .map(str::to_string)
            .unwrap_or_else(|| self.wiki_url_for(&name));

        let id = non_blank(&candidate.source_page_id)
            .map(str::to_string)
            .unwrap_or_else(|| name.replace(' ', "_"));

        PersonRecord {
            id,
            name,
            title,
            description,
            birth_year: facts.birth_year,
            achievement: facts.achievement,
            field: facts.field,
            image_url,
            wiki_url,
            is_placeholder: false,
        }
    }

    /// Clearly-marked record used when resolution fails for `date`
    pub fn placeholder(&self, date: NaiveDate) -> PersonRecord {
        PersonRecord {
            id: format!("placeholder_{}", date.format("%Y-%m-%d")),
            name: PLACEHOLDER_NAME.to_string(),
            title: "Could not fetch today's person".to_string(),
            description: "No biography could be retrieved right now. Please try again later."
                .to_string(),
            birth_year: BirthYear::Unknown,
            achievement: DEFAULT_ACHIEVEMENT.to_string(),
            field: Field::NotableFigure,
            image_url: self.avatar_for(PLACEHOLDER_NAME),
            wiki_url: self.wiki_base_url.clone(),
            is_placeholder: true,
        }
    }

    /// Generated avatar URL for `name`
    pub fn avatar_for(&self, name: &str) -> String {
        let words: Vec<&str> = name.split_whitespace().collect();
        format!(
            "{}?name={}&size=400&background=random",
            self.avatar_url,
            words.join("+")
        )
    }

    /// Encyclopedia page URL for `name`
    pub fn wiki_url_for(&self, name: &str) -> String {
        format!("{}{}", self.wiki_base_url, name.replace(' ', "_"))
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
