//! Candidate module - raw article material pulled from the content source

/// A raw article fetched for one title
///
/// Candidates are created per network response and discarded after
/// classification and extraction. They are never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCandidate {
    /// Article title (non-empty)
    pub title: String,

    /// Free-form lead prose, may be empty
    pub extract: String,

    /// Short descriptor phrase, may be empty
    pub description: String,

    /// Thumbnail image URL, if the article has one
    pub thumbnail_url: Option<String>,

    /// Canonical desktop page URL, if reported
    pub canonical_url: Option<String>,

    /// Identifier of the page at the source (numeric ids are stringified)
    pub source_page_id: String,
}

impl ArticleCandidate {
    /// Create a candidate with only a title and page id set
    ///
    /// # Examples
    ///
    /// ```
    /// use vitae_domain::ArticleCandidate;
    ///
    /// let candidate = ArticleCandidate::new("Ada Lovelace", "1001")
    ///     .with_extract("Ada Lovelace was born in London.")
    ///     .with_description("English mathematician");
    /// assert!(candidate.is_well_formed());
    /// ```
    pub fn new(title: impl Into<String>, source_page_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            extract: String::new(),
            description: String::new(),
            thumbnail_url: None,
            canonical_url: None,
            source_page_id: source_page_id.into(),
        }
    }

    /// Set the extract text
    pub fn with_extract(mut self, extract: impl Into<String>) -> Self {
        self.extract = extract.into();
        self
    }

    /// Set the short description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the thumbnail URL
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// Set the canonical page URL
    pub fn with_canonical_url(mut self, url: impl Into<String>) -> Self {
        self.canonical_url = Some(url.into());
        self
    }

    /// A candidate is usable only when its title is non-blank
    pub fn is_well_formed(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let candidate = ArticleCandidate::new("Marie Curie", "20408")
            .with_extract("Marie Curie was born in Warsaw.")
            .with_description("Polish-French physicist")
            .with_thumbnail("https://img.example/curie.jpg")
            .with_canonical_url("https://en.wikipedia.org/wiki/Marie_Curie");

        assert_eq!(candidate.title, "Marie Curie");
        assert_eq!(candidate.source_page_id, "20408");
        assert_eq!(candidate.description, "Polish-French physicist");
        assert_eq!(candidate.thumbnail_url.as_deref(), Some("https://img.example/curie.jpg"));
        assert!(candidate.canonical_url.is_some());
    }

    #[test]
    fn test_blank_title_is_not_well_formed() {
        assert!(!ArticleCandidate::new("   ", "1").is_well_formed());
        assert!(ArticleCandidate::new("X", "1").is_well_formed());
    }
}
