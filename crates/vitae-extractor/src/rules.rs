//! Static, ordered pattern tables for fact extraction
//!
//! Order inside each table is precedence: the first rule that yields a usable
//! value wins. Reordering changes output for ambiguous text.

use crate::ExtractorError;
use regex::{Captures, Regex};
use vitae_domain::Field;

/// Raw word run after an achievement verb, up to the first punctuation.
/// [`crate::object::noun_phrase`] trims it to the object.
const OBJECT: &str = r"([\w'-]+(?: [\w'-]+){0,11})";

const BIRTH_YEAR_RULES: &[(&str, &str)] = &[
    ("life-span", r"\(([0-9]{4})\s*[–—-]\s*[0-9]{4}\)"),
    ("dated-life-span", r"\([^()]*?\b([0-9]{4})\b[^()]*?[–—-]"),
    ("born-date", r"(?i)\bborn\b[^.;()]{0,30}?\b([0-9]{4})\b"),
    ("bare-span-start", r"\b([0-9]{4})\s*[–—-]"),
];

const FIXED_ACHIEVEMENT_RULES: &[(&str, &str, &str)] = &[
    (
        "nobel-category",
        r"\bNobel Prize in ([A-Z][a-z]+(?: or [A-Z][a-z]+)?)",
        "Nobel Prize in $1",
    ),
    ("nobel-peace", r"\bNobel Peace Prize\b", "Nobel Peace Prize laureate"),
    ("nobel-any", r"(?i)\bnobel (?:prize|laureate)\b", "Nobel Prize winner"),
    (
        "head-of-state",
        r"(?i)\bpresident of the united states\b|\b(?:served as|elected|became)(?: the)? president\b|\bthe [0-9]+(?:st|nd|rd|th) president\b",
        "Former President",
    ),
    (
        "head-of-government",
        r"(?i)\bprime minister of\b|\b(?:served as|became)(?: the)? prime minister\b",
        "Former Prime Minister",
    ),
    (
        "monarch",
        r"\b(?i:reigned (?:as|over|from)|ascended the throne)\b|\b(?i:king|queen|emperor|empress) of (?:the )?[A-Z][\w'-]*(?: [A-Z][\w'-]*)* from [0-9]{3,4}\b",
        "Monarch",
    ),
];

const VERB_ACHIEVEMENT_RULES: &[(&str, &str, &str)] = &[
    ("founded", "founded", "Founded $1"),
    ("invented", "invented", "Invented $1"),
    ("discovered", "discovered", "Discovered $1"),
    ("wrote", "wrote", "Wrote $1"),
    ("painted", "painted", "Painted $1"),
    ("composed", "composed", "Composed $1"),
];

const ROLE_RULES: &[(&str, &str)] = &[
    ("was-role", r"\bwas (?:an|a|the) ([^.;(]+)"),
    ("is-role", r"\bis (?:an|a|the) ([^.;(]+)"),
];

const FIELD_KEYWORDS: &[(Field, &[&str])] = &[
    (
        Field::Politics,
        &[
            "president", "prime minister", "politician", "senator", "governor",
            "congressman", "parliament", "statesman", "diplomat", "monarch",
            "emperor", "empress", "chancellor", "minister",
        ],
    ),
    (
        Field::Science,
        &[
            "scientist", "physicist", "chemist", "biologist", "mathematician",
            "astronomer", "researcher", "physician", "naturalist", "geologist",
        ],
    ),
    (
        Field::Literature,
        &["writer", "author", "poet", "novelist", "playwright", "journalist", "essayist"],
    ),
    (
        Field::Arts,
        &["painter", "artist", "sculptor", "architect", "photographer", "painting"],
    ),
    (
        Field::Entertainment,
        &["actor", "actress", "film", "comedian", "television", "filmmaker"],
    ),
    (
        Field::Music,
        &[
            "musician", "composer", "singer", "songwriter", "pianist", "conductor",
            "rapper", "violinist", "opera",
        ],
    ),
    (
        Field::Technology,
        &["inventor", "engineer", "entrepreneur", "businessman", "computer", "technology"],
    ),
    (
        Field::Activism,
        &[
            "activist", "civil rights", "reformer", "humanitarian", "abolitionist",
            "suffragist", "suffragette",
        ],
    ),
];

/// A compiled pattern with an output template
///
/// Templates may reference capture groups (`$1`). A template with no
/// reference is emitted literally.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Name of the rule (for diagnostics)
    pub name: String,

    /// Compiled pattern
    pub pattern: Regex,

    /// Output template
    pub template: String,
}

impl PatternRule {
    /// Compile a rule
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        template: impl Into<String>,
    ) -> Result<Self, ExtractorError> {
        let name = name.into();
        let pattern = Regex::new(pattern).map_err(|source| ExtractorError::InvalidPattern {
            rule: name.clone(),
            source,
        })?;
        Ok(Self {
            name,
            pattern,
            template: template.into(),
        })
    }

    /// Expand the template for the first match in `text`
    pub fn apply(&self, text: &str) -> Option<String> {
        self.pattern.captures(text).map(|caps| self.expand(&caps))
    }

    /// Expand the template for the first match whose first group `map` accepts
    ///
    /// `map` rewrites the capture before it is interpolated; `None` skips the
    /// match. Matches without a first group are always accepted as-is.
    pub fn apply_map<F>(&self, text: &str, map: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.pattern.captures_iter(text).find_map(|caps| match caps.get(1) {
            None => Some(self.expand(&caps)),
            Some(m) => map(m.as_str()).map(|object| self.expand_with(&object)),
        })
    }

    /// Every first-group capture in `text`, in order
    pub fn captures<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> + use<'_, 't> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
    }

    /// The first group of the first match, trimmed
    pub fn first_capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.captures(text).next().map(str::trim)
    }

    fn expand(&self, caps: &Captures<'_>) -> String {
        if !self.template.contains('$') {
            return self.template.clone();
        }
        let mut out = String::new();
        caps.expand(&self.template, &mut out);
        out.trim().to_string()
    }

    fn expand_with(&self, object: &str) -> String {
        self.template.replace("$1", object).trim().to_string()
    }

    /// Whether the template interpolates a capture
    pub fn has_capture(&self) -> bool {
        self.template.contains('$')
    }
}

/// A topical bucket and its keywords
#[derive(Debug, Clone)]
pub struct FieldBucket {
    /// Field assigned on match
    pub field: Field,

    /// Lower-case keywords, matched as whole words
    pub keywords: Vec<String>,
}

impl FieldBucket {
    /// The first keyword present in `haystack` (already lower-cased)
    pub fn find_keyword(&self, haystack: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| contains_word(haystack, k))
            .map(String::as_str)
    }
}

/// Whether `word` occurs in `haystack` on word boundaries
///
/// A plural "s"/"es" suffix still counts ("composers"); a longer word that
/// merely contains `word` does not ("semiconductor", "factory").
pub(crate) fn contains_word(haystack: &str, word: &str) -> bool {
    let is_word_char = |c: char| c.is_alphanumeric();
    haystack.match_indices(word).any(|(start, _)| {
        let left_ok = !haystack[..start].chars().next_back().is_some_and(is_word_char);
        let rest = &haystack[start + word.len()..];
        let right_ok = [Some(rest), rest.strip_prefix('s'), rest.strip_prefix("es")]
            .into_iter()
            .flatten()
            .any(|tail| !tail.chars().next().is_some_and(is_word_char));
        left_ok && right_ok
    })
}

/// All extraction tables, compiled once
#[derive(Debug, Clone)]
pub struct PatternRuleSet {
    /// Birth-year patterns, most specific first
    pub birth_year: Vec<PatternRule>,

    /// Specific achievement templates, highest priority first
    pub achievement: Vec<PatternRule>,

    /// Generic role phrases, tried after the description fallback
    pub role: Vec<PatternRule>,

    /// Field buckets in precedence order
    pub fields: Vec<FieldBucket>,
}

impl PatternRuleSet {
    /// Compile the built-in tables
    pub fn standard() -> Result<Self, ExtractorError> {
        let birth_year = BIRTH_YEAR_RULES
            .iter()
            .map(|(name, pattern)| PatternRule::new(*name, pattern, "$1"))
            .collect::<Result<Vec<_>, _>>()?;

        let fixed = FIXED_ACHIEVEMENT_RULES
            .iter()
            .map(|(name, pattern, template)| PatternRule::new(*name, pattern, *template));
        let verbs = VERB_ACHIEVEMENT_RULES.iter().map(|(name, verb, template)| {
            PatternRule::new(*name, &format!(r"\b(?i:{}) {}", verb, OBJECT), *template)
        });
        let achievement = fixed.chain(verbs).collect::<Result<Vec<_>, _>>()?;

        let role = ROLE_RULES
            .iter()
            .map(|(name, pattern)| PatternRule::new(*name, pattern, "$1"))
            .collect::<Result<Vec<_>, _>>()?;

        let fields = FIELD_KEYWORDS
            .iter()
            .map(|(field, keywords)| FieldBucket {
                field: *field,
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            })
            .collect();

        Ok(Self {
            birth_year,
            achievement,
            role,
            fields,
        })
    }
}
