//! Core fact extraction

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::object::noun_phrase;
use crate::rules::PatternRuleSet;
use chrono::{Datelike, Local};
use tracing::debug;
use vitae_domain::text::{char_len, truncate_at_word_boundary, truncate_with_ellipsis};
use vitae_domain::traits::FactExtractor;
use vitae_domain::{ArticleCandidate, BirthYear, Field, PersonFacts, DEFAULT_ACHIEVEMENT};

/// Where the achievement phrase came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AchievementSource {
    /// A specific template rule fired
    Template(String),

    /// Short description used verbatim
    Description,

    /// Long description cut at a word boundary
    TruncatedDescription,

    /// A generic role phrase rule fired
    Role(String),

    /// Nothing matched
    Default,
}

impl std::fmt::Display for AchievementSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AchievementSource::Template(rule) => write!(f, "template '{}'", rule),
            AchievementSource::Description => f.write_str("description"),
            AchievementSource::TruncatedDescription => f.write_str("truncated description"),
            AchievementSource::Role(rule) => write!(f, "role phrase '{}'", rule),
            AchievementSource::Default => f.write_str("default"),
        }
    }
}

/// Extracted facts plus the rules that produced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionTrace {
    /// The extracted facts
    pub facts: PersonFacts,

    /// Birth-year rule that matched, if any
    pub birth_year_rule: Option<String>,

    /// Achievement provenance
    pub achievement_source: AchievementSource,

    /// Field keyword that matched, if any
    pub field_keyword: Option<String>,
}

/// Pattern-table fact extractor
pub struct PatternExtractor {
    rules: PatternRuleSet,
    config: ExtractorConfig,
    current_year: Option<i32>,
}

impl PatternExtractor {
    /// Create an extractor from compiled rules and a configuration
    pub fn new(rules: PatternRuleSet, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            rules,
            config,
            current_year: None,
        })
    }

    /// Create an extractor with the built-in tables and default limits
    pub fn default_config() -> Result<Self, ExtractorError> {
        Self::new(PatternRuleSet::standard()?, ExtractorConfig::default())
    }

    /// Pin the upper bound for birth years instead of reading the clock
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    fn current_year(&self) -> i32 {
        self.current_year.unwrap_or_else(|| Local::now().year())
    }

    /// Extract all facts and report which rules produced them
    pub fn trace(&self, candidate: &ArticleCandidate) -> ExtractionTrace {
        let (birth_year, birth_year_rule) = self.birth_year(&candidate.extract);
        let (achievement, achievement_source) = self.achievement(candidate);
        let (field, field_keyword) = self.field(candidate);

        debug!(
            "Extracted facts for '{}': year={} ({:?}), achievement={:?}, field={}",
            candidate.title, birth_year, birth_year_rule, achievement_source, field
        );

        ExtractionTrace {
            facts: PersonFacts {
                birth_year,
                achievement,
                field,
            },
            birth_year_rule,
            achievement_source,
            field_keyword,
        }
    }

    /// First capture, across rules in order, that is a valid year
    pub fn birth_year(&self, text: &str) -> (BirthYear, Option<String>) {
        let max = self.current_year();
        for rule in &self.rules.birth_year {
            for raw in rule.captures(text) {
                let year = BirthYear::parse_in_range(raw, self.config.min_birth_year, max);
                if year.is_known() {
                    return (year, Some(rule.name.clone()));
                }
                debug!("Rule '{}' captured out-of-range year '{}'", rule.name, raw);
            }
        }
        (BirthYear::Unknown, None)
    }

    /// Achievement priority chain: templates, description, role phrase, default
    pub fn achievement(&self, candidate: &ArticleCandidate) -> (String, AchievementSource) {
        let extract = candidate.extract.as_str();

        for rule in &self.rules.achievement {
            if let Some(text) = rule.apply_map(extract, noun_phrase) {
                let text = self.fit_achievement(&text);
                return (text, AchievementSource::Template(rule.name.clone()));
            }
        }

        let description = candidate.description.trim();
        if !description.is_empty() {
            if char_len(description) <= self.config.max_achievement_chars {
                return (description.to_string(), AchievementSource::Description);
            }
            return (
                truncate_at_word_boundary(description, self.config.achievement_cut),
                AchievementSource::TruncatedDescription,
            );
        }

        for rule in &self.rules.role {
            let Some(role) = rule.first_capture(extract) else {
                continue;
            };
            let role = role.trim_end_matches([',', ' ']);
            if role.is_empty() {
                continue;
            }
            let role = capitalize_first(role);
            let role = if char_len(&role) > self.config.role_max_chars {
                truncate_with_ellipsis(&role, self.config.role_cut)
            } else {
                role
            };
            return (role, AchievementSource::Role(rule.name.clone()));
        }

        (DEFAULT_ACHIEVEMENT.to_string(), AchievementSource::Default)
    }

    /// First bucket whose keyword appears in the description or extract
    pub fn field(&self, candidate: &ArticleCandidate) -> (Field, Option<String>) {
        let haystack = format!("{} {}", candidate.description, candidate.extract).to_lowercase();
        self.rules
            .fields
            .iter()
            .find_map(|bucket| {
                bucket
                    .find_keyword(&haystack)
                    .map(|k| (bucket.field, Some(k.to_string())))
            })
            .unwrap_or((Field::NotableFigure, None))
    }

    fn fit_achievement(&self, text: &str) -> String {
        if char_len(text) <= self.config.max_achievement_chars {
            text.to_string()
        } else {
            truncate_at_word_boundary(text, self.config.achievement_cut)
        }
    }
}

impl FactExtractor for PatternExtractor {
    fn extract(&self, candidate: &ArticleCandidate) -> PersonFacts {
        self.trace(candidate).facts
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
