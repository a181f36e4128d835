//! Configuration for the tier cascade

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

/// Built-in tier kinds, named as they appear in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierKind {
    /// Featured article for the date
    Featured,
    /// Random member of the day's biographical category
    Category,
    /// Random hit of a full-text biography search
    Search,
    /// Day-indexed entry of the curated name list (trusted)
    Catalog,
    /// Random article from the whole encyclopedia
    Random,
}

impl TierKind {
    /// Configuration name of the tier
    pub fn as_str(&self) -> &'static str {
        match self {
            TierKind::Featured => "featured",
            TierKind::Category => "category",
            TierKind::Search => "search",
            TierKind::Catalog => "catalog",
            TierKind::Random => "random",
        }
    }
}

impl fmt::Display for TierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Biographical categories sampled by the category tier
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Nobel laureates in Physics",
    "Nobel laureates in Chemistry",
    "Nobel laureates in Literature",
    "American inventors",
    "English mathematicians",
    "Italian Renaissance painters",
    "Classical-period composers",
    "American civil rights activists",
    "Presidents of the United States",
    "19th-century British novelists",
];

/// Curated, well-known historical figures used as the last resort
pub const DEFAULT_CATALOG: &[&str] = &[
    "Albert Einstein",
    "Marie Curie",
    "Isaac Newton",
    "Leonardo da Vinci",
    "William Shakespeare",
    "Wolfgang Amadeus Mozart",
    "Ludwig van Beethoven",
    "Charles Darwin",
    "Ada Lovelace",
    "Nikola Tesla",
    "Galileo Galilei",
    "Abraham Lincoln",
    "Mahatma Gandhi",
    "Nelson Mandela",
    "Martin Luther King Jr.",
    "Rosa Parks",
    "Frida Kahlo",
    "Vincent van Gogh",
    "Pablo Picasso",
    "Michelangelo",
    "Johann Sebastian Bach",
    "Jane Austen",
    "Charles Dickens",
    "Leo Tolstoy",
    "Maya Angelou",
    "Virginia Woolf",
    "Thomas Edison",
    "Alexander Graham Bell",
    "Louis Pasteur",
    "Florence Nightingale",
    "Harriet Tubman",
    "Frederick Douglass",
    "Winston Churchill",
    "Queen Victoria",
    "Cleopatra",
    "Julius Caesar",
    "Confucius",
    "Aristotle",
    "Plato",
    "Socrates",
    "Rosalind Franklin",
    "Alan Turing",
    "Grace Hopper",
    "Katherine Johnson",
    "Amelia Earhart",
    "Neil Armstrong",
    "Yuri Gagarin",
    "Stephen Hawking",
    "Richard Feynman",
    "Niels Bohr",
    "Dmitri Mendeleev",
    "Gregor Mendel",
    "Sigmund Freud",
    "Simone de Beauvoir",
    "Susan B. Anthony",
    "Eleanor Roosevelt",
    "Charlie Chaplin",
    "Louis Armstrong",
    "Ella Fitzgerald",
    "Frédéric Chopin",
];

/// Configuration for [`crate::SourceResolver`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Tier cascade in evaluation order
    pub tiers: Vec<TierKind>,

    /// Categories for the category tier, indexed by day of month
    pub categories: Vec<String>,

    /// Curated names for the catalog tier, indexed by day of month
    pub catalog: Vec<String>,

    /// Seed query for the search tier
    pub search_query: String,

    /// Maximum category members fetched
    pub category_limit: usize,

    /// Maximum search hits fetched
    pub search_limit: usize,

    /// Time budget per tier in seconds
    pub tier_timeout_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            tiers: vec![
                TierKind::Featured,
                TierKind::Category,
                TierKind::Search,
                TierKind::Catalog,
            ],
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            catalog: DEFAULT_CATALOG.iter().map(|s| s.to_string()).collect(),
            search_query: "biography born died".to_string(),
            category_limit: 50,
            search_limit: 20,
            tier_timeout_secs: 20,
        }
    }
}

impl ResolverConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.tiers.is_empty() {
            return Err("tiers must list at least one tier".to_string());
        }

        let mut seen = HashSet::new();
        for tier in &self.tiers {
            if !seen.insert(tier) {
                return Err(format!("tier '{}' listed more than once", tier));
            }
        }

        if self.tiers.contains(&TierKind::Category) {
            if self.categories.is_empty() {
                return Err("category tier enabled but categories is empty".to_string());
            }
            if self.category_limit == 0 {
                return Err("category_limit must be > 0".to_string());
            }
        }

        if self.tiers.contains(&TierKind::Search) {
            if self.search_query.trim().is_empty() {
                return Err("search tier enabled but search_query is empty".to_string());
            }
            if self.search_limit == 0 {
                return Err("search_limit must be > 0".to_string());
            }
        }

        if self.tiers.contains(&TierKind::Catalog) && self.catalog.is_empty() {
            return Err("catalog tier enabled but catalog is empty".to_string());
        }

        if self.tier_timeout_secs == 0 {
            return Err("tier_timeout_secs must be > 0".to_string());
        }

        Ok(())
    }

    /// Per-tier time budget
    pub fn tier_timeout(&self) -> Duration {
        Duration::from_secs(self.tier_timeout_secs)
    }

    /// Load from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Convert to TOML string
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.categories.len(), 10);
        assert_eq!(config.catalog.len(), 60);
        assert_eq!(config.tiers.last(), Some(&TierKind::Catalog));
        assert!(!config.tiers.contains(&TierKind::Random));
    }

    #[test]
    fn test_duplicate_tier_rejected() {
        let config = ResolverConfig {
            tiers: vec![TierKind::Featured, TierKind::Featured],
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("more than once"));
    }

    #[test]
    fn test_empty_catalog_rejected_only_when_used() {
        let mut config = ResolverConfig {
            catalog: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.tiers = vec![TierKind::Featured, TierKind::Search];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tiers_from_toml() {
        let config = ResolverConfig::from_toml(
            r#"
            tiers = ["featured", "random", "catalog"]
            tier_timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(
            config.tiers,
            vec![TierKind::Featured, TierKind::Random, TierKind::Catalog]
        );
        assert_eq!(config.tier_timeout(), Duration::from_secs(5));
        assert_eq!(config.search_limit, 20);
    }

    #[test]
    fn test_unknown_tier_fails_to_parse() {
        assert!(ResolverConfig::from_toml(r#"tiers = ["oracle"]"#).is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ResolverConfig::default();
        let parsed = ResolverConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
