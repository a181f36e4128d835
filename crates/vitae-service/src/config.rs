//! Aggregated configuration for the whole pipeline

use serde::{Deserialize, Serialize};
use vitae_cache::CacheConfig;
use vitae_classifier::ClassifierConfig;
use vitae_extractor::ExtractorConfig;
use vitae_resolver::ResolverConfig;
use vitae_source::SourceConfig;

/// Configuration for [`crate::PersonResolutionService`]
///
/// Each component keeps its own section:
///
/// ```toml
/// description_max_chars = 300
/// single_flight = true
///
/// [source]
/// request_timeout_secs = 10
///
/// [resolver]
/// tiers = ["featured", "category", "search", "catalog"]
///
/// [cache]
/// ttl_hours = 24
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Longest record description before truncation (characters)
    pub description_max_chars: usize,

    /// Page URL prefix used when the source reports no canonical URL
    pub wiki_base_url: String,

    /// Avatar generator used when an article has no thumbnail
    pub placeholder_avatar_url: String,

    /// Coalesce concurrent resolutions of the same date
    pub single_flight: bool,

    /// Encyclopedia client settings
    pub source: SourceConfig,

    /// Tier cascade settings
    pub resolver: ResolverConfig,

    /// Extra classifier vocabulary
    pub classifier: ClassifierConfig,

    /// Extraction limits
    pub extractor: ExtractorConfig,

    /// Daily cache settings
    pub cache: CacheConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            description_max_chars: 300,
            wiki_base_url: "https://en.wikipedia.org/wiki/".to_string(),
            placeholder_avatar_url: "https://ui-avatars.com/api/".to_string(),
            single_flight: true,
            source: SourceConfig::default(),
            resolver: ResolverConfig::default(),
            classifier: ClassifierConfig::default(),
            extractor: ExtractorConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Validate this section and every component section
    pub fn validate(&self) -> Result<(), String> {
        if self.description_max_chars == 0 {
            return Err("description_max_chars must be > 0".to_string());
        }
        if self.wiki_base_url.trim().is_empty() {
            return Err("wiki_base_url must not be empty".to_string());
        }
        if self.placeholder_avatar_url.trim().is_empty() {
            return Err("placeholder_avatar_url must not be empty".to_string());
        }

        self.source.validate().map_err(|e| format!("source: {}", e))?;
        self.resolver.validate().map_err(|e| format!("resolver: {}", e))?;
        self.extractor.validate().map_err(|e| format!("extractor: {}", e))?;
        self.cache.validate().map_err(|e| format!("cache: {}", e))?;
        Ok(())
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
