//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Length limits and bounds used during extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Longest description used verbatim as the achievement (characters)
    pub max_achievement_chars: usize,

    /// Cut point for over-long descriptions (characters, before the ellipsis)
    pub achievement_cut: usize,

    /// Longest role phrase kept without truncation (characters)
    pub role_max_chars: usize,

    /// Cut point for over-long role phrases (characters, before the ellipsis)
    pub role_cut: usize,

    /// Earliest birth year accepted
    pub min_birth_year: i32,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_achievement_chars == 0 {
            return Err("max_achievement_chars must be greater than 0".to_string());
        }
        if self.achievement_cut == 0 || self.achievement_cut > self.max_achievement_chars {
            return Err("achievement_cut must be in 1..=max_achievement_chars".to_string());
        }
        if self.role_cut == 0 || self.role_cut > self.role_max_chars {
            return Err("role_cut must be in 1..=role_max_chars".to_string());
        }
        if self.min_birth_year < 0 {
            return Err("min_birth_year cannot be negative".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_achievement_chars: 60,
            achievement_cut: 50,
            role_max_chars: 50,
            role_cut: 47,
            min_birth_year: 1000,
        }
    }
}
