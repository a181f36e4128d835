//! Configuration for the daily cache

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Longest accepted lifetime: one leap year
pub const MAX_TTL_HOURS: u64 = 24 * 366;

/// Configuration for [`crate::DailyCache`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Hours an entry stays fresh after being stored
    pub ttl_hours: u64,

    /// Prefix prepended to the ISO date to form a key
    pub key_prefix: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_hours: 24,
            key_prefix: "person_".to_string(),
        }
    }
}

impl CacheConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.ttl_hours == 0 {
            return Err("ttl_hours must be > 0".to_string());
        }
        if self.ttl_hours > MAX_TTL_HOURS {
            return Err(format!("ttl_hours must be <= {}", MAX_TTL_HOURS));
        }
        Ok(())
    }

    /// Entry lifetime, clamped to [`MAX_TTL_HOURS`]
    pub fn ttl(&self) -> Duration {
        Duration::hours(self.ttl_hours.min(MAX_TTL_HOURS) as i64)
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
