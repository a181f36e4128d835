//! Configuration for the encyclopedia client

use serde::{Deserialize, Serialize};

/// Upper bound on `max_retries`
pub const MAX_ATTEMPTS: u32 = 10;

/// Upper bound on `retry_base_delay_ms`
pub const MAX_RETRY_BASE_DELAY_MS: u64 = 60_000;

/// Connection settings for [`crate::WikipediaClient`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base of the REST API (`/feed/...`, `/page/...`)
    pub rest_base_url: String,

    /// Full URL of the action API endpoint (`api.php`)
    pub action_api_url: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Total attempts per request, 1 means no retry
    pub max_retries: u32,

    /// Delay before the first retry; doubles on each further retry
    pub retry_base_delay_ms: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            rest_base_url: "https://en.wikipedia.org/api/rest_v1".to_string(),
            action_api_url: "https://en.wikipedia.org/w/api.php".to_string(),
            request_timeout_secs: 10,
            max_retries: 1,
            retry_base_delay_ms: 250,
            user_agent: concat!("vitae/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl SourceConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, url) in [
            ("rest_base_url", &self.rest_base_url),
            ("action_api_url", &self.action_api_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!("{} must be an http(s) URL, got '{}'", name, url));
            }
        }

        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be > 0".to_string());
        }

        if self.max_retries == 0 {
            return Err("max_retries must be >= 1".to_string());
        }

        if self.max_retries > MAX_ATTEMPTS {
            return Err(format!("max_retries must be <= {}", MAX_ATTEMPTS));
        }

        if self.retry_base_delay_ms > MAX_RETRY_BASE_DELAY_MS {
            return Err(format!(
                "retry_base_delay_ms must be <= {}",
                MAX_RETRY_BASE_DELAY_MS
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }

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
