//! Classifier configuration

use serde::{Deserialize, Serialize};

/// Extra vocabulary layered on top of the built-in rule table
///
/// The built-in terms are always present. These lists only add to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Additional general-concept title terms
    #[serde(default)]
    pub extra_excluded_titles: Vec<String>,

    /// Additional life-event terms
    #[serde(default)]
    pub extra_biographical_terms: Vec<String>,

    /// Additional role terms
    #[serde(default)]
    pub extra_role_terms: Vec<String>,
}

impl ClassifierConfig {
    /// Whether any extra vocabulary is configured
    pub fn is_empty(&self) -> bool {
        self.extra_excluded_titles.is_empty()
            && self.extra_biographical_terms.is_empty()
            && self.extra_role_terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(ClassifierConfig::default().is_empty());
    }

    #[test]
    fn test_partial_toml() {
        let config: ClassifierConfig = toml::from_str(r#"extra_role_terms = ["cartographer"]"#).unwrap();
        assert_eq!(config.extra_role_terms, vec!["cartographer".to_string()]);
        assert!(config.extra_excluded_titles.is_empty());
    }
}
