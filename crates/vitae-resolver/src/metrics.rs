//! Metrics collection for resolutions

use std::collections::BTreeMap;

/// Per-tier outcome counters across resolutions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverMetrics {
    /// Accepted candidates per tier
    pub wins: BTreeMap<String, usize>,

    /// Failed attempts per tier
    pub failures: BTreeMap<String, usize>,

    /// Candidates rejected by the classifier, per tier
    pub rejections: BTreeMap<String, usize>,

    /// Resolutions started
    pub resolutions: usize,

    /// Resolutions that exhausted every tier
    pub exhausted: usize,
}

impl ResolverMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a resolution
    pub fn record_resolution(&mut self) {
        self.resolutions += 1;
    }

    /// Record an accepted candidate
    pub fn record_win(&mut self, tier: &str) {
        *self.wins.entry(tier.to_string()).or_insert(0) += 1;
    }

    /// Record a failed attempt
    pub fn record_failure(&mut self, tier: &str, rejected: bool) {
        *self.failures.entry(tier.to_string()).or_insert(0) += 1;
        if rejected {
            *self.rejections.entry(tier.to_string()).or_insert(0) += 1;
        }
    }

    /// Record a resolution with no accepted candidate
    pub fn record_exhausted(&mut self) {
        self.exhausted += 1;
    }

    /// Total accepted candidates
    pub fn total_wins(&self) -> usize {
        self.wins.values().sum()
    }

    /// Total failed attempts
    pub fn total_failures(&self) -> usize {
        self.failures.values().sum()
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Resolver Metrics Summary".to_string(),
            "========================".to_string(),
            format!("Resolutions: {}", self.resolutions),
            format!("Exhausted: {}", self.exhausted),
            String::new(),
        ];

        if !self.wins.is_empty() {
            lines.push("Wins by tier:".to_string());
            for (tier, count) in &self.wins {
                lines.push(format!("  {}: {}", tier, count));
            }
            lines.push(format!("  Total: {}", self.total_wins()));
            lines.push(String::new());
        }

        if !self.failures.is_empty() {
            lines.push("Failures by tier:".to_string());
            for (tier, count) in &self.failures {
                let rejected = self.rejections.get(tier).copied().unwrap_or(0);
                lines.push(format!("  {}: {} ({} not a person)", tier, count, rejected));
            }
            lines.push(format!("  Total: {}", self.total_failures()));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut metrics = ResolverMetrics::new();
        metrics.record_resolution();
        metrics.record_failure("featured", false);
        metrics.record_failure("category", true);
        metrics.record_win("search");

        assert_eq!(metrics.total_failures(), 2);
        assert_eq!(metrics.total_wins(), 1);
        assert_eq!(metrics.rejections.get("category"), Some(&1));
        assert!(metrics.rejections.get("featured").is_none());
    }

    #[test]
    fn test_summary() {
        let mut metrics = ResolverMetrics::new();
        metrics.record_resolution();
        metrics.record_failure("featured", false);
        metrics.record_win("catalog");

        let summary = metrics.summary();
        assert!(summary.contains("Resolutions: 1"));
        assert!(summary.contains("catalog: 1"));
        assert!(summary.contains("featured: 1 (0 not a person)"));
    }

    #[test]
    fn test_reset() {
        let mut metrics = ResolverMetrics::new();
        metrics.record_resolution();
        metrics.record_exhausted();
        metrics.reset();
        assert_eq!(metrics, ResolverMetrics::default());
    }
}
