//! The tier cascade runner

use crate::tiers::{CategorySample, FeaturedArticle, KeywordSearch, RandomArticle, StaticCatalog};
use crate::{
    FailedAttempt, ResolveContext, ResolverConfig, ResolverError, ResolverMetrics, SourceStrategy,
    TierFailure, TierKind,
};
use chrono::NaiveDate;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, info, warn};
use vitae_domain::traits::Classifier;
use vitae_domain::ArticleCandidate;
use vitae_source::EncyclopediaClient;

/// How a resolution went, tier by tier
#[derive(Debug)]
pub struct ResolutionReport {
    /// Date resolved
    pub date: NaiveDate,
    /// Tier that produced the accepted candidate
    pub tier: String,
    /// Whether that tier skipped classification
    pub trusted: bool,
    /// Earlier tiers that failed, in cascade order
    pub failures: Vec<FailedAttempt>,
}

impl fmt::Display for ResolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: accepted from '{}'", self.date, self.tier)?;
        if self.trusted {
            f.write_str(" (trusted)")?;
        }
        for attempt in &self.failures {
            write!(f, "\n  - {}", attempt)?;
        }
        Ok(())
    }
}

/// Accepted candidate plus the report that led to it
#[derive(Debug)]
pub struct Resolution {
    /// Candidate accepted as a person
    pub candidate: ArticleCandidate,
    /// Cascade report
    pub report: ResolutionReport,
}

/// Runs an ordered list of [`SourceStrategy`] tiers until one yields a person
///
/// Tiers run strictly one after another. Every failure is caught, logged and
/// recorded; only exhausting the whole list is an error.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use chrono::NaiveDate;
/// use vitae_domain::traits::Classifier;
/// use vitae_domain::ArticleCandidate;
/// use vitae_resolver::{ResolverConfig, SourceResolver};
/// use vitae_source::MockClient;
///
/// struct AcceptAll;
/// impl Classifier for AcceptAll {
///     fn is_person(&self, _: &ArticleCandidate) -> bool { true }
/// }
///
/// let client = MockClient::new()
///     .with_summary(ArticleCandidate::new("Isaac Newton", "1"));
/// let config = ResolverConfig {
///     catalog: vec!["Isaac Newton".to_string()],
///     ..Default::default()
/// };
/// let resolver = SourceResolver::from_config(&config, Arc::new(client), Arc::new(AcceptAll)).unwrap();
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let resolution = rt.block_on(resolver.resolve(date)).unwrap();
/// assert_eq!(resolution.candidate.title, "Isaac Newton");
/// assert_eq!(resolution.report.tier, "catalog");
/// ```
pub struct SourceResolver {
    strategies: Vec<Box<dyn SourceStrategy>>,
    classifier: Arc<dyn Classifier + Send + Sync>,
    tier_timeout: Duration,
    metrics: Mutex<ResolverMetrics>,
}

impl SourceResolver {
    /// Create a runner with no tiers
    pub fn new(classifier: Arc<dyn Classifier + Send + Sync>, tier_timeout: Duration) -> Self {
        Self {
            strategies: Vec::new(),
            classifier,
            tier_timeout,
            metrics: Mutex::new(ResolverMetrics::new()),
        }
    }

    /// Append a tier to the end of the cascade
    pub fn with_strategy(mut self, strategy: impl SourceStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Build the cascade described by `config`
    pub fn from_config(
        config: &ResolverConfig,
        client: Arc<dyn EncyclopediaClient>,
        classifier: Arc<dyn Classifier + Send + Sync>,
    ) -> Result<Self, ResolverError> {
        config.validate().map_err(ResolverError::Config)?;

        let mut resolver = Self::new(classifier, config.tier_timeout());
        for kind in &config.tiers {
            let client = Arc::clone(&client);
            let strategy: Box<dyn SourceStrategy> = match kind {
                TierKind::Featured => Box::new(FeaturedArticle::new(client)),
                TierKind::Category => Box::new(CategorySample::new(
                    client,
                    config.categories.clone(),
                    config.category_limit,
                )),
                TierKind::Search => Box::new(KeywordSearch::new(
                    client,
                    config.search_query.clone(),
                    config.search_limit,
                )),
                TierKind::Catalog => Box::new(StaticCatalog::new(client, config.catalog.clone())),
                TierKind::Random => Box::new(RandomArticle::new(client)),
            };
            resolver.strategies.push(strategy);
        }
        Ok(resolver)
    }

    /// Tier names in cascade order
    pub fn tier_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Snapshot of the accumulated metrics
    pub fn metrics(&self) -> ResolverMetrics {
        self.lock_metrics().clone()
    }

    /// Reset metrics counters
    pub fn reset_metrics(&self) {
        self.lock_metrics().reset();
    }

    fn lock_metrics(&self) -> std::sync::MutexGuard<'_, ResolverMetrics> {
        self.metrics.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Find a person article for `date`
    ///
    /// # Errors
    ///
    /// [`ResolverError::ResolutionFailed`] when no tier produced an accepted
    /// candidate. It carries every tier's failure.
    pub async fn resolve(&self, date: NaiveDate) -> Result<Resolution, ResolverError> {
        let ctx = ResolveContext::new(date);
        let mut failures = Vec::new();
        self.lock_metrics().record_resolution();

        for strategy in &self.strategies {
            let tier = strategy.name();
            debug!("Trying tier '{}' for {}", tier, date);

            match self.attempt(strategy.as_ref(), &ctx).await {
                Ok(candidate) => {
                    info!("Accepted '{}' from tier '{}'", candidate.title, tier);
                    self.lock_metrics().record_win(tier);
                    return Ok(Resolution {
                        candidate,
                        report: ResolutionReport {
                            date,
                            tier: tier.to_string(),
                            trusted: strategy.trusted(),
                            failures,
                        },
                    });
                }
                Err(failure) => {
                    match &failure {
                        TierFailure::Transport(e) => warn!("Tier '{}' unavailable: {}", tier, e),
                        TierFailure::NotAPerson { title, .. } => {
                            warn!("Tier '{}' candidate '{}' rejected", tier, title)
                        }
                        other => debug!("Tier '{}' produced nothing: {}", tier, other),
                    }
                    self.lock_metrics()
                        .record_failure(tier, matches!(failure, TierFailure::NotAPerson { .. }));
                    failures.push(FailedAttempt {
                        tier: tier.to_string(),
                        failure,
                    });
                }
            }
        }

        self.lock_metrics().record_exhausted();
        Err(ResolverError::ResolutionFailed {
            date,
            attempts: failures,
        })
    }

    /// Run one tier under the time budget and gate its candidate
    async fn attempt(
        &self,
        strategy: &dyn SourceStrategy,
        ctx: &ResolveContext,
    ) -> Result<ArticleCandidate, TierFailure> {
        let candidate = tokio::time::timeout(self.tier_timeout, strategy.try_resolve(ctx))
            .await
            .map_err(|_| TierFailure::Timeout(self.tier_timeout.as_secs()))??;

        if !candidate.is_well_formed() {
            return Err(TierFailure::IllFormed);
        }

        if !strategy.trusted() && !self.classifier.is_person(&candidate) {
            return Err(TierFailure::NotAPerson {
                reasons: self.classifier.rejection_reasons(&candidate),
                title: candidate.title,
            });
        }

        Ok(candidate)
    }
}
