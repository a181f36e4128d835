//! The Person-of-the-Day orchestrator

use crate::{RecordAssembler, ServiceConfig, ServiceError};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};
use vitae_cache::{Clock, DailyCache, SystemClock};
use vitae_classifier::PersonClassifier;
use vitae_domain::traits::FactExtractor;
use vitae_domain::PersonRecord;
use vitae_extractor::{PatternExtractor, PatternRuleSet};
use vitae_resolver::{ResolutionReport, SourceResolver};
use vitae_source::{EncyclopediaClient, WikipediaClient};

type DateLock = Arc<tokio::sync::Mutex<()>>;

/// Produces one validated [`PersonRecord`] per day
///
/// Flow for a date:
///
/// 1. A fresh cached record is returned as-is, with no network calls.
/// 2. Otherwise the tier cascade runs, facts are extracted from the accepted
///    candidate and the assembled record is cached.
/// 3. If every tier fails a placeholder record is returned. Placeholders are
///    not cached, so the next call retries.
///
/// # Examples
///
/// ```no_run
/// use vitae_service::{PersonResolutionService, ServiceConfig};
///
/// # async fn run() -> Result<(), vitae_service::ServiceError> {
/// let service = PersonResolutionService::wikipedia(ServiceConfig::default())?;
/// let person = service.get_person_of_the_day().await;
/// println!("{} ({}): {}", person.name, person.birth_year, person.achievement);
/// # Ok(())
/// # }
/// ```
pub struct PersonResolutionService {
    resolver: SourceResolver,
    extractor: Arc<dyn FactExtractor + Send + Sync>,
    cache: DailyCache,
    assembler: RecordAssembler,
    in_flight: Option<Mutex<HashMap<NaiveDate, DateLock>>>,
}

impl PersonResolutionService {
    /// Assemble a service from already-built components
    pub fn new(
        resolver: SourceResolver,
        extractor: Arc<dyn FactExtractor + Send + Sync>,
        cache: DailyCache,
        config: &ServiceConfig,
    ) -> Self {
        Self {
            resolver,
            extractor,
            cache,
            assembler: RecordAssembler::from_config(config),
            in_flight: config.single_flight.then(|| Mutex::new(HashMap::new())),
        }
    }

    /// Build the full pipeline over `client`, reading dates from `clock`
    pub fn from_config(
        config: ServiceConfig,
        client: Arc<dyn EncyclopediaClient>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ServiceError> {
        config.validate().map_err(ServiceError::Config)?;

        let classifier = Arc::new(PersonClassifier::from_config(&config.classifier));
        let resolver = SourceResolver::from_config(&config.resolver, client, classifier)?;
        let extractor = PatternExtractor::new(PatternRuleSet::standard()?, config.extractor.clone())?;
        let cache = DailyCache::with_ttl(config.cache.clone(), clock);

        Ok(Self::new(resolver, Arc::new(extractor), cache, &config))
    }

    /// Build the pipeline against Wikipedia on the system clock
    pub fn wikipedia(config: ServiceConfig) -> Result<Self, ServiceError> {
        let client = WikipediaClient::new(config.source.clone())?;
        Self::from_config(config, Arc::new(client), Arc::new(SystemClock))
    }

    /// The day cache
    pub fn cache(&self) -> &DailyCache {
        &self.cache
    }

    /// The tier cascade
    pub fn resolver(&self) -> &SourceResolver {
        &self.resolver
    }

    /// Today's person, according to the cache clock
    pub async fn get_person_of_the_day(&self) -> Arc<PersonRecord> {
        self.get_person_for_date(self.cache.today()).await
    }

    /// The person for `date`
    ///
    /// Never fails: exhausting every tier yields a placeholder record.
    pub async fn get_person_for_date(&self, date: NaiveDate) -> Arc<PersonRecord> {
        if let Some(record) = self.cache.get(date) {
            return record;
        }

        let Some(in_flight) = &self.in_flight else {
            return self.resolve_and_store(date).await;
        };

        let slot = InFlightSlot::acquire(in_flight, date);
        let _permit = slot.lock.lock().await;
        // Another caller may have finished while we waited
        match self.cache.get(date) {
            Some(record) => record,
            None => self.resolve_and_store(date).await,
        }
    }

    /// Run the cascade for `date` without touching the cache
    ///
    /// Returns the assembled record with the cascade report, for diagnostics.
    pub async fn resolve_for_date(
        &self,
        date: NaiveDate,
    ) -> Result<(PersonRecord, ResolutionReport), ServiceError> {
        let resolution = self.resolver.resolve(date).await?;
        let facts = self.extractor.extract(&resolution.candidate);
        debug!(
            "Extracted facts for '{}': born {}, field {}",
            resolution.candidate.title, facts.birth_year, facts.field
        );
        let record = self.assembler.assemble(&resolution.candidate, facts);
        Ok((record, resolution.report))
    }

    /// Placeholder record for `date`
    pub fn placeholder(&self, date: NaiveDate) -> PersonRecord {
        self.assembler.placeholder(date)
    }

    async fn resolve_and_store(&self, date: NaiveDate) -> Arc<PersonRecord> {
        match self.resolve_for_date(date).await {
            Ok((record, report)) => {
                info!("Resolved {} to '{}' via '{}'", date, record.name, report.tier);
                self.cache.put(date, record)
            }
            Err(e) => {
                warn!("Falling back to placeholder for {}: {}", date, e);
                Arc::new(self.assembler.placeholder(date))
            }
        }
    }
}

/// A caller's claim on the per-date lock
///
/// The map entry is removed when the last claim drops, including when the
/// caller's future is cancelled mid-resolution.
struct InFlightSlot<'a> {
    map: &'a Mutex<HashMap<NaiveDate, DateLock>>,
    date: NaiveDate,
    lock: DateLock,
}

impl<'a> InFlightSlot<'a> {
    fn acquire(map: &'a Mutex<HashMap<NaiveDate, DateLock>>, date: NaiveDate) -> Self {
        let lock = {
            let mut locks = map.lock().unwrap_or_else(|e| e.into_inner());
            Arc::clone(locks.entry(date).or_default())
        };
        Self { map, date, lock }
    }
}

impl Drop for InFlightSlot<'_> {
    fn drop(&mut self) {
        let mut locks = self.map.lock().unwrap_or_else(|e| e.into_inner());
        // Map entry plus ours: nobody else holds a claim
        let last = Arc::strong_count(&self.lock) <= 2;
        if last && locks.get(&self.date).is_some_and(|l| Arc::ptr_eq(l, &self.lock)) {
            locks.remove(&self.date);
        }
    }
}
