//! Date-keyed cache of resolved records

use crate::{Cache, CacheConfig, CacheEntry, Clock, MemoryCache, SystemClock, TtlCache};
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;
use tracing::{debug, info};
use vitae_domain::PersonRecord;

/// One shared [`PersonRecord`] per calendar day
///
/// Keys are `key_prefix` followed by the ISO date, e.g. `person_2024-05-01`.
/// Records are handed out as `Arc`s, so two reads within the same fresh
/// window return the same instance.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use chrono::NaiveDate;
/// use vitae_cache::{CacheConfig, DailyCache, FixedClock};
/// use vitae_domain::{BirthYear, Field, PersonRecord};
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let cache = DailyCache::with_ttl(CacheConfig::default(), Arc::new(FixedClock::at_date(date)));
///
/// let record = PersonRecord {
///     id: "1001".into(),
///     name: "Ada Lovelace".into(),
///     title: "English mathematician".into(),
///     description: "Ada Lovelace was an English mathematician.".into(),
///     birth_year: BirthYear::Known(1815),
///     achievement: "English mathematician".into(),
///     field: Field::Science,
///     image_url: "https://img.example/ada.jpg".into(),
///     wiki_url: "https://en.wikipedia.org/wiki/Ada_Lovelace".into(),
///     is_placeholder: false,
/// };
///
/// assert!(cache.get(date).is_none());
/// let stored = cache.put(date, record);
/// let read = cache.get(date).unwrap();
/// assert!(Arc::ptr_eq(&stored, &read));
/// ```
pub struct DailyCache {
    store: Arc<dyn Cache<String, Arc<PersonRecord>>>,
    config: CacheConfig,
    clock: Arc<dyn Clock>,
}

impl DailyCache {
    /// View over an arbitrary backing store
    pub fn new(
        store: Arc<dyn Cache<String, Arc<PersonRecord>>>,
        config: CacheConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            config,
            clock,
        }
    }

    /// Production cache: entries expire `ttl_hours` after being stored
    pub fn with_ttl(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(TtlCache::new(config.ttl(), Arc::clone(&clock)));
        Self::new(store, config, clock)
    }

    /// Cache over a plain map with no expiry
    pub fn in_memory(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self::new(Arc::new(MemoryCache::new()), config, clock)
    }

    /// TTL cache on the system clock with default settings
    pub fn default_config() -> Self {
        Self::with_ttl(CacheConfig::default(), Arc::new(SystemClock))
    }

    /// Cache key for `date`
    pub fn key_for(&self, date: NaiveDate) -> String {
        format!("{}{}", self.config.key_prefix, date.format("%Y-%m-%d"))
    }

    /// Today's date according to the cache clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// The clock this cache reads
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Active configuration
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Fresh record for `date`, if one is stored
    pub fn get(&self, date: NaiveDate) -> Option<Arc<PersonRecord>> {
        let key = self.key_for(date);
        let hit = self.store.get(&key);
        match &hit {
            Some(record) => info!("Cache hit for {}: '{}'", key, record.name),
            None => debug!("Cache miss for {}", key),
        }
        hit
    }

    /// Store `record` for `date` and return the shared instance
    pub fn put(&self, date: NaiveDate, record: PersonRecord) -> Arc<PersonRecord> {
        let key = self.key_for(date);
        let record = Arc::new(record);
        info!("Caching '{}' under {}", record.name, key);
        self.store.put(key, Arc::clone(&record));
        record
    }

    /// Whether `entry` is stale at `now` under this cache's TTL
    pub fn is_expired<V>(&self, entry: &CacheEntry<V>, now: NaiveDateTime) -> bool {
        entry.is_expired(now, self.config.ttl())
    }

    /// Drop stale entries, returning how many went
    pub fn purge_expired(&self) -> usize {
        self.store.purge_expired()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;
    use chrono::Duration;
    use vitae_domain::{BirthYear, Field};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn record(name: &str) -> PersonRecord {
        PersonRecord {
            id: "1".to_string(),
            name: name.to_string(),
            title: "Historical Figure".to_string(),
            description: "No description available.".to_string(),
            birth_year: BirthYear::Unknown,
            achievement: "Notable historical figure".to_string(),
            field: Field::NotableFigure,
            image_url: "https://img.example/a.jpg".to_string(),
            wiki_url: "https://en.wikipedia.org/wiki/A".to_string(),
            is_placeholder: false,
        }
    }

    fn cache() -> (DailyCache, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::at_date(date()));
        (DailyCache::with_ttl(CacheConfig::default(), clock.clone()), clock)
    }

    #[test]
    fn test_key_format() {
        let (cache, _) = cache();
        assert_eq!(cache.key_for(date()), "person_2024-05-01");
        assert_eq!(cache.today(), date());
    }

    #[test]
    fn test_same_day_reads_share_instance() {
        let (cache, clock) = cache();
        cache.put(date(), record("Ada Lovelace"));

        let first = cache.get(date()).unwrap();
        clock.advance(Duration::hours(6));
        let second = cache.get(date()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.name, "Ada Lovelace");
    }

    #[test]
    fn test_absent_after_ttl() {
        let (cache, clock) = cache();
        cache.put(date(), record("Ada Lovelace"));

        clock.advance(Duration::hours(24));
        assert!(cache.get(date()).is_some());

        clock.advance(Duration::minutes(1));
        assert!(cache.get(date()).is_none());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.purge_expired(), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_dates_are_independent() {
        let (cache, _) = cache();
        let next = date().succ_opt().unwrap();
        cache.put(date(), record("A"));
        cache.put(next, record("B"));

        assert_eq!(cache.get(date()).unwrap().name, "A");
        assert_eq!(cache.get(next).unwrap().name, "B");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_is_expired_uses_configured_ttl() {
        let clock = Arc::new(FixedClock::at_date(date()));
        let config = CacheConfig {
            ttl_hours: 1,
            ..Default::default()
        };
        let cache = DailyCache::in_memory(config, clock.clone());
        let entry = CacheEntry::new((), clock.now());

        assert!(!cache.is_expired(&entry, clock.now() + Duration::minutes(60)));
        assert!(cache.is_expired(&entry, clock.now() + Duration::minutes(61)));
    }

    #[test]
    fn test_in_memory_never_expires() {
        let (_, clock) = cache();
        let cache = DailyCache::in_memory(CacheConfig::default(), clock.clone());
        cache.put(date(), record("A"));
        clock.advance(Duration::days(30));
        assert!(cache.get(date()).is_some());
    }
}
