//! Key-value stores behind the [`Cache`] interface

use crate::Clock;
use chrono::{Duration, NaiveDateTime};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// A thread-safe key-value cache
///
/// Values are returned by clone, so store an `Arc` when callers need to share
/// one instance.
pub trait Cache<K, V>: Send + Sync {
    /// Fresh value for `key`, if any
    fn get(&self, key: &K) -> Option<V>;

    /// Store `value` under `key`, replacing any previous entry
    fn put(&self, key: K, value: V);

    /// Remove and return the entry for `key`
    fn remove(&self, key: &K) -> Option<V>;

    /// Number of stored entries, fresh or not
    fn len(&self) -> usize;

    /// Whether no entries are stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop entries that are no longer fresh, returning how many went
    fn purge_expired(&self) -> usize {
        0
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

/// Map-backed cache whose entries never expire
#[derive(Debug)]
pub struct MemoryCache<K, V> {
    entries: Mutex<HashMap<K, V>>,
}

impl<K, V> MemoryCache<K, V> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for MemoryCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Cache<K, V> for MemoryCache<K, V>
where
    K: Eq + Hash + Send,
    V: Clone + Send,
{
    fn get(&self, key: &K) -> Option<V> {
        lock(&self.entries).get(key).cloned()
    }

    fn put(&self, key: K, value: V) {
        lock(&self.entries).insert(key, value);
    }

    fn remove(&self, key: &K) -> Option<V> {
        lock(&self.entries).remove(key)
    }

    fn len(&self) -> usize {
        lock(&self.entries).len()
    }
}

/// A stored value and when it was stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<V> {
    /// Cached value
    pub value: V,
    /// Local time the value was stored
    pub stored_at: NaiveDateTime,
}

impl<V> CacheEntry<V> {
    /// Wrap `value` stored at `stored_at`
    pub fn new(value: V, stored_at: NaiveDateTime) -> Self {
        Self { value, stored_at }
    }

    /// Strictly older than `ttl` at `now`
    ///
    /// An entry exactly `ttl` old is still fresh.
    pub fn is_expired(&self, now: NaiveDateTime, ttl: Duration) -> bool {
        now - self.stored_at > ttl
    }
}

/// Map-backed cache with a fixed time-to-live
///
/// Expired entries read as absent but stay in the map until overwritten or
/// purged.
pub struct TtlCache<K, V> {
    entries: Mutex<HashMap<K, CacheEntry<V>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<K, V> TtlCache<K, V> {
    /// Create an empty cache
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Entry lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl<K, V> Cache<K, V> for TtlCache<K, V>
where
    K: Eq + Hash + Send,
    V: Clone + Send,
{
    fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        lock(&self.entries)
            .get(key)
            .filter(|entry| !entry.is_expired(now, self.ttl))
            .map(|entry| entry.value.clone())
    }

    fn put(&self, key: K, value: V) {
        let entry = CacheEntry::new(value, self.clock.now());
        lock(&self.entries).insert(key, entry);
    }

    fn remove(&self, key: &K) -> Option<V> {
        lock(&self.entries).remove(key).map(|entry| entry.value)
    }

    fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut entries = lock(&self.entries);
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now, self.ttl));
        let purged = before - entries.len();
        if purged > 0 {
            debug!("Purged {} expired cache entries", purged);
        }
        purged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;
    use chrono::NaiveDate;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_memory_cache() {
        let cache: MemoryCache<String, u32> = MemoryCache::new();
        assert!(cache.is_empty());

        cache.put("a".to_string(), 1);
        cache.put("a".to_string(), 2);
        assert_eq!(cache.get(&"a".to_string()), Some(2));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.purge_expired(), 0);

        assert_eq!(cache.remove(&"a".to_string()), Some(2));
        assert!(cache.get(&"a".to_string()).is_none());
    }

    #[test]
    fn test_entry_expiry_is_strict() {
        let entry = CacheEntry::new((), start());
        let ttl = Duration::hours(24);
        assert!(!entry.is_expired(start() + Duration::hours(24), ttl));
        assert!(entry.is_expired(start() + Duration::hours(24) + Duration::seconds(1), ttl));
    }

    #[test]
    fn test_ttl_cache_expires() {
        let clock = Arc::new(FixedClock::new(start()));
        let cache: TtlCache<&str, u32> = TtlCache::new(Duration::hours(1), clock.clone());

        cache.put("k", 7);
        clock.advance(Duration::minutes(59));
        assert_eq!(cache.get(&"k"), Some(7));

        clock.advance(Duration::minutes(2));
        assert_eq!(cache.get(&"k"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_ttl_cache_overwrite_refreshes() {
        let clock = Arc::new(FixedClock::new(start()));
        let cache: TtlCache<&str, u32> = TtlCache::new(Duration::hours(1), clock.clone());

        cache.put("k", 1);
        clock.advance(Duration::hours(2));
        cache.put("k", 2);
        assert_eq!(cache.get(&"k"), Some(2));
    }

    #[test]
    fn test_purge_expired() {
        let clock = Arc::new(FixedClock::new(start()));
        let cache: TtlCache<u8, u8> = TtlCache::new(Duration::hours(1), clock.clone());

        cache.put(1, 1);
        clock.advance(Duration::hours(2));
        cache.put(2, 2);

        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&2), Some(2));
    }
}
