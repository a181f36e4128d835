//! Vitae Cache Layer
//!
//! Keeps at most one resolved record per calendar day so repeat calls on the
//! same day never touch the network.
//!
//! # Architecture
//!
//! - [`Cache`]: key-value interface with an injectable backing store
//! - [`MemoryCache`]: plain map, nothing ever expires
//! - [`TtlCache`]: map whose entries expire a fixed time after being stored
//! - [`DailyCache`]: date-keyed view over any `Cache`, holding shared records
//! - [`Clock`]: source of "now", swapped for [`FixedClock`] in tests
//!
//! Nothing is persisted across restarts.

#![warn(missing_docs)]

mod clock;
mod config;
mod daily;
mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CacheConfig, MAX_TTL_HOURS};
pub use daily::DailyCache;
pub use store::{Cache, CacheEntry, MemoryCache, TtlCache};
