//! The tier abstraction

use crate::TierFailure;
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Mutex;
use vitae_domain::ArticleCandidate;

/// Inputs shared by every tier for one resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveContext {
    /// Calendar date being resolved
    pub date: NaiveDate,
}

impl ResolveContext {
    /// Context for `date`
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Day-of-month modulo `len`, `None` when `len` is zero
    pub fn day_index(&self, len: usize) -> Option<usize> {
        day_index(self.date, len)
    }
}

/// Stable per-day index into a list of `len` entries
///
/// Uses the day of month, so every call on the same date picks the same
/// entry.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use vitae_resolver::day_index;
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
/// assert_eq!(day_index(date, 10), Some(7));
/// assert_eq!(day_index(date, 0), None);
/// ```
pub fn day_index(date: NaiveDate, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(date.day() as usize % len)
    }
}

/// One way of finding a candidate article
///
/// Strategies only fetch. Classification is applied by the runner unless
/// [`SourceStrategy::trusted`] says the source is pre-vetted.
#[async_trait]
pub trait SourceStrategy: Send + Sync {
    /// Short tier name used in logs, reports and metrics
    fn name(&self) -> &str;

    /// Whether candidates from this tier skip classification
    fn trusted(&self) -> bool {
        false
    }

    /// Attempt to produce a candidate for `ctx`
    async fn try_resolve(&self, ctx: &ResolveContext) -> Result<ArticleCandidate, TierFailure>;
}

/// Uniform random selection with an optional fixed seed
#[derive(Debug)]
pub struct Picker {
    rng: Mutex<StdRng>,
}

impl Picker {
    /// Picker seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible picker
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Pick one item uniformly at random, `None` for an empty slice
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        items.choose(&mut *rng)
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::from_entropy()
    }
}
