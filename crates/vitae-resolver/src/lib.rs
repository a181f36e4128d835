//! Vitae Source Resolver
//!
//! Finds one article about a real person for a given date by walking an
//! ordered cascade of tiers.
//!
//! # Architecture
//!
//! Each tier is a [`SourceStrategy`]. [`SourceResolver`] runs them in order
//! and stops at the first accepted candidate:
//!
//! 1. `featured`: the featured article for the date
//! 2. `category`: a random member of the day's biographical category
//! 3. `search`: a random hit of a fixed biography search
//! 4. `catalog`: the day's entry of a curated name list
//!
//! Candidates from every tier except `catalog` must pass the injected
//! [`Classifier`](vitae_domain::traits::Classifier). A tier that fails for any
//! reason yields a [`TierFailure`] and the cascade continues. Only exhausting
//! every tier is an error ([`ResolverError::ResolutionFailed`]).
//!
//! The cascade is configuration: [`ResolverConfig::tiers`] lists tier kinds in
//! order, so the optional `random` tier is enabled by inserting it.

#![warn(missing_docs)]

mod config;
mod error;
mod metrics;
mod resolver;
mod strategy;
pub mod tiers;

pub use config::{ResolverConfig, TierKind, DEFAULT_CATALOG, DEFAULT_CATEGORIES};
pub use error::{FailedAttempt, ResolverError, TierFailure};
pub use metrics::ResolverMetrics;
pub use resolver::{Resolution, ResolutionReport, SourceResolver};
pub use strategy::{day_index, Picker, ResolveContext, SourceStrategy};
