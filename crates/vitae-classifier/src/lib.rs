//! Vitae Classifier
//!
//! Decides whether a fetched article is about an individual person.
//!
//! The classifier applies a two-stage gate over a declarative rule table:
//! - **Exclusion gate**: titles naming a general concept ("Film", "Cities of Europe") are rejected outright
//! - **Biographical evidence**: the extract must mention a life event ("born", "died", "married")
//! - **Role evidence**: the description must name a role ("politician", "poet", "king")
//!
//! Both evidence gates must pass. Either one alone produces false positives on
//! event articles or profession category pages.
//!
//! # Examples
//!
//! ```
//! use vitae_classifier::PersonClassifier;
//! use vitae_domain::ArticleCandidate;
//! use vitae_domain::traits::Classifier;
//!
//! let classifier = PersonClassifier::default_config();
//! let candidate = ArticleCandidate::new("Jane Doe", "1")
//!     .with_extract("Jane Doe (born in 1990) is a member of parliament.")
//!     .with_description("a Canadian politician");
//!
//! assert!(classifier.is_person(&candidate));
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod rules;

pub use classifier::{Classification, PersonClassifier, RejectionReason};
pub use config::ClassifierConfig;
pub use rules::{ClassifierRule, Gate, RuleSet, TextSource};
