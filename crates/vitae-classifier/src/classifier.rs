//! Person/non-person classification logic

use crate::rules::{Gate, RuleSet};
use crate::ClassifierConfig;
use tracing::debug;
use vitae_domain::traits::Classifier;
use vitae_domain::ArticleCandidate;

/// Why a candidate was not accepted as a person
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Title names a general concept
    GeneralConceptTitle {
        /// Rule that fired
        rule: String,
        /// Matched vocabulary term
        term: String,
    },

    /// Extract has no life-event wording
    MissingBiographicalEvidence,

    /// Description has no role wording
    MissingRoleEvidence,
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectionReason::GeneralConceptTitle { rule, term } => {
                write!(f, "title names a general concept '{}' ({})", term, rule)
            }
            RejectionReason::MissingBiographicalEvidence => {
                f.write_str("extract has no biographical indicator")
            }
            RejectionReason::MissingRoleEvidence => f.write_str("description has no role descriptor"),
        }
    }
}

/// Outcome of classifying one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Rejection reasons (empty when accepted)
    pub reasons: Vec<RejectionReason>,

    /// `(rule name, term)` pairs that supplied positive evidence
    pub evidence: Vec<(String, String)>,
}

impl Classification {
    /// Whether both evidence gates passed and no exclusion fired
    pub fn is_person(&self) -> bool {
        self.reasons.is_empty()
    }
}

/// Rule-table classifier for person articles
pub struct PersonClassifier {
    rules: RuleSet,
}

impl PersonClassifier {
    /// Create a classifier over a given rule table
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Create a classifier with the built-in rule table
    pub fn default_config() -> Self {
        Self::new(RuleSet::standard())
    }

    /// Create a classifier with the built-in table plus configured vocabulary
    pub fn from_config(config: &ClassifierConfig) -> Self {
        let mut rules = RuleSet::standard();
        let extras = [
            (Gate::Exclusion, &config.extra_excluded_titles),
            (Gate::Biographical, &config.extra_biographical_terms),
            (Gate::Role, &config.extra_role_terms),
        ];
        for (gate, terms) in extras {
            if let Some(rule) = rules.rule_for_gate_mut(gate) {
                rule.extend_terms(terms);
            }
        }
        Self::new(rules)
    }

    /// The rule table in evaluation order
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classify a candidate, reporting every failed gate
    ///
    /// The exclusion gate short-circuits: when it fires, the evidence gates
    /// are not evaluated.
    pub fn classify(&self, candidate: &ArticleCandidate) -> Classification {
        for rule in self.rules.rules_for(Gate::Exclusion) {
            if let Some(term) = rule.find_match(candidate) {
                debug!("'{}' excluded by rule '{}' on '{}'", candidate.title, rule.name, term);
                return Classification {
                    reasons: vec![RejectionReason::GeneralConceptTitle {
                        rule: rule.name.clone(),
                        term: term.to_string(),
                    }],
                    evidence: Vec::new(),
                };
            }
        }

        let mut reasons = Vec::new();
        let mut evidence = Vec::new();

        for (gate, missing) in [
            (Gate::Biographical, RejectionReason::MissingBiographicalEvidence),
            (Gate::Role, RejectionReason::MissingRoleEvidence),
        ] {
            let hit = self
                .rules
                .rules_for(gate)
                .find_map(|rule| rule.find_match(candidate).map(|term| (rule.name.clone(), term.to_string())));
            match hit {
                Some(found) => evidence.push(found),
                None => reasons.push(missing),
            }
        }

        debug!(
            "Classified '{}': {} evidence, {} rejection reasons",
            candidate.title,
            evidence.len(),
            reasons.len()
        );

        Classification { reasons, evidence }
    }
}

impl Default for PersonClassifier {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Classifier for PersonClassifier {
    fn is_person(&self, candidate: &ArticleCandidate) -> bool {
        self.classify(candidate).is_person()
    }

    fn rejection_reasons(&self, candidate: &ArticleCandidate) -> Vec<String> {
        self.classify(candidate)
            .reasons
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}
