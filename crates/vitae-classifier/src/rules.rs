//! Declarative rule table for person classification
//!
//! Each rule names a gate, the text it inspects and its vocabulary. Rules are
//! evaluated in priority order so that new vocabularies can be added without
//! touching control flow.

use vitae_domain::ArticleCandidate;

/// Broad topical nouns whose pages are never biographies
pub const EXCLUDED_TITLE_TERMS: &[&str] = &[
    "scientist", "politician", "film", "album", "company", "city", "theory",
    "song", "band", "country", "war", "battle", "list", "history", "river",
    "mountain", "species", "novel", "book", "television series", "video game",
    "university", "school", "church", "language", "religion", "philosophy",
    "painting", "music", "science", "mathematics", "physics", "empire",
    "dynasty", "revolution", "treaty", "election", "award", "prize", "festival",
    "organization", "party", "team", "club", "museum", "building", "bridge",
    "island", "lake", "ship", "aircraft", "disease", "planet", "element",
];

/// Life-event words that indicate biographical prose
pub const BIOGRAPHICAL_TERMS: &[&str] = &[
    "born", "died", "early life", "married", "childhood", "grew up",
    "was raised", "passed away", "his death", "her death", "birth",
    "son of", "daughter of", "buried",
];

/// Occupational and honorific nouns that describe a person
pub const ROLE_TERMS: &[&str] = &[
    "politician", "scientist", "author", "writer", "president", "king",
    "queen", "activist", "actor", "actress", "singer", "musician", "painter",
    "artist", "poet", "philosopher", "inventor", "engineer", "physicist",
    "chemist", "mathematician", "composer", "explorer", "general", "emperor",
    "empress", "leader", "businessman", "businesswoman", "entrepreneur",
    "athlete", "player", "journalist", "novelist", "playwright", "director",
    "lawyer", "judge", "astronaut", "economist", "historian", "monarch",
    "saint", "priest", "pope", "footballer", "architect", "sculptor",
    "statesman", "stateswoman", "diplomat", "physician", "biologist",
    "astronomer", "aviator", "reformer", "theologian", "prime minister",
];

/// Which gate a rule contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// A match rejects the candidate immediately
    Exclusion,

    /// A match supplies life-event evidence
    Biographical,

    /// A match supplies role evidence
    Role,
}

/// Candidate text a rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// Article title
    Title,
    /// Lead prose
    Extract,
    /// Short descriptor
    Description,
}

impl TextSource {
    fn read<'a>(&self, candidate: &'a ArticleCandidate) -> &'a str {
        match self {
            TextSource::Title => &candidate.title,
            TextSource::Extract => &candidate.extract,
            TextSource::Description => &candidate.description,
        }
    }
}

/// One entry in the rule table
#[derive(Debug, Clone)]
pub struct ClassifierRule {
    /// Name of the rule (for diagnostics)
    pub name: String,

    /// Gate this rule feeds
    pub gate: Gate,

    /// Text inspected
    pub source: TextSource,

    /// Lower-case vocabulary
    pub terms: Vec<String>,

    /// Evaluation order, lowest first
    pub priority: u32,
}

impl ClassifierRule {
    /// Create a rule from a static vocabulary
    pub fn new(
        name: impl Into<String>,
        gate: Gate,
        source: TextSource,
        terms: &[&str],
        priority: u32,
    ) -> Self {
        Self {
            name: name.into(),
            gate,
            source,
            terms: terms.iter().map(|t| t.to_lowercase()).collect(),
            priority,
        }
    }

    /// Add more terms to this rule
    pub fn extend_terms<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.terms
            .extend(extra.into_iter().map(|t| t.as_ref().trim().to_lowercase()).filter(|t| !t.is_empty()));
    }

    /// Return the first term this rule matches, if any
    ///
    /// Exclusion rules compare against the whole title at a word boundary.
    /// Evidence rules use a case-insensitive substring test. Empty text
    /// never matches.
    pub fn find_match(&self, candidate: &ArticleCandidate) -> Option<&str> {
        let text = self.source.read(candidate).trim().to_lowercase();
        if text.is_empty() {
            return None;
        }

        self.terms
            .iter()
            .find(|term| match self.gate {
                Gate::Exclusion => title_names_concept(&text, term),
                Gate::Biographical | Gate::Role => text.contains(term.as_str()),
            })
            .map(String::as_str)
    }
}

/// Title equals the term, its plural, or starts with either followed by a word break
fn title_names_concept(title: &str, term: &str) -> bool {
    let plural = pluralize(term);
    [term, plural.as_str()].iter().any(|stem| {
        title == *stem
            || title
                .strip_prefix(stem)
                .is_some_and(|rest| rest.starts_with(' ') || rest.starts_with('('))
    })
}

fn pluralize(term: &str) -> String {
    match term.strip_suffix('y') {
        Some(stem) if !stem.ends_with(['a', 'e', 'o', 'u']) => format!("{}ies", stem),
        _ => format!("{}s", term),
    }
}

/// Ordered collection of classifier rules
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<ClassifierRule>,
}

impl RuleSet {
    /// The built-in rule table
    pub fn standard() -> Self {
        Self::from_rules(vec![
            ClassifierRule::new(
                "general-concept-title",
                Gate::Exclusion,
                TextSource::Title,
                EXCLUDED_TITLE_TERMS,
                10,
            ),
            ClassifierRule::new(
                "life-event-in-extract",
                Gate::Biographical,
                TextSource::Extract,
                BIOGRAPHICAL_TERMS,
                20,
            ),
            ClassifierRule::new(
                "role-in-description",
                Gate::Role,
                TextSource::Description,
                ROLE_TERMS,
                30,
            ),
        ])
    }

    /// Build a rule set, ordering rules by priority
    pub fn from_rules(mut rules: Vec<ClassifierRule>) -> Self {
        rules.sort_by_key(|r| r.priority);
        Self { rules }
    }

    /// Insert another rule, keeping priority order
    pub fn with_rule(mut self, rule: ClassifierRule) -> Self {
        self.rules.push(rule);
        self.rules.sort_by_key(|r| r.priority);
        self
    }

    /// Mutable access to the first rule feeding `gate`
    pub fn rule_for_gate_mut(&mut self, gate: Gate) -> Option<&mut ClassifierRule> {
        self.rules.iter_mut().find(|r| r.gate == gate)
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[ClassifierRule] {
        &self.rules
    }

    /// Rules feeding one gate, in evaluation order
    pub fn rules_for(&self, gate: Gate) -> impl Iterator<Item = &ClassifierRule> {
        self.rules.iter().filter(move |r| r.gate == gate)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> ArticleCandidate {
        ArticleCandidate::new(title, "1")
    }

    #[test]
    fn test_title_exclusion_forms() {
        let rule = ClassifierRule::new("t", Gate::Exclusion, TextSource::Title, &["film"], 0);

        assert_eq!(rule.find_match(&titled("Film")), Some("film"));
        assert_eq!(rule.find_match(&titled("Films")), Some("film"));
        assert_eq!(rule.find_match(&titled("Film noir")), Some("film"));
        assert_eq!(rule.find_match(&titled("Films of 1999")), Some("film"));
        assert_eq!(rule.find_match(&titled("Film (disambiguation)")), Some("film"));
        assert_eq!(rule.find_match(&titled("Filmore Smith")), None);
        assert_eq!(rule.find_match(&titled("Jane Film")), None);
    }

    #[test]
    fn test_plural_of_y_terms() {
        let rule = ClassifierRule::new("t", Gate::Exclusion, TextSource::Title, &["city", "essay"], 0);
        assert_eq!(rule.find_match(&titled("Cities of Europe")), Some("city"));
        assert_eq!(rule.find_match(&titled("Essays")), Some("essay"));
    }

    #[test]
    fn test_evidence_is_substring_and_case_insensitive() {
        let rule = ClassifierRule::new("r", Gate::Role, TextSource::Description, &["poet"], 0);
        let candidate = titled("X").with_description("English Poet and playwright");
        assert_eq!(rule.find_match(&candidate), Some("poet"));
    }

    #[test]
    fn test_empty_text_never_matches() {
        let rule = ClassifierRule::new("b", Gate::Biographical, TextSource::Extract, &["born"], 0);
        assert_eq!(rule.find_match(&titled("X")), None);
    }

    #[test]
    fn test_rules_sorted_by_priority() {
        let set = RuleSet::standard().with_rule(ClassifierRule::new(
            "early",
            Gate::Exclusion,
            TextSource::Title,
            &["timeline"],
            1,
        ));
        assert_eq!(set.rules()[0].name, "early");
        assert_eq!(set.rules_for(Gate::Exclusion).count(), 2);
    }

    #[test]
    fn test_extend_terms_normalises() {
        let mut rule = ClassifierRule::new("r", Gate::Role, TextSource::Description, &[], 0);
        rule.extend_terms(["  Cartographer ", ""]);
        assert_eq!(rule.terms, vec!["cartographer".to_string()]);
    }
}
