//! Object phrases after achievement verbs
//!
//! The verb templates capture a raw run of words ("the telephone in 1876").
//! [`noun_phrase`] cuts that run down to the object itself, or rejects it when
//! the verb is not followed by a noun phrase at all ("wrote extensively on
//! ethics", "founded and led").

/// Longest object kept, in words
const MAX_OBJECT_WORDS: usize = 6;

const ARTICLES: &[&str] = &["the", "a", "an"];

/// Prepositions, pronouns, conjunctions and auxiliaries that end an object
const STOP_WORDS: &[&str] = &[
    "to", "that", "in", "on", "about", "for", "with", "his", "her", "their", "its", "him",
    "them", "it", "from", "by", "as", "at", "into", "over", "under", "between", "and", "or",
    "but", "while", "during", "after", "before", "when", "where", "which", "who", "whom",
    "whose", "also", "then", "than", "until", "was", "were", "is", "are", "be", "being",
    "been", "had", "has", "have", "not", "both", "together", "alongside", "there", "here",
    "himself", "herself", "themselves", "later", "again", "too",
];

/// Determiners and adjectives that say nothing on their own ("a new")
const VAGUE_MODIFIERS: &[&str] = &[
    "new", "several", "many", "some", "various", "numerous", "more", "most", "other",
    "first", "own", "this", "these", "those", "such", "much", "few", "each", "every",
    "important", "major", "famous", "notable", "early", "late", "widely", "extensively",
];

/// Lower-case words ending in "ly" that are nouns, not adverbs
const LY_NOUNS: &[&str] = &[
    "family", "assembly", "supply", "monopoly", "rally", "ally", "anomaly", "butterfly",
    "melody", "comedy", "italy",
];

/// Connectors allowed between capitalised words ("Pride and Prejudice")
const TITLE_CONNECTORS: &[&str] = &["of", "and", "or", "the", "de", "von", "van", "la", "le"];

/// The object named by `raw`, or `None` when it is not a noun phrase
///
/// Accepted shapes:
///
/// - an article followed by a phrase ("the theory of relativity")
/// - a run of capitalised words ("Pride and Prejudice")
/// - a lower-case phrase that does not start or end on a modifier ("penicillin")
pub(crate) fn noun_phrase(raw: &str) -> Option<String> {
    let words: Vec<&str> = raw.split_whitespace().take(MAX_OBJECT_WORDS * 2).collect();
    let first = *words.first()?;

    if is_article(first) {
        let rest = phrase_words(&words[1..]);
        let last = *rest.last()?;
        if is_vague(last) {
            return None;
        }
        return Some(format!("{} {}", first, rest.join(" ")));
    }

    if is_capitalised(first) {
        return Some(capitalised_run(&words).join(" "));
    }

    if is_vague(first) {
        return None;
    }
    let phrase = phrase_words(&words);
    let last = *phrase.last()?;
    if is_vague(last) {
        return None;
    }
    Some(phrase.join(" "))
}

/// Words up to the first stop word; "of" is kept only when something follows it
fn phrase_words<'a>(words: &[&'a str]) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < words.len() && out.len() < MAX_OBJECT_WORDS {
        let word = words[i];
        if word.eq_ignore_ascii_case("of") {
            let mut next = i + 1;
            if next < words.len() && is_article(words[next]) {
                next += 1;
            }
            match words.get(next) {
                Some(w)
                    if !ends_phrase(w)
                        && !is_article(w)
                        && out.len() + next - i < MAX_OBJECT_WORDS =>
                {
                    out.extend_from_slice(&words[i..=next]);
                    i = next + 1;
                    continue;
                }
                _ => break,
            }
        }
        if ends_phrase(word) || is_article(word) {
            break;
        }
        out.push(word);
        i += 1;
    }
    out
}

/// Capitalised words joined by title connectors, ending on a capitalised word
fn capitalised_run<'a>(words: &[&'a str]) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut pending = Vec::new();
    for &word in words {
        if out.len() + pending.len() >= MAX_OBJECT_WORDS {
            break;
        }
        if is_capitalised(word) {
            out.append(&mut pending);
            out.push(word);
        } else if !out.is_empty() && TITLE_CONNECTORS.contains(&word) {
            pending.push(word);
        } else {
            break;
        }
    }
    out
}

fn ends_phrase(word: &str) -> bool {
    let lower = word.to_lowercase();
    STOP_WORDS.contains(&lower.as_str()) || is_adverb(word)
}

fn is_article(word: &str) -> bool {
    ARTICLES.contains(&word.to_lowercase().as_str())
}

fn is_vague(word: &str) -> bool {
    let lower = word.to_lowercase();
    VAGUE_MODIFIERS.contains(&lower.as_str()) || STOP_WORDS.contains(&lower.as_str()) || is_adverb(word)
}

fn is_adverb(word: &str) -> bool {
    word.len() > 4
        && word.ends_with("ly")
        && !is_capitalised(word)
        && !LY_NOUNS.contains(&word)
}

fn is_capitalised(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}
