//! Text helpers shared by the extractor and record assembly
//!
//! All lengths are counted in Unicode scalar values, never bytes, so
//! truncation cannot split a multi-byte character.

/// Suffix appended to any shortened text
pub const ELLIPSIS: &str = "...";

/// Number of characters in `s`
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// First `n` characters of `s`
pub fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Cut to `max` characters and append an ellipsis when anything was removed
///
/// # Examples
///
/// ```
/// use vitae_domain::text::truncate_with_ellipsis;
///
/// assert_eq!(truncate_with_ellipsis("short", 10), "short");
/// assert_eq!(truncate_with_ellipsis("abcdefghij", 4), "abcd...");
/// ```
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if char_len(s) <= max {
        return s.to_string();
    }
    format!("{}{}", take_chars(s, max).trim_end(), ELLIPSIS)
}

/// Cut at the last whitespace before `cut`, or hard-cut at `cut`, then append an ellipsis
///
/// Returns the input unchanged when it already fits in `cut` characters.
///
/// # Examples
///
/// ```
/// use vitae_domain::text::truncate_at_word_boundary;
///
/// assert_eq!(truncate_at_word_boundary("one two three", 9), "one two...");
/// assert_eq!(truncate_at_word_boundary("abcdefghij", 4), "abcd...");
/// ```
pub fn truncate_at_word_boundary(s: &str, cut: usize) -> String {
    if char_len(s) <= cut {
        return s.to_string();
    }
    let head = take_chars(s, cut);
    let body = match head.rfind(char::is_whitespace) {
        Some(idx) if idx > 0 => &head[..idx],
        _ => head,
    };
    format!("{}{}", body.trim_end(), ELLIPSIS)
}
