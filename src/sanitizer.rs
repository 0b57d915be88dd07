//! Content Sanitizer
//!
//! Strips trailing AI meta-commentary ("Note: I simplified the tone.",
//! "Refined for clarity...") from generated drafts. The writer prompt asks
//! the model to omit meta-talk, but enforcement lives here, not in the
//! model contract.

use once_cell::sync::Lazy;
use regex::Regex;

/// Recognized meta-commentary openers, in priority order. Case-insensitive,
/// and `.` matches newlines: a match starting mid-paragraph discards
/// everything after it, later paragraphs included.
static META_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?is)I made the following.*",
        r"(?is)Refined for clarity.*",
        r"(?is)Note:.*",
        r"(?is)Simplified sentence.*",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid meta-commentary pattern"))
    .collect()
});

/// Strip recognized meta-commentary from generated text
///
/// Each pattern in turn truncates the working text at that pattern's first
/// match, so the surviving output is the prefix before the earliest match of
/// any pattern. No match: the input is returned unchanged apart from
/// whitespace trimming. Idempotent.
pub fn sanitize(text: &str) -> String {
    let mut clean = text.to_string();
    for pattern in META_PATTERNS.iter() {
        if let Some(m) = pattern.find(&clean) {
            clean.truncate(m.start());
        }
    }
    clean.trim().to_string()
}
