//! Shared text helpers.

/// Truncates to at most `max_chars` characters, appending `...` when cut.
///
/// Counts characters rather than bytes so multi-byte (e.g. Bengali) text
/// is never split inside a code point.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}...")
    }
}
