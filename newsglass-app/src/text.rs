//! Character-budget text normalization.
//!
//! All truncation is character-based, never byte-based — labels carry arrow
//! glyphs and scraped unicode, and a byte slice could split a code point.

use crate::layout::MAX_ITEM_CHARS;

const ELLIPSIS: &str = "...";

/// Truncate to `max_chars` characters, ellipsis included in the budget.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= ELLIPSIS.len() {
        return text.chars().take(max_chars).collect();
    }
    let mut out: String = text.chars().take(max_chars - ELLIPSIS.len()).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Collapse whitespace runs to single spaces, trim, and clamp to `max_chars`.
///
/// Pure and idempotent; empty input yields empty output.
pub fn normalize(text: &str, max_chars: usize) -> String {
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&cleaned, max_chars)
}

/// [`normalize`] at the list-label budget.
pub fn clamp_label(text: &str) -> String {
    normalize(text, MAX_ITEM_CHARS)
}

/// Clamp to the label budget without collapsing internal whitespace.
///
/// Comment labels carry text already normalized upstream from HTML, where the
/// remaining spacing is meaningful.
pub fn clamp_label_loose(text: &str) -> String {
    truncate_chars(text, MAX_ITEM_CHARS)
}
