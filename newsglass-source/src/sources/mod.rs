//! Concrete content sources.

mod algolia;
mod html;
pub(crate) mod item;
pub(crate) mod summary;

pub use algolia::AlgoliaFrontPage;
pub use html::HtmlFrontPage;
pub use item::DELETED_COMMENT_PLACEHOLDER;

use chrono::DateTime;

/// Base URL for the rendered HN site.
pub(crate) const HN_BASE: &str = "https://news.ycombinator.com/";

/// Join text fragments and collapse whitespace runs to single spaces.
pub(crate) fn collapse_text<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let joined: String = parts.into_iter().collect();
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render an RFC 3339 timestamp as a calendar date, `None` if unparseable.
pub(crate) fn format_date(created_at: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(created_at)
        .ok()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
}

/// Resolve a story link against the HN base.
///
/// Link-less and malformed hrefs fall back to the item permalink, so every
/// story always has a fetchable URL.
pub(crate) fn resolve_story_url(id: &str, href: &str) -> String {
    let href = href.trim();
    if !href.is_empty() {
        if let Ok(base) = url::Url::parse(HN_BASE) {
            if let Ok(resolved) = base.join(href) {
                return resolved.to_string();
            }
        }
    }
    format!("{HN_BASE}item?id={id}")
}

/// First run of ASCII digits in `text`, parsed.
pub(crate) fn first_number(text: &str) -> Option<u32> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}
