//! Domain records shared across fetch paths.

use serde::{Deserialize, Serialize};

/// A single front-page story.
///
/// Identity is the `id` field. Stories are immutable once fetched; a page of
/// stories is replaced wholesale on each load, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// HN item id.
    pub id: String,
    /// Story title, never empty (`"Untitled"` when the source omits it).
    pub title: String,
    /// External link, or the HN item permalink for link-less stories.
    pub url: String,
    /// Points, when the source reports them.
    pub score: Option<u32>,
    /// Submitter username.
    pub author: Option<String>,
    /// Number of comments.
    pub comment_count: Option<u32>,
    /// Human-readable age ("3 hours ago" from HTML, "2026-08-21" from the API).
    pub age: Option<String>,
}

/// One comment, flattened out of the item tree.
///
/// Produced in pre-order (parent before children). `depth` is the nesting
/// level; rendering caps the indent but storage does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentNode {
    /// HN item id.
    pub id: String,
    /// Comment author.
    pub author: Option<String>,
    /// Plain-text body; deleted comments carry a placeholder, never empty.
    pub text: String,
    /// Human-readable age.
    pub age: Option<String>,
    /// Nesting level, 0 for top-level comments.
    pub depth: usize,
}
