//! Comment-tree retrieval and flattening.

use reqwest::Client;
use scraper::Html;
use serde::Deserialize;

use crate::error::Result;
use crate::http::{fetch_text, parse_json};
use crate::sources::{collapse_text, format_date};
use crate::types::CommentNode;

const SOURCE_ID: &str = "hn-item";

pub(crate) const ITEM_API: &str = "https://hn.algolia.com/api/v1/items";

/// Label for comments whose body was deleted or scrubbed.
///
/// Deleted comments keep their slot so counts and positions stay stable.
pub const DELETED_COMMENT_PLACEHOLDER: &str = "[comment deleted]";

/// The item API reports ids as numbers, but deleted/legacy nodes have been
/// seen with string ids.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ItemId {
    Number(u64),
    Text(String),
}

impl ItemId {
    fn into_string(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ItemNode {
    id: Option<ItemId>,
    author: Option<String>,
    text: Option<String>,
    created_at: Option<String>,
    #[serde(default)]
    children: Vec<ItemNode>,
}

/// Convert a comment's HTML body to collapsed plain text.
pub(crate) fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    collapse_text(fragment.root_element().text())
}

/// Flatten the tree in pre-order, children in document order.
///
/// Iterative on an explicit `(node, depth)` stack; depth is a computed value
/// here, not call-stack state, and deep threads cannot overflow.
fn flatten(roots: Vec<ItemNode>) -> Vec<CommentNode> {
    let mut comments = Vec::new();
    let mut stack: Vec<(ItemNode, usize)> =
        roots.into_iter().rev().map(|node| (node, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        let text = node.text.as_deref().map(html_to_text).unwrap_or_default();
        comments.push(CommentNode {
            id: node.id.map(ItemId::into_string).unwrap_or_default(),
            author: node.author,
            text: if text.is_empty() {
                DELETED_COMMENT_PLACEHOLDER.to_string()
            } else {
                text
            },
            age: node.created_at.as_deref().and_then(format_date),
            depth,
        });
        for child in node.children.into_iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    comments
}

/// Fetch a story's comment tree and flatten it.
pub(crate) async fn fetch_comment_tree(client: &Client, story_id: &str) -> Result<Vec<CommentNode>> {
    let url = format!("{ITEM_API}/{story_id}");
    let body = fetch_text(client, &url, SOURCE_ID).await?;
    let root: ItemNode = parse_json(&body, SOURCE_ID)?;
    Ok(flatten(root.children))
}
