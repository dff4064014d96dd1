//! Seams between the navigation core and the network.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CommentNode, Story};

/// Everything the navigation controller needs from the content side.
///
/// [`HnClient`](crate::HnClient) is the production implementation; tests drive
/// the controller with scripted fakes.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch one front-page worth of stories (1-indexed page).
    ///
    /// Returns an ordered, possibly empty sequence. An empty page is a valid
    /// result, not an error.
    async fn front_page(&self, page: u32) -> Result<Vec<Story>>;

    /// Fetch a story's comment tree, flattened in pre-order with depth.
    async fn comments(&self, story_id: &str) -> Result<Vec<CommentNode>>;

    /// Best-effort title/description of the story's external page.
    ///
    /// Never fails; any problem yields an empty string. Runs opportunistically
    /// alongside the comment fetch.
    async fn page_summary(&self, story: &Story) -> String;
}

#[async_trait]
impl<T: ContentSource + ?Sized> ContentSource for std::sync::Arc<T> {
    async fn front_page(&self, page: u32) -> Result<Vec<Story>> {
        (**self).front_page(page).await
    }

    async fn comments(&self, story_id: &str) -> Result<Vec<CommentNode>> {
        (**self).comments(story_id).await
    }

    async fn page_summary(&self, story: &Story) -> String {
        (**self).page_summary(story).await
    }
}

/// One way of retrieving a listing page.
///
/// Strategies are tried in order by [`FrontPageChain`](crate::FrontPageChain);
/// each keeps its own field mapping so a markup or schema change in one source
/// does not ripple into the others.
#[async_trait]
pub trait FrontPageStrategy: Send + Sync {
    /// Strategy identifier, used in logs and error labels.
    fn id(&self) -> &'static str;

    /// Fetch the stories for a 1-indexed page.
    async fn fetch_page(&self, page: u32) -> Result<Vec<Story>>;
}
