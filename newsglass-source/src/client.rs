//! The production content source.

use async_trait::async_trait;
use reqwest::Client;

use crate::chain::FrontPageChain;
use crate::error::Result;
use crate::http::create_http_client;
use crate::sources::{AlgoliaFrontPage, HtmlFrontPage, item, summary};
use crate::traits::{ContentSource, FrontPageStrategy};
use crate::types::{CommentNode, Story};

/// Hacker News client: HTML scrape first, search API as the fallback,
/// item API for comment trees, arbitrary-URL fetch for page summaries.
pub struct HnClient {
    client: Client,
    front_page: FrontPageChain,
}

impl HnClient {
    pub fn new() -> Self {
        let client = create_http_client();
        let strategies: Vec<Box<dyn FrontPageStrategy>> = vec![
            Box::new(HtmlFrontPage::new(client.clone())),
            Box::new(AlgoliaFrontPage::new(client.clone())),
        ];
        Self {
            client,
            front_page: FrontPageChain::new(strategies),
        }
    }
}

impl Default for HnClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentSource for HnClient {
    async fn front_page(&self, page: u32) -> Result<Vec<Story>> {
        self.front_page.fetch(page).await
    }

    async fn comments(&self, story_id: &str) -> Result<Vec<CommentNode>> {
        item::fetch_comment_tree(&self.client, story_id).await
    }

    async fn page_summary(&self, story: &Story) -> String {
        summary::fetch_page_summary(&self.client, story).await
    }
}
