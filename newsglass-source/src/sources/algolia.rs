//! Fallback listing source: the Algolia HN search API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::Result;
use crate::http::{fetch_text, parse_json};
use crate::sources::{format_date, resolve_story_url};
use crate::traits::FrontPageStrategy;
use crate::types::Story;

const SOURCE_ID: &str = "hn-search";

pub(crate) const SEARCH_API: &str = "https://hn.algolia.com/api/v1/search";
/// Matches what one rendered HN page holds.
const HITS_PER_PAGE: u32 = 30;

/// Search-API listing strategy, querying the front-page tag.
pub struct AlgoliaFrontPage {
    client: Client,
}

impl AlgoliaFrontPage {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// The API pages from 0, the UI from 1.
pub(crate) fn page_offset(page: u32) -> u32 {
    page.saturating_sub(1)
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "objectID")]
    object_id: String,
    title: Option<String>,
    url: Option<String>,
    points: Option<u32>,
    author: Option<String>,
    num_comments: Option<u32>,
    created_at: Option<String>,
}

fn hit_to_story(hit: SearchHit) -> Story {
    let title = hit
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or("Untitled")
        .to_string();
    let url = resolve_story_url(&hit.object_id, hit.url.as_deref().unwrap_or_default());

    Story {
        id: hit.object_id,
        title,
        url,
        score: hit.points,
        author: hit.author,
        comment_count: hit.num_comments,
        age: hit.created_at.as_deref().and_then(format_date),
    }
}

#[async_trait]
impl FrontPageStrategy for AlgoliaFrontPage {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn fetch_page(&self, page: u32) -> Result<Vec<Story>> {
        let url = format!(
            "{SEARCH_API}?tags=front_page&page={}&hitsPerPage={HITS_PER_PAGE}",
            page_offset(page)
        );
        let body = fetch_text(&self.client, &url, SOURCE_ID).await?;
        let response: SearchResponse = parse_json(&body, SOURCE_ID)?;
        Ok(response.hits.into_iter().map(hit_to_story).collect())
    }
}
