//! Primary listing source: scraping the rendered HN front page.
//!
//! Scraping mirrors what a human sees and carries timestamp-accurate ages;
//! the search API is a structural fallback, not a performance optimization.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::error::Result;
use crate::http::fetch_text;
use crate::sources::{HN_BASE, collapse_text, first_number, resolve_story_url};
use crate::traits::FrontPageStrategy;
use crate::types::Story;

const SOURCE_ID: &str = "hn-html";

struct Selectors {
    row: Selector,
    /// Title-link fallbacks, newest markup first. HN has changed this class
    /// across eras; a row matching none of them is skipped entirely.
    title_links: Vec<Selector>,
    subtext: Selector,
    score: Selector,
    user: Selector,
    age: Selector,
    anchor: Selector,
}

#[allow(clippy::expect_used)]
static SELECTORS: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    row: Selector::parse("tr.athing").expect("static selector"),
    title_links: vec![
        Selector::parse(".titleline > a").expect("static selector"),
        Selector::parse("a.storylink").expect("static selector"),
        Selector::parse("td.title a").expect("static selector"),
    ],
    subtext: Selector::parse(".subtext").expect("static selector"),
    score: Selector::parse(".score").expect("static selector"),
    user: Selector::parse(".hnuser").expect("static selector"),
    age: Selector::parse(".age").expect("static selector"),
    anchor: Selector::parse("a").expect("static selector"),
});

/// HTML-scrape listing strategy.
pub struct HtmlFrontPage {
    client: Client,
}

impl HtmlFrontPage {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn listing_url(page: u32) -> String {
    if page > 1 {
        format!("{HN_BASE}news?p={page}")
    } else {
        format!("{HN_BASE}news")
    }
}

/// Extract score/author/age/comment-count from a story's subtext row.
fn parse_subtext(subtext: ElementRef<'_>) -> (Option<u32>, Option<String>, Option<String>, Option<u32>) {
    let sel = &*SELECTORS;

    let score = subtext
        .select(&sel.score)
        .next()
        .and_then(|e| first_number(&collapse_text(e.text())));
    let author = subtext
        .select(&sel.user)
        .next()
        .map(|e| collapse_text(e.text()))
        .filter(|s| !s.is_empty());
    let age = subtext
        .select(&sel.age)
        .next()
        .map(|e| collapse_text(e.text()))
        .filter(|s| !s.is_empty());

    // The comments link is the anchor whose text mentions comments; a fresh
    // story shows "discuss" instead, which counts as zero.
    let mut comment_count = None;
    for anchor in subtext.select(&sel.anchor) {
        let text = collapse_text(anchor.text()).to_lowercase();
        if text.contains("comment") || text.contains("discuss") {
            comment_count = Some(first_number(&text).unwrap_or(0));
        }
    }

    (score, author, age, comment_count)
}

/// Parse every story row out of a listing page.
///
/// Rows without a resolvable title link are dropped whole — never a
/// partially-parsed entry.
pub(crate) fn parse_listing(html: &str) -> Vec<Story> {
    let sel = &*SELECTORS;
    let doc = Html::parse_document(html);
    let mut stories = Vec::new();

    for row in doc.select(&sel.row) {
        let id = row.value().attr("id").unwrap_or_default().to_string();

        let Some(link) = sel.title_links.iter().find_map(|s| row.select(s).next()) else {
            continue;
        };
        let title = {
            let t = collapse_text(link.text());
            if t.is_empty() { "Untitled".to_string() } else { t }
        };
        let url = resolve_story_url(&id, link.value().attr("href").unwrap_or_default());

        // Metadata lives in the row right after the title row.
        let subtext = row
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .next()
            .and_then(|tr| tr.select(&sel.subtext).next());
        let (score, author, age, comment_count) =
            subtext.map(parse_subtext).unwrap_or((None, None, None, None));

        stories.push(Story {
            id,
            title,
            url,
            score,
            author,
            comment_count,
            age,
        });
    }

    stories
}

#[async_trait]
impl FrontPageStrategy for HtmlFrontPage {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn fetch_page(&self, page: u32) -> Result<Vec<Story>> {
        let body = fetch_text(&self.client, &listing_url(page), SOURCE_ID).await?;
        Ok(parse_listing(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODERN_LISTING: &str = r#"
        <html><body><table>
        <tr class="athing" id="101">
          <td class="title"><span class="titleline">
            <a href="https://example.com/rust-post">A   Rust
              Post</a>
          </span></td>
        </tr>
        <tr>
          <td class="subtext">
            <span class="score">123 points</span> by
            <a class="hnuser">alice</a>
            <span class="age">3 hours ago</span> |
            <a href="item?id=101">45&nbsp;comments</a>
          </td>
        </tr>
        <tr class="athing" id="102">
          <td class="title"><span class="titleline">
            <a href="item?id=102">Ask HN: Something</a>
          </span></td>
        </tr>
        <tr>
          <td class="subtext">
            <span class="score">5 points</span> by
            <a class="hnuser">bob</a>
            <span class="age">10 minutes ago</span> |
            <a href="item?id=102">discuss</a>
          </td>
        </tr>
        <tr class="athing" id="103">
          <td class="title"><span class="pagetop">no link here</span></td>
        </tr>
        </table></body></html>
    "#;

    #[test]
    fn parses_modern_rows() {
        let stories = parse_listing(MODERN_LISTING);
        assert_eq!(stories.len(), 2, "row without title link must be skipped");

        let first = &stories[0];
        assert_eq!(first.id, "101");
        assert_eq!(first.title, "A Rust Post");
        assert_eq!(first.url, "https://example.com/rust-post");
        assert_eq!(first.score, Some(123));
        assert_eq!(first.author.as_deref(), Some("alice"));
        assert_eq!(first.age.as_deref(), Some("3 hours ago"));
        assert_eq!(first.comment_count, Some(45));
    }

    #[test]
    fn discuss_link_counts_as_zero_comments() {
        let stories = parse_listing(MODERN_LISTING);
        assert_eq!(stories[1].comment_count, Some(0));
        assert_eq!(
            stories[1].url,
            "https://news.ycombinator.com/item?id=102"
        );
    }

    #[test]
    fn parses_storylink_era_markup() {
        let html = r#"
            <table>
            <tr class="athing" id="9">
              <td class="title"><a class="storylink" href="https://old.example.com">Old Era</a></td>
            </tr>
            </table>
        "#;
        let stories = parse_listing(html);
        assert_eq!(stories.len(), 1);
        assert_eq!(stories[0].title, "Old Era");
        assert_eq!(stories[0].url, "https://old.example.com/");
        assert_eq!(stories[0].score, None);
        assert_eq!(stories[0].comment_count, None);
    }

    #[test]
    fn empty_document_yields_no_stories() {
        assert!(parse_listing("<html><body></body></html>").is_empty());
    }

    #[test]
    fn listing_url_paging() {
        assert_eq!(listing_url(1), "https://news.ycombinator.com/news");
        assert_eq!(listing_url(3), "https://news.ycombinator.com/news?p=3");
    }
}
