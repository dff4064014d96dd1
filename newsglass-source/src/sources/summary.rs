//! Best-effort summary of a story's external page.
//!
//! Runs opportunistically next to the comment fetch, so it must never raise:
//! any failure — network, non-HTML payload, parse — degrades to an empty
//! string and at most a debug log line.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::error::{Result, SourceError};
use crate::sources::collapse_text;
use crate::types::Story;

const SOURCE_ID: &str = "page-summary";

#[allow(clippy::expect_used)]
static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("static selector"));
#[allow(clippy::expect_used)]
static META_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="description"]"#).expect("static selector"));

/// Extract up to two summary lines from a fetched page.
pub(crate) fn summarize_html(html: &str) -> String {
    let doc = Html::parse_document(html);

    let title = doc
        .select(&TITLE)
        .next()
        .map(|t| collapse_text(t.text()))
        .unwrap_or_default();
    let description = doc
        .select(&META_DESCRIPTION)
        .next()
        .and_then(|m| m.value().attr("content"))
        .map(str::trim)
        .unwrap_or_default();

    let mut lines = Vec::new();
    if !title.is_empty() {
        lines.push(format!("Page: {title}"));
    }
    if !description.is_empty() {
        lines.push(description.to_string());
    }
    lines.join("\n")
}

async fn try_fetch_summary(client: &Client, story: &Story) -> Result<String> {
    let response = client
        .get(&story.url)
        .send()
        .await
        .map_err(|e| SourceError::Network {
            source_id: SOURCE_ID,
            detail: e.to_string(),
        })?;

    if !response.status().is_success() {
        return Ok(String::new());
    }
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if !content_type.contains("text/html") {
        return Ok(String::new());
    }

    let html = response.text().await.map_err(|e| SourceError::Network {
        source_id: SOURCE_ID,
        detail: format!("failed to read response body: {e}"),
    })?;
    Ok(summarize_html(&html))
}

/// Fetch the story page summary, swallowing every failure into `""`.
pub(crate) async fn fetch_page_summary(client: &Client, story: &Story) -> String {
    match try_fetch_summary(client, story).await {
        Ok(summary) => summary,
        Err(e) => {
            log::debug!("[{SOURCE_ID}] skipped for {}: {e}", story.url);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_description_make_two_lines() {
        let html = r#"
            <html><head>
              <title>  An   Example
                 Page </title>
              <meta name="description" content=" A tidy description. ">
            </head><body></body></html>
        "#;
        assert_eq!(
            summarize_html(html),
            "Page: An Example Page\nA tidy description."
        );
    }

    #[test]
    fn title_alone_is_one_line() {
        let html = "<html><head><title>Only Title</title></head></html>";
        assert_eq!(summarize_html(html), "Page: Only Title");
    }

    #[test]
    fn neither_yields_empty() {
        assert_eq!(summarize_html("<html><body><p>hi</p></body></html>"), "");
    }

    #[test]
    fn other_meta_tags_are_ignored() {
        let html = r#"
            <html><head>
              <meta name="keywords" content="a,b,c">
              <meta name="description" content="real one">
            </head></html>
        "#;
        assert_eq!(summarize_html(html), "real one");
    }
}
