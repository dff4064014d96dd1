//! # newsglass-source
//!
//! Content retrieval for the newsglass reader: Hacker News stories, comment
//! trees, and best-effort summaries of linked pages.
//!
//! ## Retrieval model
//!
//! Listing pages go through a **strategy chain**: the rendered HTML front page
//! is scraped first (it mirrors what a human sees and carries real ages), and
//! the Algolia search API takes over when the scrape fails or parses zero rows
//! (markup change, block, outage). Only the final strategy's failure reaches
//! the caller.
//!
//! Comment trees come from the Algolia item API and are flattened in pre-order
//! with an explicit depth per node. Deleted comments keep their slot with a
//! placeholder body so counts and positions stay stable.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use newsglass_source::{ContentSource, HnClient};
//!
//! # async fn example() -> newsglass_source::Result<()> {
//! let client = HnClient::new();
//! let stories = client.front_page(1).await?;
//! let comments = client.comments(&stories[0].id).await?;
//! let summary = client.page_summary(&stories[0]).await; // never fails
//! # Ok(())
//! # }
//! ```
//!
//! Consumers that need to stub the network implement [`ContentSource`]
//! directly.

mod chain;
mod client;
mod error;
mod http;
mod sources;
mod traits;
mod types;

pub use chain::FrontPageChain;
pub use client::HnClient;
pub use error::{Result, SourceError};
pub use sources::{AlgoliaFrontPage, DELETED_COMMENT_PLACEHOLDER, HtmlFrontPage};
pub use traits::{ContentSource, FrontPageStrategy};
pub use types::{CommentNode, Story};
