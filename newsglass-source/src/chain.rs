//! Ordered fallback over listing strategies.

use crate::error::{Result, SourceError};
use crate::traits::FrontPageStrategy;
use crate::types::Story;

/// Strategy chain: the first strategy returning a non-empty page wins.
///
/// A non-final strategy failing (or coming back empty — a scrape that parses
/// zero rows usually means the markup changed) falls through to the next one.
/// The final strategy's outcome is returned as-is, so a genuinely empty feed
/// stays `Ok(vec![])` and a dead API propagates its error.
pub struct FrontPageChain {
    strategies: Vec<Box<dyn FrontPageStrategy>>,
}

impl FrontPageChain {
    /// Build a chain from strategies in fallback order.
    pub fn new(strategies: Vec<Box<dyn FrontPageStrategy>>) -> Self {
        Self { strategies }
    }

    /// Fetch one listing page through the chain.
    pub async fn fetch(&self, page: u32) -> Result<Vec<Story>> {
        for (i, strategy) in self.strategies.iter().enumerate() {
            let is_last = i + 1 == self.strategies.len();
            match strategy.fetch_page(page).await {
                Ok(stories) if !stories.is_empty() => {
                    log::debug!("[{}] {} stories for page {page}", strategy.id(), stories.len());
                    return Ok(stories);
                }
                Ok(stories) => {
                    if is_last {
                        return Ok(stories);
                    }
                    log::debug!("[{}] empty page {page}, trying next source", strategy.id());
                }
                Err(e) => {
                    if is_last {
                        return Err(e);
                    }
                    log::warn!("[{}] page {page} fetch failed, falling back: {e}", strategy.id());
                }
            }
        }

        Err(SourceError::Network {
            source_id: "front-page",
            detail: "no fetch strategies configured".to_string(),
        })
    }
}
