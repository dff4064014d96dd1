//! Shared HTTP plumbing.
//!
//! One configured client per [`HnClient`](crate::HnClient); every fetch path
//! funnels through [`fetch_text`] so logging and error mapping stay uniform.
//! The timeouts bound how long a navigation can stay in flight — there is no
//! retry layer here, resilience comes from the strategy chain.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{Result, SourceError};

/// Connect timeout (seconds).
const CONNECT_TIMEOUT_SECS: u64 = 10;
/// Full-request timeout (seconds).
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create the HTTP client used by all fetch paths.
#[allow(clippy::expect_used)]
pub(crate) fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .expect("Failed to create HTTP client")
}

/// Perform a GET request and return the response body.
///
/// Non-success statuses map to [`SourceError::Status`]; transport failures map
/// to [`SourceError::Timeout`] or [`SourceError::Network`].
pub(crate) async fn fetch_text(client: &Client, url: &str, source_id: &'static str) -> Result<String> {
    log::debug!("[{source_id}] GET {url}");

    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            SourceError::Timeout {
                source_id,
                detail: e.to_string(),
            }
        } else {
            SourceError::Network {
                source_id,
                detail: e.to_string(),
            }
        }
    })?;

    let status = response.status();
    log::debug!("[{source_id}] response status: {status}");

    if !status.is_success() {
        return Err(SourceError::Status {
            source_id,
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| SourceError::Network {
        source_id,
        detail: format!("failed to read response body: {e}"),
    })
}

/// Parse a JSON response body.
pub(crate) fn parse_json<T>(body: &str, source_id: &'static str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("[{source_id}] JSON parse failed: {e}");
        SourceError::Parse {
            source_id,
            detail: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo> = parse_json(r#"{"x":42}"#, "test");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo> = parse_json("not json", "test");
        assert!(
            matches!(&result, Err(SourceError::Parse { source_id: "test", .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
