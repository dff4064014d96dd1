//! Unified error type for content retrieval.

use thiserror::Error;

/// Error produced by a content source.
///
/// Each variant carries a static `source_id` identifying which fetch path
/// produced it (`"hn-html"`, `"hn-search"`, `"hn-item"`, ...). Listing-page
/// errors from a non-final strategy are not surfaced to callers; they trigger
/// the next strategy in the chain instead.
#[derive(Debug, Error)]
pub enum SourceError {
    /// A network-level failure (DNS resolution, connection refused, body read).
    #[error("[{source_id}] network error: {detail}")]
    Network {
        /// Fetch path that produced the error.
        source_id: &'static str,
        /// Error details.
        detail: String,
    },

    /// The request exceeded the client timeout.
    #[error("[{source_id}] request timeout: {detail}")]
    Timeout {
        /// Fetch path that produced the error.
        source_id: &'static str,
        /// Error details.
        detail: String,
    },

    /// The endpoint answered with a non-success HTTP status.
    #[error("[{source_id}] unexpected HTTP status {status}")]
    Status {
        /// Fetch path that produced the error.
        source_id: &'static str,
        /// HTTP status code.
        status: u16,
    },

    /// The response body did not match the expected shape.
    #[error("[{source_id}] parse error: {detail}")]
    Parse {
        /// Fetch path that produced the error.
        source_id: &'static str,
        /// Details about the parse failure.
        detail: String,
    },
}

/// Convenience alias for `Result<T, SourceError>`.
pub type Result<T> = std::result::Result<T, SourceError>;
