//! Error types for the API client.

/// Errors from the API client layer.
///
/// Always delivered to callers wrapped in
/// [`ApiOperation::Failure`](crate::operation::ApiOperation::Failure).
/// The variants exist for logging and diagnostics; callers are expected to
/// treat every failure as a single error state rather than branching on
/// the kind.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, or an
    /// unreadable response body).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A wire record could not be translated into its domain model.
    #[error("failed to decode API response: {0}")]
    Decode(#[from] DecodeError),
}

/// Failures translating a wire record into a domain model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A cross-reference URL did not end in a positive integer ID.
    #[error("resource URL has no trailing integer id: {url}")]
    ResourceUrl { url: String },

    /// An episode code contained no digits to decode season and episode
    /// numbers from.
    #[error("episode code has no digits: {code}")]
    EpisodeCode { code: String },
}
