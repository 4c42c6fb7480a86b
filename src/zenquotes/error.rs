//! Quote service-specific error types.

/// Errors that can occur while fetching a quotation.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Service returned a non-success status
    #[error("Quote service returned status {0}")]
    Status(u16),

    /// Response body did not match the expected shape
    #[error("Malformed quote response: {0}")]
    MalformedResponse(String),
}
