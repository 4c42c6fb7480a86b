//! Photo service-specific error types.
//!
//! Every variant here degrades to the flat-color background path; none of
//! them are surfaced to the user.

/// Errors that can occur while fetching a background photo.
#[derive(Debug, thiserror::Error)]
pub enum UnsplashError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Service returned a non-success status
    #[error("Photo service returned status {0}")]
    Status(u16),

    /// Response body did not match the expected shape
    #[error("Malformed photo response: {0}")]
    MalformedResponse(String),

    /// Response parsed but carried no full-size image URL
    #[error("Photo response did not include a full-size image URL")]
    MissingImageUrl,

    /// No usable access key was configured
    #[error("No usable photo service access key configured")]
    MissingAccessKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsplash_error_display() {
        let error = UnsplashError::Status(401);
        assert!(error.to_string().contains("401"));

        let error = UnsplashError::MissingImageUrl;
        assert!(error.to_string().contains("full-size image URL"));

        let error = UnsplashError::MissingAccessKey;
        assert!(error.to_string().contains("access key"));
    }
}
