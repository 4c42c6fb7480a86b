//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the application,
//! allowing for type-safe error handling throughout the codebase.

pub use crate::config::ConfigError;
pub use crate::unsplash::UnsplashError;
pub use crate::zenquotes::QuoteError;

/// Main application error type.
///
/// This is the top-level error type that encompasses all error types
/// in the application. It uses `thiserror` for automatic error derivation
/// and conversion.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Quote service errors
    #[error("Quote service error: {0}")]
    #[allow(dead_code)]
    Quote(#[from] QuoteError),

    /// Photo service errors
    #[error("Photo service error: {0}")]
    #[allow(dead_code)]
    Unsplash(#[from] UnsplashError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let config_error = ConfigError::HomeDirectoryNotFound;
        let app_error: AppError = config_error.into();
        assert!(matches!(app_error, AppError::Config(_)));
        assert!(app_error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_app_error_from_quote_error() {
        let quote_error = QuoteError::MalformedResponse("missing fields".to_string());
        let app_error: AppError = quote_error.into();
        assert!(matches!(app_error, AppError::Quote(_)));
        assert!(app_error.to_string().contains("Quote service error"));
    }

    #[test]
    fn test_app_error_from_unsplash_error() {
        let unsplash_error = UnsplashError::MissingAccessKey;
        let app_error: AppError = unsplash_error.into();
        assert!(matches!(app_error, AppError::Unsplash(_)));
        assert!(app_error.to_string().contains("Photo service error"));
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
        assert!(app_error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_app_error_logger() {
        let error = AppError::Logger("already initialized".to_string());
        assert!(error.to_string().contains("Logger error"));
    }
}
