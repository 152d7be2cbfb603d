/*!
 * Error types for the mtbridge application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when calling a translation backend
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The backend does not know the requested model
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// The backend answered without a single candidate
    #[error("Backend returned no translation candidates for model {0}")]
    EmptyResponse(String),
}

/// Errors that can occur while handling a translation request
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The (source, destination) combination is not on the allow-list
    #[error("Unsupported language pair: '{source_language}' -> '{destination_language}'")]
    UnsupportedLanguagePair {
        source_language: String,
        destination_language: String,
    },

    /// The result record could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error from the backend
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl From<serde_json::Error> for TranslationError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

/// Errors raised while setting the application up
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

}

// Utility functions for error conversion

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
