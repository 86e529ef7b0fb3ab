//! Error types for the Gemini adapter

use quiz_application::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No API key configured (set GEMINI_API_KEY or gemini.api_key)")]
    MissingApiKey,

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Response contained no text")]
    EmptyResponse,
}

impl From<GeminiError> for GatewayError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::MissingApiKey => GatewayError::InvalidCredentials(err.to_string()),
            GeminiError::Api {
                status: 401 | 403,
                message,
            } => GatewayError::InvalidCredentials(message),
            GeminiError::Api {
                status: 429,
                message,
            } => GatewayError::QuotaExceeded(message),
            GeminiError::Api { .. } => GatewayError::RequestFailed(err.to_string()),
            GeminiError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            GeminiError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            GeminiError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            GeminiError::Parse(e) => GatewayError::Other(format!("Malformed response: {}", e)),
            GeminiError::EmptyResponse => GatewayError::EmptyResponse,
        }
    }
}
