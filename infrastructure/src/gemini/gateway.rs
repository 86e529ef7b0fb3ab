//! Gemini LLM Gateway implementation

use crate::config::FileGeminiConfig;
use crate::gemini::error::GeminiError;
use crate::gemini::session::GeminiSession;
use async_trait::async_trait;
use quiz_application::{GatewayError, LlmGateway, LlmSession};
use quiz_domain::Model;
use std::time::Duration;
use tracing::info;

/// LLM Gateway implementation for the Gemini REST API
pub struct GeminiGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GeminiGateway {
    /// Create a gateway. A missing key is only reported when a session is
    /// requested, so offline runs never need one.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("interview-quiz/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let endpoint = endpoint.into();
        info!("GeminiGateway initialized for {}", endpoint);

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Create a gateway from the `[gemini]` config section
    pub fn from_config(config: &FileGeminiConfig) -> Result<Self, GatewayError> {
        Self::new(
            config.endpoint.clone(),
            config.resolve_api_key(),
            Some(Duration::from_secs(config.timeout_seconds)),
        )
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        let api_key = self.api_key.clone().ok_or(GeminiError::MissingApiKey)?;
        Ok(Box::new(GeminiSession::new(
            self.client.clone(),
            self.endpoint.clone(),
            api_key,
            model.clone(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_fails_on_session() {
        let gateway = GeminiGateway::new("http://localhost:1", None, None).unwrap();
        assert!(!gateway.has_api_key());

        let err = gateway.create_session(&Model::default()).await.err().unwrap();
        assert!(matches!(err, GatewayError::InvalidCredentials(_)));
    }

    #[tokio::test]
    async fn test_session_uses_requested_model() {
        let gateway =
            GeminiGateway::new("http://localhost:1", Some("key".to_string()), None).unwrap();
        let session = gateway.create_session(&Model::Gemini25Flash).await.unwrap();
        assert_eq!(session.model(), &Model::Gemini25Flash);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_gateway_error() {
        let gateway = GeminiGateway::new(
            "http://127.0.0.1:1",
            Some("key".to_string()),
            Some(Duration::from_secs(5)),
        )
        .unwrap();
        let session = gateway.create_session(&Model::default()).await.unwrap();
        let err = session.send("hello").await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::ConnectionError(_) | GatewayError::RequestFailed(_) | GatewayError::Timeout
        ));
    }
}
