//! Gemini session.
//!
//! Provides [`GeminiSession`] which implements [`LlmSession`] on top of the
//! stateless `generateContent` endpoint. Every `send` is an independent
//! single-turn request.

use crate::gemini::error::{GeminiError, Result};
use crate::gemini::protocol::{GenerateContentRequest, GenerateContentResponse, api_error_message};
use async_trait::async_trait;
use quiz_application::{GatewayError, LlmSession};
use quiz_domain::Model;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// A model bound to an HTTP client and credentials
pub struct GeminiSession {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: Model,
}

impl GeminiSession {
    pub fn new(client: reqwest::Client, endpoint: String, api_key: String, model: Model) -> Self {
        Self {
            client,
            endpoint,
            api_key,
            model,
        }
    }

    /// `{endpoint}/models/{model}:generateContent`
    pub fn url(&self) -> String {
        generate_content_url(&self.endpoint, &self.model)
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .post(self.url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("{} replied {} ({} bytes)", self.model, status, body.len());

        if !status.is_success() {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        if let Some(reason) = parsed.block_reason() {
            warn!("Prompt was blocked: {}", reason);
        }
        parsed.text().ok_or(GeminiError::EmptyResponse)
    }
}

pub(crate) fn generate_content_url(endpoint: &str, model: &Model) -> String {
    format!(
        "{}/models/{}:generateContent",
        endpoint.trim_end_matches('/'),
        model.as_str()
    )
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> std::result::Result<String, GatewayError> {
        self.generate(content).await.map_err(GatewayError::from)
    }
}
