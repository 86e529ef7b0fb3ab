//! Shared utilities for use cases.
//!
//! Contains the timeout-aware send helper used by both generation and
//! assessment.

use std::time::Duration;

use tracing::debug;

use crate::ports::llm_gateway::{GatewayError, LlmSession};

/// Send a prompt, giving up after `timeout` if one is configured.
///
/// A blank response is reported as [`GatewayError::EmptyResponse`].
pub(crate) async fn send_with_timeout(
    session: &dyn LlmSession,
    prompt: &str,
    timeout: Option<Duration>,
) -> Result<String, GatewayError> {
    debug!(
        "Sending {} chars to {}",
        prompt.len(),
        session.model()
    );

    let response = match timeout {
        Some(timeout) => tokio::time::timeout(timeout, session.send(prompt))
            .await
            .map_err(|_| GatewayError::Timeout)??,
        None => session.send(prompt).await?,
    };

    if response.trim().is_empty() {
        return Err(GatewayError::EmptyResponse);
    }
    Ok(response)
}
