//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Only the fields the quiz needs are modelled; everything else in the
//! response is ignored.
//!
//! - **Request**: `{"contents":[{"parts":[{"text": prompt}]}]}`
//! - **Response**: `candidates[].content.parts[].text`
//! - **Error body**: `{"error":{"code":…,"message":…,"status":…}}`

use serde::{Deserialize, Serialize};

/// Longest raw error body echoed back when it is not the usual JSON shape
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Request body
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single-turn request carrying one text prompt
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: None,
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate.
    ///
    /// Normally that is its first part; when the first part carries no text
    /// all text parts are concatenated. `None` if nothing non-blank is left.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;

        if let Some(first) = parts.first().and_then(|p| p.text.as_deref())
            && !first.trim().is_empty()
        {
            return Some(first.to_string());
        }

        let joined: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if joined.trim().is_empty() {
            None
        } else {
            Some(joined)
        }
    }

    /// Why the prompt was refused, if it was
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorDetail {
    message: String,
    status: Option<String>,
}

/// Human-readable message from an error response body
pub fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => match parsed.error.status {
            Some(status) => format!("{} ({})", parsed.error.message, status),
            None => parsed.error.message,
        },
        Err(_) => body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect(),
    }
}
