//! Gemini API configuration from TOML (`[gemini]` section)

use quiz_domain::Model;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
/// Read when no key is configured
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Raw Gemini configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    pub model: Model,
    /// Base URL; `/models/{model}:generateContent` is appended
    pub endpoint: String,
    pub api_key: Option<String>,
    /// Timeout in seconds for API calls
    pub timeout_seconds: u64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl FileGeminiConfig {
    /// The configured key, or `GEMINI_API_KEY` from the environment
    pub fn resolve_api_key(&self) -> Option<String> {
        pick_api_key(self.api_key.as_deref(), std::env::var(API_KEY_ENV).ok())
    }
}

fn pick_api_key(configured: Option<&str>, from_env: Option<String>) -> Option<String> {
    configured
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .or_else(|| from_env.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_key_wins() {
        assert_eq!(
            pick_api_key(Some("file-key"), Some("env-key".to_string())),
            Some("file-key".to_string())
        );
    }

    #[test]
    fn test_env_key_used_when_blank() {
        assert_eq!(
            pick_api_key(Some("  "), Some(" env-key ".to_string())),
            Some("env-key".to_string())
        );
        assert_eq!(pick_api_key(None, Some(String::new())), None);
        assert_eq!(pick_api_key(None, None), None);
    }
}
