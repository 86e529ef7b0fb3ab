//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gemini;
mod output;
mod quiz;

pub use gemini::{API_KEY_ENV, DEFAULT_ENDPOINT, FileGeminiConfig};
pub use output::FileOutputConfig;
pub use quiz::{FileQuizConfig, MAX_QUESTION_COUNT};

use quiz_application::BehaviorConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("question_count must be between 1 and {max}, got {count}")]
    InvalidQuestionCount { count: usize, max: usize },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub gemini: FileGeminiConfig,
    pub quiz: FileQuizConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.gemini.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.gemini.model.as_str().trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        let count = self.quiz.question_count;
        if !(1..=MAX_QUESTION_COUNT).contains(&count) {
            return Err(ConfigValidationError::InvalidQuestionCount {
                count,
                max: MAX_QUESTION_COUNT,
            });
        }

        Ok(())
    }

    /// Use case behavior derived from this configuration
    pub fn behavior_config(&self) -> BehaviorConfig {
        let config = BehaviorConfig::with_timeout_seconds(self.gemini.timeout_seconds)
            .with_question_count(self.quiz.question_count);
        if self.quiz.fallback {
            config
        } else {
            config.without_fallback()
        }
    }

    /// Copy safe to print: the API key is masked
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.gemini.api_key.is_some() {
            copy.gemini.api_key = Some("********".to_string());
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{Model, Topic};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
model = "gemini-2.5-pro"
api_key = "secret"
timeout_seconds = 30

[quiz]
question_count = 10
default_topic = "dsa"
fallback = false

[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.model, Model::Gemini25Pro);
        assert_eq!(config.gemini.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.gemini.api_key.as_deref(), Some("secret"));
        assert_eq!(config.gemini.timeout_seconds, 30);
        assert_eq!(config.quiz.question_count, 10);
        assert_eq!(config.quiz.default_topic, Some(Topic::DataStructures));
        assert!(!config.quiz.fallback);
        assert!(!config.output.color);
        assert!(config.output.show_progress);
    }

    #[test]
    fn test_deserialize_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config: FileConfig = toml::from_str("[gemini]\ntimeout_seconds = 0").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_empty_model_name() {
        let config: FileConfig = toml::from_str("[gemini]\nmodel = \"  \"").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_validate_question_count() {
        for count in [0, 51] {
            let config: FileConfig =
                toml::from_str(&format!("[quiz]\nquestion_count = {}", count)).unwrap();
            assert_eq!(
                config.validate(),
                Err(ConfigValidationError::InvalidQuestionCount { count, max: 50 })
            );
        }
    }

    #[test]
    fn test_behavior_config() {
        let config: FileConfig =
            toml::from_str("[gemini]\ntimeout_seconds = 5\n[quiz]\nquestion_count = 3\nfallback = false")
                .unwrap();
        let behavior = config.behavior_config();
        assert_eq!(behavior.timeout, Some(Duration::from_secs(5)));
        assert_eq!(behavior.question_count, 3);
        assert!(!behavior.fallback);
    }

    #[test]
    fn test_redacted() {
        let config: FileConfig = toml::from_str("[gemini]\napi_key = \"secret\"").unwrap();
        let shown = toml::to_string(&config.redacted()).unwrap();
        assert!(!shown.contains("secret"));
        assert!(shown.contains("********"));
        assert_eq!(FileConfig::default().redacted().gemini.api_key, None);
    }
}
