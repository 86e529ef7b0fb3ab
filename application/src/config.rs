//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as API timeouts and the size of a question batch.

use std::time::Duration;

use quiz_domain::DEFAULT_QUESTION_COUNT;

/// Application behavior configuration.
///
/// Controls runtime behavior of use cases like timeout limits for LLM API calls.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Maximum time to wait for an API response before timing out.
    pub timeout: Option<Duration>,
    /// Questions requested per run; parsed batches are capped at this size.
    pub question_count: usize,
    /// Whether a failed generation falls back to the static question bank.
    pub fallback: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            question_count: DEFAULT_QUESTION_COUNT,
            fallback: true,
        }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with a timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(seconds)),
            ..Self::default()
        }
    }

    pub fn with_question_count(mut self, count: usize) -> Self {
        self.question_count = count;
        self
    }

    pub fn without_fallback(mut self) -> Self {
        self.fallback = false;
        self
    }
}
