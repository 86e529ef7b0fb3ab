//! Quiz configuration from TOML (`[quiz]` section)

use quiz_domain::{DEFAULT_QUESTION_COUNT, Topic};
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `question_count`
pub const MAX_QUESTION_COUNT: usize = 50;

/// Raw quiz configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Questions requested per run
    pub question_count: usize,
    /// Topic used when none is given on the command line
    pub default_topic: Option<Topic>,
    /// Fall back to the built-in question bank when generation fails
    pub fallback: bool,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            default_topic: None,
            fallback: true,
        }
    }
}
