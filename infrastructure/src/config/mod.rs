//! Configuration file loading for interview-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUIZ_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./quiz.toml` or `./.quiz.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/interview-quiz/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    API_KEY_ENV, ConfigValidationError, DEFAULT_ENDPOINT, FileConfig, FileGeminiConfig,
    FileOutputConfig, FileQuizConfig, MAX_QUESTION_COUNT,
};
pub use loader::ConfigLoader;
