//! Where a question batch came from

use serde::{Deserialize, Serialize};

/// Origin of the questions in a run (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionSource {
    /// Parsed from a model response
    Generated,
    /// Static bank, requested explicitly
    Offline,
    /// Static bank, because generation failed
    Fallback { reason: String },
}

impl QuestionSource {
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self::Fallback {
            reason: reason.into(),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated)
    }
}

impl std::fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generated => write!(f, "generated"),
            Self::Offline => write!(f, "offline question bank"),
            Self::Fallback { reason } => write!(f, "fallback question bank ({})", reason),
        }
    }
}
