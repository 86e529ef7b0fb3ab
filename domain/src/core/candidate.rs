//! Candidate name value object

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// The name of the person taking a quiz (Value Object)
///
/// Always non-empty; surrounding whitespace is removed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CandidateName(String);

impl CandidateName {
    /// Try to create a candidate name, returning None if it is blank
    pub fn try_new(name: impl AsRef<str>) -> Option<Self> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Get the name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CandidateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CandidateName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value).ok_or(DomainError::EmptyCandidateName)
    }
}

impl std::str::FromStr for CandidateName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s).ok_or(DomainError::EmptyCandidateName)
    }
}

impl From<CandidateName> for String {
    fn from(name: CandidateName) -> Self {
        name.0
    }
}
