//! Quiz topic value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::error::DomainError;

/// Technical domain a quiz is about (Value Object)
///
/// The listed topics are the ones offered by default; any other non-empty
/// name is accepted as a custom topic and passed to the generator verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Topic {
    #[default]
    JavaScript,
    Python,
    Java,
    Cpp,
    CSharp,
    DataStructures,
    TypeScript,
    SscCgl,
    Php,
    Swift,
    Custom(String),
}

impl Topic {
    /// Display name, also used as the key of the static question bank
    pub fn as_str(&self) -> &str {
        match self {
            Topic::JavaScript => "JavaScript",
            Topic::Python => "Python",
            Topic::Java => "Java",
            Topic::Cpp => "C++",
            Topic::CSharp => "C#",
            Topic::DataStructures => "Data Structure Algorithm",
            Topic::TypeScript => "TypeScript",
            Topic::SscCgl => "SSC CGL",
            Topic::Php => "PHP",
            Topic::Swift => "Swift",
            Topic::Custom(s) => s,
        }
    }

    /// Topics offered by default, in menu order
    pub fn catalog() -> Vec<Topic> {
        vec![
            Topic::JavaScript,
            Topic::Python,
            Topic::Java,
            Topic::Cpp,
            Topic::CSharp,
            Topic::DataStructures,
            Topic::TypeScript,
            Topic::SscCgl,
            Topic::Php,
            Topic::Swift,
        ]
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Topic::Custom(_))
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Topic {
    type Err = DomainError;

    /// Case-insensitive, with common short forms (`js`, `dsa`, `cpp`, …)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyTopic);
        }
        Ok(match trimmed.to_lowercase().as_str() {
            "javascript" | "js" => Topic::JavaScript,
            "python" | "py" => Topic::Python,
            "java" => Topic::Java,
            "c++" | "cpp" => Topic::Cpp,
            "c#" | "csharp" => Topic::CSharp,
            "data structure algorithm" | "data structures" | "dsa" => Topic::DataStructures,
            "typescript" | "ts" => Topic::TypeScript,
            "ssc cgl" | "ssc-cgl" => Topic::SscCgl,
            "php" => Topic::Php,
            "swift" => Topic::Swift,
            _ => Topic::Custom(trimmed.to_string()),
        })
    }
}

impl Serialize for Topic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Topic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_roundtrip() {
        for topic in Topic::catalog() {
            let parsed: Topic = topic.to_string().parse().unwrap();
            assert_eq!(topic, parsed);
            assert!(!parsed.is_custom());
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("dsa".parse::<Topic>().unwrap(), Topic::DataStructures);
        assert_eq!(" JS ".parse::<Topic>().unwrap(), Topic::JavaScript);
        assert_eq!("cpp".parse::<Topic>().unwrap(), Topic::Cpp);
    }

    #[test]
    fn test_custom_topic() {
        let topic: Topic = " Kubernetes ".parse().unwrap();
        assert_eq!(topic, Topic::Custom("Kubernetes".to_string()));
        assert_eq!(topic.to_string(), "Kubernetes");
    }

    #[test]
    fn test_empty_topic_rejected() {
        assert_eq!("  ".parse::<Topic>(), Err(DomainError::EmptyTopic));
        assert!(serde_json::from_str::<Topic>("\"\"").is_err());
    }
}
