//! JSON-backed implementation of the [`QuestionBank`] port

use quiz_application::QuestionBank;
use quiz_domain::{QuestionRecord, Topic};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

const BUILTIN_QUESTIONS: &str = include_str!("../../data/question_bank.json");

#[derive(Error, Debug)]
pub enum BankError {
    #[error("Invalid question bank: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Question bank has no table for default topic {0}")]
    MissingDefault(Topic),
}

/// Question tables keyed by topic name
///
/// Topics without a table are served the default topic's table.
#[derive(Debug, Clone)]
pub struct StaticQuestionBank {
    tables: HashMap<String, Vec<QuestionRecord>>,
    default_topic: Topic,
}

impl StaticQuestionBank {
    /// The bank shipped with the binary
    pub fn builtin() -> Result<Self, BankError> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    /// Load a bank from a JSON object of `{ "<topic>": [question, …] }`
    pub fn from_json(json: &str) -> Result<Self, BankError> {
        let tables: HashMap<String, Vec<QuestionRecord>> = serde_json::from_str(json)?;
        let default_topic = Topic::default();
        if !tables.contains_key(default_topic.as_str()) {
            return Err(BankError::MissingDefault(default_topic));
        }
        debug!("Question bank loaded with {} topics", tables.len());
        Ok(Self {
            tables,
            default_topic,
        })
    }

    /// Topic names that have their own table, sorted
    pub fn topics(&self) -> Vec<&str> {
        let mut topics: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        topics.sort_unstable();
        topics
    }

    pub fn has_topic(&self, topic: &Topic) -> bool {
        self.tables.contains_key(topic.as_str())
    }
}

impl QuestionBank for StaticQuestionBank {
    fn questions_for(&self, topic: &Topic) -> Vec<QuestionRecord> {
        let table = self
            .tables
            .get(topic.as_str())
            .or_else(|| {
                debug!(
                    "No bank table for {}, using {}",
                    topic, self.default_topic
                );
                self.tables.get(self.default_topic.as_str())
            })
            .cloned();
        table.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{ResolutionKind, resolve_correct_index};

    #[test]
    fn test_builtin_bank() {
        let bank = StaticQuestionBank::builtin().unwrap();
        assert_eq!(
            bank.topics(),
            vec!["Data Structure Algorithm", "JavaScript", "Python"]
        );
        for topic in [Topic::JavaScript, Topic::Python, Topic::DataStructures] {
            assert!(bank.has_topic(&topic));
            let questions = bank.questions_for(&topic);
            assert_eq!(questions.len(), 15);
            for q in &questions {
                let (_, kind) = resolve_correct_index(q);
                assert_eq!(kind, ResolutionKind::Letter, "{}", q.prompt);
            }
        }
    }

    #[test]
    fn test_unknown_topic_gets_default_table() {
        let bank = StaticQuestionBank::builtin().unwrap();
        let rust = bank.questions_for(&Topic::Custom("Rust".to_string()));
        assert_eq!(rust, bank.questions_for(&Topic::JavaScript));
        assert!(!bank.has_topic(&Topic::Swift));
    }

    #[test]
    fn test_hand_written_field_names() {
        let bank = StaticQuestionBank::from_json(
            r#"{"JavaScript": [{"question": "Which is falsy?", "options": ["0", "'0'", "[]", "{}"], "answer": "0"}]}"#,
        )
        .unwrap();
        let questions = bank.questions_for(&Topic::JavaScript);
        assert_eq!(questions[0].prompt, "Which is falsy?");
        assert_eq!(resolve_correct_index(&questions[0]), (0, ResolutionKind::Text));
        assert_eq!(questions[0].explanation, "");
    }

    #[test]
    fn test_missing_default_table() {
        let err = StaticQuestionBank::from_json(r#"{"Python": []}"#).unwrap_err();
        assert!(matches!(err, BankError::MissingDefault(Topic::JavaScript)));
    }
}
