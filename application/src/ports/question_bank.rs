//! Static question bank port

use quiz_domain::{QuestionRecord, Topic};

/// Pre-written questions used when generation is unavailable
pub trait QuestionBank: Send + Sync {
    /// Questions for `topic`. Topics the bank has no table for get a default
    /// table rather than an empty list.
    fn questions_for(&self, topic: &Topic) -> Vec<QuestionRecord>;
}
