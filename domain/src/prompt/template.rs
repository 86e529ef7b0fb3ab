//! Prompt templates for question generation and assessment

use crate::core::error::DomainError;
use crate::quiz::answer::AnswerRecord;
use crate::quiz::topic::Topic;

/// Default size of a generated question batch
pub const DEFAULT_QUESTION_COUNT: usize = 20;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt asking for `count` questions in the format the parser reads
    pub fn question_generation(topic: &Topic, count: usize) -> String {
        format!(
            r#"Generate {count} multiple choice questions suitable for technical interviews at top tech companies (like FANG) for the domain: {topic}. Each question should have 4 options, the correct answer, and a brief explanation. The questions should cover a range of difficulty and important topics relevant to interviews.

Format:
Question: ...
A) ...
B) ...
C) ...
D) ...
Answer: <single letter A, B, C or D>
Explanation: ...

Now generate {count} questions for the domain: {topic} in the above format. Do not include any extra commentary or answers in the output except as specified in the format."#
        )
    }

    /// Prompt asking for a performance analysis of a finished run.
    ///
    /// The answers are embedded as JSON so the model sees each question,
    /// the choice made, the correct option and the verdict.
    pub fn assessment(
        name: &str,
        topic: &Topic,
        answers: &[AnswerRecord],
    ) -> Result<String, DomainError> {
        let answers_json = serde_json::to_string_pretty(answers)
            .map_err(|e| DomainError::Serialization(e.to_string()))?;
        let total = answers.len();

        Ok(format!(
            r#"A user named "{name}" took a {total}-question technical interview-style quiz on "{topic}". Their answers are listed below as JSON (chosenOption is null for questions they skipped):

{answers_json}

Please provide a performance analysis in the following format:
1. **Summary:** Write a short, clear summary paragraph (3-5 sentences) about the user's overall knowledge level in {topic}, based on their answers.
2. **Focus Areas:** List 3-5 key topics or concepts the user should focus on to improve, as bullet points.
3. **Suggestions:** List 3-5 actionable suggestions for how the user can improve in these areas, as bullet points.
4. Do NOT provide the correct answers to the quiz or repeat the questions.
5. The analysis should be suitable for someone preparing for FANG-level interviews."#
        ))
    }
}
