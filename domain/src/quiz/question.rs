//! Question record entity
//!
//! A [`QuestionRecord`] is what the parser produces from generated text and
//! what the static question bank supplies as a drop-in replacement.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Option slot label. The label is implied by position in
/// [`QuestionRecord::options`], never stored alongside the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    /// All slots in display order
    pub const ALL: [OptionLetter; 4] = [
        OptionLetter::A,
        OptionLetter::B,
        OptionLetter::C,
        OptionLetter::D,
    ];

    /// Zero-based index into the options array
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_char(self) -> char {
        match self {
            OptionLetter::A => 'A',
            OptionLetter::B => 'B',
            OptionLetter::C => 'C',
            OptionLetter::D => 'D',
        }
    }

    /// Parse a letter, case-insensitive
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(OptionLetter::A),
            'B' => Some(OptionLetter::B),
            'C' => Some(OptionLetter::C),
            'D' => Some(OptionLetter::D),
            _ => None,
        }
    }
}

impl std::fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The correct-answer field, classified once when the record is built.
///
/// Sources disagree on the encoding: generated text uses a slot letter,
/// hand-written tables sometimes repeat the option text. Which of the two
/// actually points at a valid option is decided by
/// [`resolve_answer`](crate::quiz::resolution::resolve_answer).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CorrectAnswer {
    /// A slot reference (A–D)
    Letter(OptionLetter),
    /// Literal option text
    Text(String),
}

impl CorrectAnswer {
    /// Classify a raw answer string.
    ///
    /// A single letter A–D (any case, surrounding whitespace ignored) is a
    /// slot reference; anything else is kept verbatim as option text.
    pub fn classify(raw: &str) -> Self {
        let mut chars = raw.trim().chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(letter) = OptionLetter::from_char(c)
        {
            return CorrectAnswer::Letter(letter);
        }
        CorrectAnswer::Text(raw.to_string())
    }

    /// The raw encoding, as it would appear in source data
    pub fn to_raw(&self) -> String {
        match self {
            CorrectAnswer::Letter(letter) => letter.to_string(),
            CorrectAnswer::Text(text) => text.clone(),
        }
    }
}

impl From<OptionLetter> for CorrectAnswer {
    fn from(letter: OptionLetter) -> Self {
        CorrectAnswer::Letter(letter)
    }
}

impl Serialize for CorrectAnswer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_raw())
    }
}

impl<'de> Deserialize<'de> for CorrectAnswer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CorrectAnswer::classify(&s))
    }
}

/// One multiple-choice question (Entity)
///
/// Exactly four options; held immutably for the duration of a quiz session.
/// Deserialization also accepts the `question` / `answer` field names used by
/// hand-written question tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    /// Question statement; markdown and code fences kept verbatim
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: [String; 4],
    #[serde(alias = "answer")]
    pub correct_answer: CorrectAnswer,
    #[serde(default)]
    pub explanation: String,
}

impl QuestionRecord {
    pub fn new(
        prompt: impl Into<String>,
        options: [String; 4],
        correct_answer: impl Into<CorrectAnswer>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            correct_answer: correct_answer.into(),
            explanation: String::new(),
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    /// Text of the option in the given slot
    pub fn option(&self, letter: OptionLetter) -> &str {
        &self.options[letter.index()]
    }

    /// Options paired with their slot letters, in display order
    pub fn labelled_options(&self) -> impl Iterator<Item = (OptionLetter, &str)> {
        OptionLetter::ALL
            .into_iter()
            .zip(self.options.iter().map(String::as_str))
    }
}

impl From<&str> for CorrectAnswer {
    fn from(raw: &str) -> Self {
        CorrectAnswer::classify(raw)
    }
}

impl From<String> for CorrectAnswer {
    fn from(raw: String) -> Self {
        CorrectAnswer::classify(&raw)
    }
}
