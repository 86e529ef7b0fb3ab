//! Question parsing from generated text.
//!
//! Turns the free-text response of the question generator into
//! [`QuestionRecord`]s. Pure domain logic: no I/O, just line scanning.
//!
//! # Expected shape
//!
//! ```text
//! Question: What is 2+2?
//! A) 3
//! B) 4
//! C) 5
//! D) 6
//! Answer: B
//! Explanation: Basic arithmetic.
//! ```
//!
//! Generators drift from this shape (emphasis markers, `A.` instead of `A)`,
//! numbered questions, code fences in the prose), so every block is parsed on
//! its own and dropped when it cannot yield a complete record. One bad block
//! never costs the rest of the batch.

use std::sync::LazyLock;

use regex::Regex;

use super::question::{CorrectAnswer, OptionLetter, QuestionRecord};

/// Prompts shorter than this (in characters) are treated as noise.
pub const MIN_PROMPT_CHARS: usize = 5;

/// A `Question:` marker, either at the start of a line (after optional
/// heading, quote or bullet markup and a list number) or mid-line right
/// after the end of a sentence.
static QUESTION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?m)(?:",
        r"^[ \t]*(?:[#>+-]+[ \t]*)*(?:\d+[.)][ \t]*)?\**[ \t]*(?i:question)(?:[ \t]*#?\d+)?[ \t]*\**[ \t]*:",
        r"|[.!?][ \t]+\**Question(?:[ \t]*#?\d+)?\**[ \t]*:",
        r")[ \t]*\**",
    ))
    .expect("question marker pattern is valid")
});

static OPTION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    // `A)` may be followed directly by text; `A.` needs a space so `A.B` stays prose
    Regex::new(r"^[ \t]*(?:[-+][ \t]*)?\**[ \t]*\(?([A-D])(?:\)\**[ \t]*|\.\**(?:[ \t]+|$))(.*)$")
        .expect("option marker pattern is valid")
});

static ANSWER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[ \t]*\**[ \t]*(?:correct[ \t]+)?answer[ \t]*\**[ \t]*:[ \t]*(.*)$")
        .expect("answer marker pattern is valid")
});

static EXPLANATION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[ \t]*\**[ \t]*explanation[ \t]*\**[ \t]*:[ \t]*\**[ \t]*(.*)$")
        .expect("explanation marker pattern is valid")
});

static ANSWER_LETTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s*(\[]*([A-Da-d])(?:[\s*).:,\]]|$)").expect("answer letter pattern is valid")
});

/// Parse every well-formed question block in `raw`.
///
/// Never fails: empty or unparsable input yields an empty vec, and malformed
/// blocks are skipped.
///
/// # Examples
///
/// ```
/// use quiz_domain::quiz::parsing::parse_questions;
///
/// let text = "Question: What is 2+2?\nA) 3\nB) 4\nC) 5\nD) 6\nAnswer: B\nExplanation: Basic arithmetic.";
/// let questions = parse_questions(text);
/// assert_eq!(questions.len(), 1);
/// assert_eq!(questions[0].options[1], "4");
///
/// assert!(parse_questions("garbage with no markers").is_empty());
/// ```
pub fn parse_questions(raw: &str) -> Vec<QuestionRecord> {
    let text = normalize(raw);
    if text.is_empty() {
        return Vec::new();
    }

    split_blocks(&text).filter_map(parse_block).collect()
}

/// Like [`parse_questions`], for a response that may have carried no text at all.
pub fn parse_optional_questions(raw: Option<&str>) -> Vec<QuestionRecord> {
    raw.map(parse_questions).unwrap_or_default()
}

fn normalize(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}

/// Block bodies, each starting right after a question marker. Text before
/// the first marker is discarded.
fn split_blocks(text: &str) -> impl Iterator<Item = &str> {
    let markers: Vec<(usize, usize)> = QUESTION_MARKER
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();

    let bodies: Vec<&str> = markers
        .iter()
        .enumerate()
        .map(|(i, &(_, body_start))| {
            let end = markers.get(i + 1).map_or(text.len(), |&(next, _)| next);
            &text[body_start..end]
        })
        .collect();

    bodies.into_iter().filter(|body| !body.trim().is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Prompt,
    Option,
    Answer,
    Explanation,
}

/// Accumulated lines of one block while it is being scanned
#[derive(Default)]
struct BlockScan<'a> {
    prompt: Vec<&'a str>,
    options: Vec<(OptionLetter, Vec<&'a str>)>,
    answer: Option<OptionLetter>,
    explanation: Vec<&'a str>,
}

impl<'a> BlockScan<'a> {
    fn push(&mut self, section: Section, line: &'a str) {
        match section {
            Section::Prompt => self.prompt.push(line),
            Section::Option => {
                if let Some((_, lines)) = self.options.last_mut() {
                    lines.push(line);
                }
            }
            Section::Answer => {
                // The letter may sit on the line after a bare `Answer:`
                if self.answer.is_none() {
                    self.answer = answer_letter(line);
                }
            }
            Section::Explanation => self.explanation.push(line),
        }
    }

    fn into_record(self) -> Option<QuestionRecord> {
        let prompt = self.prompt.join("\n").trim().to_string();
        if prompt.chars().count() < MIN_PROMPT_CHARS {
            return None;
        }

        let in_order = self
            .options
            .iter()
            .map(|(letter, _)| *letter)
            .eq(OptionLetter::ALL);
        if !in_order {
            return None;
        }
        let options: Vec<String> = self
            .options
            .iter()
            .map(|(_, lines)| clean_option(&lines.join("\n")))
            .collect();
        let options: [String; 4] = options.try_into().ok()?;

        let answer = self.answer?;
        let mut explanation = self.explanation;
        while explanation
            .last()
            .is_some_and(|line| line.trim().is_empty() || is_rule(line))
        {
            explanation.pop();
        }
        let explanation = explanation.join("\n").trim().to_string();

        Some(
            QuestionRecord::new(prompt, options, CorrectAnswer::Letter(answer))
                .with_explanation(explanation),
        )
    }
}

fn parse_block(block: &str) -> Option<QuestionRecord> {
    let mut scan = BlockScan::default();
    let mut section = Section::Prompt;
    let mut in_fence = false;

    for line in block.lines() {
        if is_fence(line) {
            in_fence = !in_fence;
            scan.push(section, line);
            continue;
        }
        if in_fence {
            scan.push(section, line);
            continue;
        }

        // Once the explanation has started it runs to the end of the block;
        // only a still-missing answer may interrupt it.
        if let Some(caps) = ANSWER_MARKER.captures(line)
            && (section != Section::Explanation || scan.answer.is_none())
        {
            if section != Section::Explanation {
                section = Section::Answer;
            }
            if scan.answer.is_none() {
                scan.answer = caps.get(1).and_then(|m| answer_letter(m.as_str()));
            }
            continue;
        }

        if section == Section::Explanation {
            scan.push(section, line);
            continue;
        }

        if let Some(caps) = EXPLANATION_MARKER.captures(line) {
            section = Section::Explanation;
            scan.push(section, caps.get(1).map_or("", |m| m.as_str()));
            continue;
        }

        if matches!(section, Section::Prompt | Section::Option)
            && let Some(caps) = OPTION_MARKER.captures(line)
            && let Some(letter) = caps
                .get(1)
                .and_then(|m| m.as_str().chars().next())
                .and_then(OptionLetter::from_char)
        {
            section = Section::Option;
            let text = caps.get(2).map_or("", |m| m.as_str());
            scan.options.push((letter, vec![text]));
            continue;
        }

        scan.push(section, line);
    }

    scan.into_record()
}

/// A markdown horizontal rule (`---`, `***`, `___`, spaces allowed)
fn is_rule(line: &str) -> bool {
    let line = line.trim();
    let Some(first) = line.chars().next() else {
        return false;
    };
    matches!(first, '-' | '*' | '_')
        && line.chars().filter(|&c| c == first).count() >= 3
        && line.chars().all(|c| c == first || c == ' ')
}

fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

fn answer_letter(text: &str) -> Option<OptionLetter> {
    ANSWER_LETTER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next())
        .and_then(OptionLetter::from_char)
}

/// Trim an option and strip markdown emphasis from both ends
fn clean_option(text: &str) -> String {
    text.trim().trim_matches('*').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::resolution::resolve_answer;

    const WELL_FORMED: &str = "Question: What is 2+2?
A) 3
B) 4
C) 5
D) 6
Answer: B
Explanation: Basic arithmetic.

Question: Which keyword declares a block-scoped constant in JavaScript?
A) var
B) let
C) const
D) static
Answer: C
Explanation: `const` is block-scoped and cannot be reassigned.";

    #[test]
    fn test_parse_well_formed_blocks() {
        let questions = parse_questions(WELL_FORMED);
        assert_eq!(questions.len(), 2);

        assert_eq!(questions[0].prompt, "What is 2+2?");
        assert_eq!(questions[0].options, ["3", "4", "5", "6"]);
        assert_eq!(
            questions[0].correct_answer,
            CorrectAnswer::Letter(OptionLetter::B)
        );
        assert_eq!(questions[0].explanation, "Basic arithmetic.");

        assert_eq!(questions[1].options, ["var", "let", "const", "static"]);
        assert_eq!(
            questions[1].explanation,
            "`const` is block-scoped and cannot be reassigned."
        );
    }

    #[test]
    fn test_incomplete_trailing_block_is_dropped() {
        let text = "Question: What is 2+2?\nA) 3\nB) 4\nC) 5\nD) 6\nAnswer: B\nExplanation: Basic arithmetic.\nQuestion: incomplete block with no options or answer";
        let questions = parse_questions(text);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options, ["3", "4", "5", "6"]);
        assert_eq!(resolve_answer(&questions[0], "4").correct_option_text, "4");
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert!(parse_questions("").is_empty());
        assert!(parse_questions("   \n\t  ").is_empty());
        assert!(parse_questions("garbage with no markers").is_empty());
        assert!(parse_optional_questions(None).is_empty());
        assert_eq!(parse_optional_questions(Some(WELL_FORMED)).len(), 2);
    }

    #[test]
    fn test_malformed_block_does_not_affect_neighbours() {
        let text = "Question: First valid question?
A) one
B) two
C) three
D) four
Answer: A

Question: Only three options here?
A) one
B) two
C) three
Answer: A

Question: Missing the answer line?
A) one
B) two
C) three
D) four
Explanation: no answer given

Question: Hi
A) one
B) two
C) three
D) four
Answer: D

Question: Last valid question?
A) w
B) x
C) y
D) z
Answer: d";
        let questions = parse_questions(text);
        let prompts: Vec<_> = questions.iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts, ["First valid question?", "Last valid question?"]);
        assert_eq!(
            questions[1].correct_answer,
            CorrectAnswer::Letter(OptionLetter::D)
        );
    }

    #[test]
    fn test_extra_lines_and_duplicate_slots() {
        let text = "Question: Too many choices here?\nA) 1\nB) 2\nC) 3\nD) 4\nE) 5\nAnswer: A";
        // `E)` is not an option marker, so it extends option D instead
        let questions = parse_questions(text);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options[3], "4\nE) 5");

        let duplicated = "Question: Duplicate slot letters?\nA) 1\nB) 2\nB) 3\nC) 4\nD) 5\nAnswer: A";
        assert!(parse_questions(duplicated).is_empty());
    }

    #[test]
    fn test_dot_markers_and_emphasis() {
        let text = "**Question 1:** What does `len()` return for an empty list?
**A.** 0
**B.** None
C. *-1*
D. An error
**Answer:** **A**
**Explanation:** An empty list has length zero.";
        let questions = parse_questions(text);
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.prompt, "What does `len()` return for an empty list?");
        assert_eq!(q.options, ["0", "None", "-1", "An error"]);
        assert_eq!(q.correct_answer, CorrectAnswer::Letter(OptionLetter::A));
        assert_eq!(q.explanation, "An empty list has length zero.");
    }

    #[test]
    fn test_numbered_markers_and_crlf() {
        let text = "1. Question: What is the time complexity of binary search?\r\nA) O(n)\r\nB) O(log n)\r\nC) O(1)\r\nD) O(n log n)\r\nAnswer: b\r\n\r\n2. Question: Which structure is FIFO?\rA) Stack\rB) Queue\rC) Tree\rD) Graph\rAnswer: B\r";
        let questions = parse_questions(text);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].options[1], "O(log n)");
        assert_eq!(
            questions[0].correct_answer,
            CorrectAnswer::Letter(OptionLetter::B)
        );
        assert_eq!(questions[1].prompt, "Which structure is FIFO?");
    }

    #[test]
    fn test_code_fence_preserved_in_prompt() {
        let text = "Question: What is logged?
```js
let a = [1, 2, 3];
A) this line is code, not an option
a.length = 0;
console.log(a);
```
A) [1, 2, 3]
B) [0, 0, 0]
C) []
D) undefined
Answer: C
Explanation: Setting length to 0 empties the array.";
        let questions = parse_questions(text);
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(
            q.prompt,
            "What is logged?\n```js\nlet a = [1, 2, 3];\nA) this line is code, not an option\na.length = 0;\nconsole.log(a);\n```"
        );
        assert_eq!(q.options, ["[1, 2, 3]", "[0, 0, 0]", "[]", "undefined"]);
    }

    #[test]
    fn test_multiline_prompt_and_option() {
        let text = "Question: Consider the following.
Which statement holds?
A) The first
   statement
B) The second
C) The third
D) The fourth
Answer: A";
        let q = &parse_questions(text)[0];
        assert_eq!(q.prompt, "Consider the following.\nWhich statement holds?");
        assert_eq!(q.options[0], "The first\n   statement");
    }

    #[test]
    fn test_explanation_runs_to_block_end() {
        let text = "Question: Which is a closure?
A) x
B) y
C) z
D) w
Answer: B
Explanation: A closure captures its environment.
A) would be wrong because it captures nothing.
Answer: B is the only closure.

Question: Next one please?
A) 1
B) 2
C) 3
D) 4
Answer: A";
        let questions = parse_questions(text);
        assert_eq!(questions.len(), 2);
        assert_eq!(
            questions[0].explanation,
            "A closure captures its environment.\nA) would be wrong because it captures nothing.\nAnswer: B is the only closure."
        );
    }

    #[test]
    fn test_missing_explanation_is_allowed() {
        let text = "Question: Is Rust memory safe?\nA) Yes\nB) No\nC) Sometimes\nD) Never\nAnswer: A";
        let q = &parse_questions(text)[0];
        assert_eq!(q.explanation, "");
    }

    #[test]
    fn test_answer_forms() {
        let block = |answer: &str| {
            format!("Question: Pick the right one?\nA) 1\nB) 2\nC) 3\nD) 4\n{answer}")
        };
        let letter = |answer: &str| {
            parse_questions(&block(answer))
                .first()
                .map(|q| q.correct_answer.clone())
        };

        assert_eq!(letter("Answer: C) 3"), Some(OptionLetter::C.into()));
        assert_eq!(letter("Correct Answer: (d)"), Some(OptionLetter::D.into()));
        assert_eq!(letter("Answer:\nB"), Some(OptionLetter::B.into()));
        assert_eq!(letter("Answer: Both of them"), None);
        assert_eq!(letter("Answer: E"), None);
    }

    #[test]
    fn test_answer_after_explanation() {
        let text = "Question: Order swapped in this block?\nA) 1\nB) 2\nC) 3\nD) 4\nExplanation: Because.\nAnswer: D";
        let q = &parse_questions(text)[0];
        assert_eq!(q.correct_answer, CorrectAnswer::Letter(OptionLetter::D));
        assert_eq!(q.explanation, "Because.");
    }

    #[test]
    fn test_preamble_before_first_marker_is_ignored() {
        let text = format!("Here are your questions:\n\n{WELL_FORMED}");
        assert_eq!(parse_questions(&text).len(), 2);
    }

    #[test]
    fn test_markdown_heading_and_quote_markers() {
        let text = "### Question 1: What is 2+2?
A) 3
B) 4
C) 5
D) 6
Answer: B

> Question: Which structure is FIFO?
A) Stack
B) Queue
C) Tree
D) Graph
Answer: B

- **Question 3:** Which keyword declares a constant?
A) var
B) let
C) const
D) static
Answer: C";
        let questions = parse_questions(text);
        let prompts: Vec<_> = questions.iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(
            prompts,
            [
                "What is 2+2?",
                "Which structure is FIFO?",
                "Which keyword declares a constant?"
            ]
        );
    }

    #[test]
    fn test_marker_after_sentence_on_same_line() {
        let text = "Here you go. Question: What is 2+2?\nA) 3\nB) 4\nC) 5\nD) 6\nAnswer: B";
        let questions = parse_questions(text);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt, "What is 2+2?");

        // Mid-sentence mentions are not markers
        let prose = "The question: is it fast?\nA) yes\nB) no\nC) maybe\nD) never\nAnswer: A";
        assert!(parse_questions(prose).is_empty());
    }

    #[test]
    fn test_option_marker_spacing_and_bullets() {
        let tight = "Question: What is 2+2?\nA)3\nB)4\nC)5\nD)6\nAnswer: B";
        assert_eq!(parse_questions(tight)[0].options, ["3", "4", "5", "6"]);

        let bulleted = "Question: What is 2+2?\n- A) 3\n- B) 4\n+ C) 5\n- D) 6\nAnswer: B";
        assert_eq!(parse_questions(bulleted)[0].options, ["3", "4", "5", "6"]);

        let dotted_prose = "Question: Which testing style compares two variants?\nA.B testing is one guess.\nA. Unit\nB. A/B\nC. Fuzz\nD. Smoke\nAnswer: B";
        let q = &parse_questions(dotted_prose)[0];
        assert_eq!(
            q.prompt,
            "Which testing style compares two variants?\nA.B testing is one guess."
        );
        assert_eq!(q.options, ["Unit", "A/B", "Fuzz", "Smoke"]);
    }

    #[test]
    fn test_rule_between_blocks_is_not_explanation() {
        let text = WELL_FORMED.replace("\n\nQuestion:", "\n\n---\n\nQuestion:");
        let questions = parse_questions(&text);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].explanation, "Basic arithmetic.");

        assert!(is_rule("* * *"));
        assert!(is_rule("___"));
        assert!(!is_rule("--"));
        assert!(!is_rule("-- note"));
    }
}
