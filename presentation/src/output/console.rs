//! Console output formatter for quiz runs

use colored::Colorize;
use quiz_domain::assessment::markup::plain_text;
use quiz_domain::{
    AssessmentBlock, AssessmentDocument, QuestionRecord, QuestionSource, QuizScore, Resolution,
    Topic,
};

/// Formats questions, verdicts and results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner shown before the first question
    pub fn welcome(name: &str, topic: &Topic, total: usize, source: &QuestionSource) -> String {
        let mut output = Self::header("Interview Quiz");
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Candidate:".cyan().bold(), name));
        output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), topic));
        output.push_str(&format!("{} {}\n", "Questions:".cyan().bold(), total));
        if !source.is_generated() {
            output.push_str(&format!("{} {}\n", "Source:".yellow().bold(), source));
        }
        output.push_str(&format!(
            "\n{}\n",
            "Answer with A-D or 1-4, 's' to skip, 'q' to finish early.".dimmed()
        ));
        output
    }

    /// A question with its lettered options
    pub fn question(index: usize, total: usize, question: &QuestionRecord) -> String {
        let mut output = format!(
            "\n{}\n{}\n\n",
            format!("── Question {} of {} ──", index + 1, total).yellow().bold(),
            question.prompt
        );
        for (letter, text) in question.labelled_options() {
            output.push_str(&format!("  {} {}\n", format!("{})", letter).cyan().bold(), text));
        }
        output
    }

    /// Verdict after an answer (or a skip)
    pub fn feedback(resolution: &Resolution, answered: bool, explanation: &str) -> String {
        let mut output = if resolution.is_correct {
            format!("{}\n", "Correct!".green().bold())
        } else if answered {
            format!(
                "{} The correct answer is: {}\n",
                "Incorrect.".red().bold(),
                resolution.correct_option_text.bold()
            )
        } else {
            format!(
                "{} The correct answer is: {}\n",
                "Skipped.".yellow().bold(),
                resolution.correct_option_text.bold()
            )
        };
        if !explanation.trim().is_empty() {
            output.push_str(&format!("{} {}\n", "Explanation:".dimmed(), explanation.trim()));
        }
        output
    }

    /// Final tally
    pub fn score(score: &QuizScore) -> String {
        let mut output = Self::section_header("Results");
        output.push_str(&format!(
            "\n{} {}/{} ({:.0}%)\n",
            "Score:".cyan().bold(),
            score.correct,
            score.total,
            score.percentage()
        ));
        output.push_str(&format!(
            "  {} {}   {} {}   {} {}\n",
            "correct".green(),
            score.correct,
            "wrong".red(),
            score.wrong,
            "skipped".yellow(),
            score.unanswered
        ));
        output
    }

    /// Assessment blocks rendered for the terminal
    pub fn assessment(document: &AssessmentDocument) -> String {
        let mut output = Self::section_header("Performance Assessment");
        for block in &document.blocks {
            match block {
                AssessmentBlock::Heading(text) => {
                    output.push_str(&format!("\n{}\n", plain_text(text).cyan().bold()));
                }
                AssessmentBlock::Subheading(text) => {
                    output.push_str(&format!("\n{}\n", plain_text(text).bold()));
                }
                AssessmentBlock::Bullets(items) => {
                    for item in items {
                        output.push_str(&format!("  * {}\n", plain_text(item)));
                    }
                }
                AssessmentBlock::Paragraph(text) => {
                    output.push_str(&format!("{}\n", plain_text(text)));
                }
            }
        }
        output
    }

    /// Numbered topic menu
    pub fn topic_list(topics: &[Topic]) -> String {
        let mut output = format!("{}\n", "Topics:".cyan().bold());
        for (i, topic) in topics.iter().enumerate() {
            output.push_str(&format!("  {:>2}. {}\n", i + 1, topic));
        }
        output
    }

    pub fn warning(message: &str) -> String {
        format!("{} {}", "Warning:".yellow().bold(), message)
    }

    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}
