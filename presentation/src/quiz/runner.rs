//! Interactive quiz loop.
//!
//! Drives a [`QuizSession`] from line-based input. Generic over the reader
//! and writer so the loop can run against a terminal or in-memory buffers.

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use quiz_domain::{CandidateName, DomainError, OptionLetter, QuizSession, QuizState, Topic};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Input ended before a value was entered")]
    EndOfInput,
}

/// One line of player input while a question is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Answer(OptionLetter),
    Skip,
    Quit,
}

/// Parse a letter (`a`-`d`), a number (`1`-`4`), `s`/`skip` or `q`/`quit`
pub fn parse_choice(input: &str) -> Option<Choice> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "s" | "skip" => return Some(Choice::Skip),
        "q" | "quit" | "exit" => return Some(Choice::Quit),
        _ => {}
    }

    let mut chars = input.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    let letter = match c.to_digit(10) {
        Some(n) if n >= 1 => OptionLetter::from_index(n as usize - 1),
        Some(_) => None,
        None => OptionLetter::from_char(c),
    };
    letter.map(Choice::Answer)
}

/// How a played session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub finished_early: bool,
}

/// Line-based quiz front end
pub struct QuizRunner<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> QuizRunner<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer (for inspecting captured output)
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask until a non-blank name is entered
    pub fn ask_name(&mut self) -> Result<CandidateName, RunnerError> {
        loop {
            self.prompt("Your name:")?;
            let Some(line) = self.read_line()? else {
                return Err(RunnerError::EndOfInput);
            };
            if let Some(name) = CandidateName::try_new(&line) {
                return Ok(name);
            }
            writeln!(self.output, "{}", ConsoleFormatter::warning("Name cannot be empty."))?;
        }
    }

    /// Offer the topic menu. Blank input (or end of input) picks `default`;
    /// a menu number picks that topic; anything else is taken as a topic name.
    pub fn ask_topic(&mut self, default: &Topic) -> Result<Topic, RunnerError> {
        let catalog = Topic::catalog();
        write!(self.output, "{}", ConsoleFormatter::topic_list(&catalog))?;
        self.prompt(&format!("Topic [{}]:", default))?;

        let Some(line) = self.read_line()? else {
            return Ok(default.clone());
        };
        let line = line.trim();
        if line.is_empty() {
            return Ok(default.clone());
        }
        if let Ok(n) = line.parse::<usize>()
            && let Some(topic) = n.checked_sub(1).and_then(|i| catalog.get(i))
        {
            return Ok(topic.clone());
        }
        Ok(line.parse()?)
    }

    /// Play every question of `session`, printing feedback after each one
    pub fn play(&mut self, session: &mut QuizSession) -> Result<RunOutcome, RunnerError> {
        let total = session.len();
        session.start()?;

        while let QuizState::Showing(i) = session.state() {
            let question = session.questions()[i].clone();
            write!(
                self.output,
                "{}",
                ConsoleFormatter::question(i, total, &question)
            )?;

            let choice = loop {
                self.prompt("Your answer:")?;
                let Some(line) = self.read_line()? else {
                    break Choice::Quit;
                };
                match parse_choice(&line) {
                    Some(choice) => break choice,
                    None => writeln!(
                        self.output,
                        "{}",
                        ConsoleFormatter::warning("Answer with A-D, 1-4, s to skip or q to quit.")
                    )?,
                }
            };

            let feedback = match choice {
                Choice::Answer(letter) => {
                    let resolution = session.submit(question.option(letter))?;
                    ConsoleFormatter::feedback(&resolution, true, &question.explanation)
                }
                Choice::Skip => {
                    let resolution = session.skip()?;
                    ConsoleFormatter::feedback(&resolution, false, &question.explanation)
                }
                Choice::Quit => {
                    session.finish_early()?;
                    writeln!(self.output, "\n{}", "Finishing early.".yellow())?;
                    return Ok(RunOutcome {
                        finished_early: true,
                    });
                }
            };
            write!(self.output, "{}", feedback)?;
            session.advance()?;
        }

        Ok(RunOutcome {
            finished_early: false,
        })
    }

    fn prompt(&mut self, label: &str) -> io::Result<()> {
        write!(self.output, "{} ", label.bold())?;
        self.output.flush()
    }

    /// Next line without its terminator; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
