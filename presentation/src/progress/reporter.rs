//! Progress reporting while waiting on the model

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use quiz_application::QuizProgressNotifier;
use quiz_domain::{QuestionSource, Topic};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self, prefix: &str, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(prefix.to_string());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn finish(&self, message: String) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizProgressNotifier for ProgressReporter {
    fn on_generation_start(&self, topic: &Topic, count: usize) {
        self.start("Questions", format!("Preparing {} questions on {}...", count, topic));
    }

    fn on_generation_complete(&self, source: &QuestionSource, count: usize) {
        let status = if source.is_generated() {
            format!("{} {} questions ready", "v".green(), count)
        } else {
            format!("{} {} questions from the {}", "!".yellow(), count, source)
        };
        self.finish(status);
    }

    fn on_assessment_start(&self, answered: usize) {
        self.start(
            "Assessment",
            format!("Analysing {} answers...", answered),
        );
    }

    fn on_assessment_complete(&self, success: bool) {
        let status = if success {
            format!("{} done", "v".green())
        } else {
            format!("{} failed", "x".red())
        };
        self.finish(status);
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl QuizProgressNotifier for SimpleProgress {
    fn on_generation_start(&self, topic: &Topic, count: usize) {
        println!(
            "{} {} ({} on {})",
            "->".cyan(),
            "Preparing questions".bold(),
            count,
            topic
        );
    }

    fn on_generation_complete(&self, source: &QuestionSource, count: usize) {
        if source.is_generated() {
            println!("  {} {} questions", "v".green(), count);
        } else {
            println!("  {} {} questions from the {}", "!".yellow(), count, source);
        }
    }

    fn on_assessment_start(&self, answered: usize) {
        println!(
            "{} {} ({} answered)",
            "->".cyan(),
            "Requesting assessment".bold(),
            answered
        );
    }

    fn on_assessment_complete(&self, success: bool) {
        if success {
            println!("  {} done", "v".green());
        } else {
            println!("  {} failed", "x".red());
        }
    }
}
