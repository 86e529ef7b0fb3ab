//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for interview-quiz
#[derive(Parser, Debug)]
#[command(name = "interview-quiz")]
#[command(author, version, about = "Interview practice quiz with generated questions")]
#[command(long_about = r#"
Interview Quiz generates multiple-choice interview questions on a topic,
walks you through them in the terminal, and finishes with a performance
assessment written by the model.

Questions come from the Gemini API (set GEMINI_API_KEY). If generation fails,
or with --offline, a built-in question bank is used instead.

Configuration files are loaded from (in priority order):
1. QUIZ_* environment variables (e.g. QUIZ_GEMINI__MODEL)
2. --config <path>     Explicit config file
3. ./quiz.toml         Project-level config
4. ~/.config/interview-quiz/config.toml   Global config

Example:
  interview-quiz Python --name Ada
  interview-quiz "Data Structure Algorithm" -c 10 --report ada.json
  interview-quiz --offline js
"#)]
pub struct Cli {
    /// Topic to be quizzed on (prompted for when omitted)
    pub topic: Option<String>,

    /// Your name, used in the assessment (prompted for when omitted)
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Model used for questions and assessment
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Number of questions to request
    #[arg(short = 'c', long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..=50))]
    pub count: Option<u16>,

    /// Use the built-in question bank without calling the API
    #[arg(long)]
    pub offline: bool,

    /// Skip the performance assessment at the end
    #[arg(long)]
    pub no_assessment: bool,

    /// Write the assessment as an HTML page
    #[arg(long, value_name = "PATH")]
    pub assessment_html: Option<PathBuf>,

    /// Write a JSON report of the run
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// List the built-in topics and exit
    #[arg(long)]
    pub list_topics: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}
