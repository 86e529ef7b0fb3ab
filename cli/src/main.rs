//! CLI entrypoint for Interview Quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use quiz_application::{
    AssessPerformanceInput, AssessPerformanceUseCase, GenerateQuizInput, GenerateQuizUseCase,
    NoProgress, QuizProgressNotifier, QuizReport, ReportWriter,
};
use quiz_domain::{CandidateName, Model, QuizSession, Topic};
use quiz_infrastructure::{
    ConfigLoader, FileConfig, GeminiGateway, JsonReportWriter, StaticQuestionBank,
    write_assessment_html,
};
use quiz_presentation::{
    Cli, ConsoleFormatter, OutputConfig, ProgressReporter, QuizRunner, SimpleProgress,
};
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines reach the file
    let _log_guard = init_logging(&cli)?;

    info!("Starting Interview Quiz");

    if cli.list_topics {
        print!("{}", ConsoleFormatter::topic_list(&Topic::catalog()));
        return Ok(());
    }

    let config = load_config(&cli)?;

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        println!();
        print!("{}", toml::to_string_pretty(&config.redacted())?);
        return Ok(());
    }

    let output = OutputConfig {
        color: config.output.color,
        show_progress: config.output.show_progress,
    }
    .with_flags(cli.no_color, cli.quiet);
    output.apply_color();

    let mut runner = QuizRunner::new(io::stdin().lock(), io::stdout());

    let name = match cli.name.as_deref().and_then(CandidateName::try_new) {
        Some(name) => name,
        None => runner.ask_name()?,
    };
    let topic = match cli.topic.as_deref() {
        Some(topic) => topic.parse()?,
        None => runner.ask_topic(&config.quiz.default_topic.clone().unwrap_or_default())?,
    };
    let model = config.gemini.model.clone();

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::from_config(&config.gemini)?);
    let bank = Arc::new(StaticQuestionBank::builtin()?);
    let behavior = config.behavior_config();

    let progress: Box<dyn QuizProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if output.show_progress {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    if !cli.offline && !gateway.has_api_key() {
        println!(
            "{}",
            ConsoleFormatter::warning("GEMINI_API_KEY is not set; using the built-in question bank.")
        );
    }

    // Questions
    let generate = GenerateQuizUseCase::new(Arc::clone(&gateway), bank)
        .with_config(behavior.clone());
    let mut input = GenerateQuizInput::new(topic.clone(), model.clone());
    if cli.offline {
        input = input.offline();
    }
    let quiz = generate
        .execute_with_progress(input, progress.as_ref())
        .await?;

    print!(
        "{}",
        ConsoleFormatter::welcome(name.as_str(), &topic, quiz.questions.len(), &quiz.source)
    );

    // Play
    let mut session = QuizSession::new(quiz.questions);
    let outcome = runner.play(&mut session)?;
    info!("Quiz finished (early: {})", outcome.finished_early);

    print!("{}", ConsoleFormatter::score(&session.score()));
    let answers = session.into_answers();

    if let Some(path) = &cli.report {
        let report = QuizReport::new(name.clone(), topic.clone(), quiz.source.clone(), answers.clone());
        JsonReportWriter::new(path)
            .write(&report)
            .with_context(|| format!("writing report to {}", path.display()))?;
        println!("Report saved to {}", path.display());
    }

    // Assessment
    if cli.no_assessment || cli.offline {
        return Ok(());
    }

    let assess = AssessPerformanceUseCase::new(gateway).with_config(behavior);
    let input = AssessPerformanceInput {
        name: name.clone(),
        topic: topic.clone(),
        model,
        answers,
    };
    match assess.execute_with_progress(input, progress.as_ref()).await {
        Ok(assessment) => {
            print!("{}", ConsoleFormatter::assessment(&assessment.document));
            if let Some(path) = &cli.assessment_html {
                write_assessment_html(path, &name, &topic, &assessment.document)
                    .with_context(|| format!("writing assessment to {}", path.display()))?;
                println!("Assessment saved to {}", path.display());
            }
        }
        Err(e) => {
            warn!("Assessment failed: {}", e);
            println!("{}", ConsoleFormatter::error("Failed to load assessment."));
        }
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// `-v` flags pick the level; without them `RUST_LOG` is honoured and the
/// default is `warn`. With `--log-file`, logs go to that file instead of stderr.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = &cli.log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("--log-file needs a file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

/// Load, override from flags, and validate the configuration
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(model) = &cli.model {
        let Ok(model) = model.parse::<Model>();
        config.gemini.model = model;
    }
    if let Some(count) = cli.count {
        config.quiz.question_count = usize::from(count);
    }

    config.validate()?;
    Ok(config)
}
