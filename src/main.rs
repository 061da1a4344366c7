// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};

use crate::app_config::Config;
use crate::providers::gemini::Gemini;
use crate::quiz::{QuizGenerator, ReExplanationRequest, parse_quiz_text};
use crate::retry::RetryPolicy;
use crate::scene::ScenePipeline;

mod app_config;
mod errors;
mod prompts;
mod providers;
mod quiz;
mod retry;
mod scene;

/// CLI wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate an explanation and a 3D scene graph for a concept
    Scene {
        /// Concept to visualize (e.g. "the water cycle")
        concept: String,
    },

    /// Generate a multiple-choice quiz for a concept
    Quiz {
        /// Concept to quiz on
        concept: String,

        /// Parse the quiz text into structured questions before printing
        #[arg(long)]
        parse: bool,
    },

    /// Re-explain a concept after an incorrect quiz answer
    ReExplain {
        /// The concept the quiz covered
        concept: String,

        /// The question that was answered incorrectly
        question: String,

        /// The answer the learner chose
        user_answer: String,

        /// The correct answer
        correct_answer: String,
    },
}

/// vistutor - concept visualization and quiz generation with AI
///
/// Turns a free-text concept into a plain-language explanation plus a
/// renderable 3D scene graph, or into a multiple-choice quiz with
/// re-explanations for wrong answers.
#[derive(Parser, Debug)]
#[command(name = "vistutor")]
#[command(version = "0.1.0")]
#[command(about = "AI-powered concept visualization and quiz generation")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Model name to use for generation
    #[arg(short, long)]
    model: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Prefix for log level
    fn get_prefix_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "[{}] {}",
                Self::get_prefix_for_level(record.level()),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let options = CommandLineOptions::parse();

    let mut config = Config::from_file_or_default(&options.config_path)
        .with_context(|| format!("Failed to load config from {}", options.config_path))?;
    if let Some(model) = options.model {
        config.generation.model = model;
    }

    let log_level = options
        .log_level
        .map(app_config::LogLevel::from)
        .unwrap_or_else(|| config.log_level.clone());
    CustomLogger::init(log_level.to_level_filter()).context("Failed to initialize logger")?;

    config.validate()?;

    let generator = Arc::new(Gemini::new_with_config(
        config.generation.get_api_key(),
        config.generation.model.clone(),
        config.generation.endpoint.clone(),
        config.generation.timeout_secs,
    ));
    let retry = RetryPolicy::new(
        config.generation.retry_count,
        Duration::from_millis(config.generation.retry_backoff_ms),
    );

    match options.command {
        Commands::Scene { concept } => {
            info!("Generating scene for: {}", concept);
            let pipeline = ScenePipeline::new(generator).with_retry_policy(retry);
            let result = pipeline.generate(&concept).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Quiz { concept, parse } => {
            info!("Generating quiz for: {}", concept);
            let quiz_generator = QuizGenerator::new(generator);
            let quiz = quiz_generator.generate(&concept).await?;
            if parse {
                let questions = parse_quiz_text(&quiz);
                println!("{}", serde_json::to_string_pretty(&questions)?);
            } else {
                println!("{}", quiz);
            }
        }
        Commands::ReExplain {
            concept,
            question,
            user_answer,
            correct_answer,
        } => {
            let quiz_generator = QuizGenerator::new(generator);
            let request = ReExplanationRequest {
                concept,
                question_text: question,
                user_answer,
                correct_answer,
            };
            let explanation = quiz_generator.re_explain(&request).await?;
            println!("{}", explanation);
        }
    }

    Ok(())
}
