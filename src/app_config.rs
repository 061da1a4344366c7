use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Generation backend config
    pub generation: GenerationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Generation backend configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerationConfig {
    // @field: Model name
    #[serde(default = "default_model")]
    pub model: String,

    // @field: API key; falls back to the GEMINI_API_KEY environment variable
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL override; empty selects the public API
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    // @field: Total attempts per retried generation call
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    // @field: Base backoff in milliseconds, doubled per attempt
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Level filter for the log facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_retry_count() -> u32 {
    3
}

fn default_retry_backoff_ms() -> u64 {
    1000 // 1 second base backoff time, doubled on each retry
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: String::new(),
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
            retry_count: default_retry_count(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            generation: GenerationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl GenerationConfig {
    /// Resolve the API key, preferring the config file over the environment
    pub fn get_api_key(&self) -> String {
        if !self.api_key.is_empty() {
            return self.api_key.clone();
        }
        std::env::var("GEMINI_API_KEY").unwrap_or_default()
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration from a file, or fall back to defaults when the file
    /// does not exist
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.generation.get_api_key().is_empty() {
            return Err(anyhow!(
                "Generation API key is required (config api_key or GEMINI_API_KEY)"
            ));
        }
        if self.generation.model.is_empty() {
            return Err(anyhow!("Generation model name must not be empty"));
        }
        if self.generation.retry_count == 0 {
            return Err(anyhow!("retry_count must be at least 1"));
        }
        Ok(())
    }
}
