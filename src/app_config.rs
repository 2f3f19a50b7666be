use anyhow::{anyhow, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

use crate::file_utils::FileManager;
use crate::validation::ValidationConfig;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and overriding configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the original notebooks
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Directory holding the translated notebooks
    #[serde(default = "default_translated_dir")]
    pub translated_dir: PathBuf,

    /// File name patterns selecting which notebooks to process
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,

    /// Validation config
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level options
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
    // @returns: Matching log crate filter
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("notebooks")
}

fn default_translated_dir() -> PathBuf {
    PathBuf::from("translated")
}

fn default_patterns() -> Vec<String> {
    vec!["*".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            translated_dir: default_translated_dir(),
            patterns: default_patterns(),
            validation: ValidationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.source_dir.as_os_str().is_empty() {
            return Err(anyhow!("Source directory must not be empty"));
        }

        if self.translated_dir.as_os_str().is_empty() {
            return Err(anyhow!("Translated directory must not be empty"));
        }

        if self.patterns.is_empty() {
            return Err(anyhow!("At least one file pattern is required"));
        }

        for pattern in &self.patterns {
            FileManager::pattern_to_regex(pattern)?;
        }

        if self.validation.code_excerpt_limit == 0 {
            return Err(anyhow!("Code excerpt limit must be greater than zero"));
        }

        Ok(())
    }
}
