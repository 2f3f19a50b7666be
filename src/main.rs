// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use nbsync::app_config::{Config, LogLevel};
use nbsync::app_controller::{Controller, RunMode};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Copy outputs from original notebooks onto their translations
    Sync(BatchArgs),

    /// Check translated notebooks against their originals
    Validate(BatchArgs),

    /// Generate shell completions for nbsync
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Directory containing the original notebooks
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Directory containing the translated notebooks
    #[arg(short, long)]
    translated_dir: Option<PathBuf>,

    /// File name pattern selecting notebooks to process (repeatable)
    #[arg(short, long = "pattern", value_name = "PATTERN")]
    patterns: Vec<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "nbsync.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Emit the batch report as JSON on stdout
    #[arg(long)]
    json: bool,
}

/// nbsync - Notebook Translation Reconciliation
///
/// Keeps translated Jupyter notebooks aligned with their originals:
/// copies computed outputs back onto translations and validates that the
/// translation preserved everything it was supposed to.
#[derive(Parser, Debug)]
#[command(name = "nbsync")]
#[command(version = "1.0.0")]
#[command(about = "Notebook translation sync and validation tool")]
#[command(long_about = "nbsync reconciles translated Jupyter notebooks with their originals.

EXAMPLES:
    nbsync sync                                # Sync outputs using default config
    nbsync sync -p '10*' -p '13*'              # Sync only chapters 10 and 13
    nbsync validate                            # Validate all translated notebooks
    nbsync validate --json > report.json       # Machine-readable report
    nbsync sync -s notebooks -t translated     # Explicit directories
    nbsync validate --log-level debug          # Verbose check output
    nbsync completions bash > nbsync.bash      # Generate bash completions

CONFIGURATION:
    Configuration is stored in nbsync.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, built-in defaults are used.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
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

    // @returns: ANSI color and emoji for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "❌ "),
            Level::Warn => ("\x1B[1;33m", "🚧 "),
            Level::Info => ("\x1B[1;32m", " "),
            Level::Debug => ("\x1B[1;36m", "🔍 "),
            Level::Trace => ("\x1B[1;35m", "📋 "),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, emoji) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "nbsync", &mut std::io::stdout());
            Ok(())
        }
        Commands::Sync(args) => run_batch(RunMode::Sync, args),
        Commands::Validate(args) => run_batch(RunMode::Validate, args),
    }
}

fn run_batch(mode: RunMode, options: BatchArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.level_filter());
    }

    // Load or default configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        warn!(
            "Config file not found at '{}', using built-in defaults.",
            config_path
        );
        Config::default()
    };

    // Override config with CLI options if provided
    if let Some(source_dir) = &options.source_dir {
        config.source_dir = source_dir.clone();
    }

    if let Some(translated_dir) = &options.translated_dir {
        config.translated_dir = translated_dir.clone();
    }

    if !options.patterns.is_empty() {
        config.patterns = options.patterns.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.level_filter());
    }

    // Create controller and run the batch
    let controller = Controller::with_config(config)?;
    let report = controller.run(mode)?;

    report.render();

    if options.json {
        println!("{}", report.to_json()?);
    }

    Ok(())
}
