use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use serde::Serialize;
use std::path::Path;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::notebook::Notebook;
use crate::sync::OutputSynchronizer;
use crate::validation::{ValidationReport, ValidationService};

// @module: Application controller for batch reconciliation

/// What a batch run does with each discovered pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Copy outputs onto the translated side and rewrite it
    Sync,
    /// Run the validation check battery, read-only
    Validate,
}

/// Outcome of one document pair.
///
/// Replaces exception-driven narration: every pair ends in exactly one of
/// these states and the batch report renders them together at the end.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PairOutcome {
    /// Pair was not processed
    Skipped {
        /// Why the pair was skipped
        reason: String,
    },
    /// Outputs synchronized and the translated file rewritten
    Synced {
        /// Cells whose outputs were copied
        outputs_copied: usize,
    },
    /// Validation ran to completion
    Validated {
        /// Per-check outcomes for the pair
        report: ValidationReport,
    },
    /// Pair aborted by an unexpected error
    Failed {
        /// Error description
        error: String,
    },
}

/// One batch entry: shared file name plus its outcome
#[derive(Debug, Serialize)]
pub struct PairResult {
    /// File name shared by the original and translated documents
    pub name: String,
    #[serde(flatten)]
    pub outcome: PairOutcome,
}

/// Aggregated batch report, rendered once at the end of a run
#[derive(Debug, Serialize)]
pub struct BatchReport {
    /// Per-pair results in processing order
    pub entries: Vec<PairResult>,
}

impl BatchReport {
    /// Pairs that were actually processed (synced or validated).
    pub fn processed(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| {
                matches!(
                    e.outcome,
                    PairOutcome::Synced { .. } | PairOutcome::Validated { .. }
                )
            })
            .count()
    }

    /// Validated pairs with every check clean.
    pub fn passed(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(&e.outcome, PairOutcome::Validated { report } if report.all_passed()))
            .count()
    }

    /// Validated pairs with at least one warning or failure.
    pub fn with_issues(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(&e.outcome, PairOutcome::Validated { report } if report.has_issues()))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, PairOutcome::Skipped { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, PairOutcome::Failed { .. }))
            .count()
    }

    /// Total cells whose outputs were copied across all synced pairs.
    pub fn outputs_copied(&self) -> usize {
        self.entries
            .iter()
            .map(|e| match e.outcome {
                PairOutcome::Synced { outputs_copied } => outputs_copied,
                _ => 0,
            })
            .sum()
    }

    /// Render the report to the console, one line per file plus a summary.
    pub fn render(&self) {
        info!("{}", "=".repeat(60));

        for entry in &self.entries {
            match &entry.outcome {
                PairOutcome::Skipped { reason } => {
                    warn!("SKIP: {} - {}", entry.name, reason);
                }
                PairOutcome::Synced { outputs_copied } => {
                    info!("✓ {}: {} outputs synchronized", entry.name, outputs_copied);
                }
                PairOutcome::Validated { report } => {
                    if report.all_passed() {
                        info!("PASS: {}", entry.name);
                    } else {
                        warn!("ISSUES: {} ({})", entry.name, report.summary());
                        for issue in report.issues() {
                            warn!("  {}", issue);
                        }
                    }
                }
                PairOutcome::Failed { error } => {
                    error!("ERROR: {} - {}", entry.name, error);
                }
            }
        }

        info!("{}", "=".repeat(60));
        info!(
            "Summary: {} files processed, {} skipped, {} failed",
            self.processed(),
            self.skipped(),
            self.failed()
        );

        let has_synced = self
            .entries
            .iter()
            .any(|e| matches!(e.outcome, PairOutcome::Synced { .. }));
        if has_synced {
            info!("Total outputs synchronized: {}", self.outputs_copied());
        }

        let has_validated = self
            .entries
            .iter()
            .any(|e| matches!(e.outcome, PairOutcome::Validated { .. }));
        if has_validated {
            info!(
                "Files passed: {}, files with issues: {}",
                self.passed(),
                self.with_issues()
            );
        }
    }

    /// Serialize the report for automation consumers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&serde_json::json!({
            "summary": {
                "processed": self.processed(),
                "passed": self.passed(),
                "with_issues": self.with_issues(),
                "skipped": self.skipped(),
                "failed": self.failed(),
                "outputs_copied": self.outputs_copied(),
            },
            "files": &self.entries,
        }))
    }
}

/// Main application controller for notebook reconciliation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Check battery shared across pairs
    validation: ValidationService,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let validation = ValidationService::with_config(config.validation.clone());
        Ok(Self { config, validation })
    }

    /// Run one batch over every discovered document pair.
    ///
    /// Pairs are processed strictly one at a time; a pair that fails is
    /// recorded and the batch moves on. Only discovery itself can abort
    /// the whole run.
    pub fn run(&self, mode: RunMode) -> Result<BatchReport> {
        let originals = FileManager::find_notebooks(&self.config.source_dir, &self.config.patterns)
            .with_context(|| {
                format!(
                    "Failed to scan source directory: {:?}",
                    self.config.source_dir
                )
            })?;

        if originals.is_empty() {
            warn!(
                "No notebooks matched {:?} in {:?}",
                self.config.patterns, self.config.source_dir
            );
        }

        debug!("Discovered {} notebook(s)", originals.len());

        let progress = ProgressBar::new(originals.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut entries = Vec::with_capacity(originals.len());
        for original_path in &originals {
            let name = original_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            progress.set_message(name.clone());

            let outcome = self.process_pair(mode, original_path, &name);
            entries.push(PairResult { name, outcome });
            progress.inc(1);
        }
        progress.finish_and_clear();

        Ok(BatchReport { entries })
    }

    /// Resolve the counterpart and run one pair, converting errors into a
    /// recorded outcome so the batch continues.
    fn process_pair(&self, mode: RunMode, original_path: &Path, name: &str) -> PairOutcome {
        let translated_path = self.config.translated_dir.join(name);

        if !FileManager::file_exists(&translated_path) {
            return PairOutcome::Skipped {
                reason: "translated version not found".to_string(),
            };
        }

        match self.reconcile_pair(mode, original_path, &translated_path) {
            Ok(outcome) => outcome,
            Err(e) => PairOutcome::Failed {
                error: e.to_string(),
            },
        }
    }

    fn reconcile_pair(
        &self,
        mode: RunMode,
        original_path: &Path,
        translated_path: &Path,
    ) -> Result<PairOutcome> {
        let original = Notebook::load(original_path)?;
        let mut translated = Notebook::load(translated_path)?;

        match mode {
            RunMode::Sync => {
                let outputs_copied = OutputSynchronizer::synchronize(&original, &mut translated);
                // Unconditional full rewrite, untouched cells included
                translated.save(translated_path)?;
                debug!(
                    "Synced {:?}: {} outputs copied",
                    translated_path, outputs_copied
                );
                Ok(PairOutcome::Synced { outputs_copied })
            }
            RunMode::Validate => {
                let report = self.validation.validate(&original, &translated);
                Ok(PairOutcome::Validated { report })
            }
        }
    }
}
