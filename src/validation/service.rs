/*!
 * Validation service that orchestrates all checks.
 *
 * Runs the full check battery over a document pair with per-check fault
 * isolation: a check that errors internally is recorded as failed with the
 * error text and its siblings still run.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::notebook::Notebook;

use super::content;
use super::metadata;
use super::outcome::{CheckName, CheckOutcome, ValidationReport};
use super::outputs;
use super::structure;

/// Configuration for the validation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Whether to check cell counts
    #[serde(default = "default_true")]
    pub cell_count: bool,

    /// Whether to check kind alignment
    #[serde(default = "default_true")]
    pub kind_alignment: bool,

    /// Whether to check code cell identity
    #[serde(default = "default_true")]
    pub code_identity: bool,

    /// Whether to check markdown translation coverage
    #[serde(default = "default_true")]
    pub translation_coverage: bool,

    /// Whether to check output presence
    #[serde(default = "default_true")]
    pub outputs_presence: bool,

    /// Whether to check kernel metadata
    #[serde(default = "default_true")]
    pub metadata: bool,

    /// Below this many characters, differing code is excerpted inline
    #[serde(default = "default_code_excerpt_limit")]
    pub code_excerpt_limit: usize,
}

fn default_true() -> bool {
    true
}

fn default_code_excerpt_limit() -> usize {
    100
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            cell_count: true,
            kind_alignment: true,
            code_identity: true,
            translation_coverage: true,
            outputs_presence: true,
            metadata: true,
            code_excerpt_limit: default_code_excerpt_limit(),
        }
    }
}

/// Validation service for notebook translation pairs
pub struct ValidationService {
    config: ValidationConfig,
}

impl ValidationService {
    /// Create a new validation service with default configuration
    pub fn new() -> Self {
        Self::with_config(ValidationConfig::default())
    }

    /// Create a new validation service with custom configuration
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Run every check over the pair and collect one outcome per check.
    ///
    /// Checks never short-circuit each other; a disabled check reports a
    /// clean pass, and an erroring check reports a failure carrying the
    /// error text while the remaining checks still run.
    pub fn validate(&self, original: &Notebook, translated: &Notebook) -> ValidationReport {
        let mut outcomes = Vec::with_capacity(CheckName::all().len());

        for name in CheckName::all() {
            if !self.is_enabled(name) {
                outcomes.push(CheckOutcome::passed(name));
                continue;
            }

            let outcome = match self.run_check(name, original, translated) {
                Ok(outcome) => outcome,
                Err(e) => {
                    let error = ValidationError::CheckFailed {
                        check: name.display_name().to_string(),
                        message: e.to_string(),
                    };
                    CheckOutcome::failed(name, vec![error.to_string()])
                }
            };
            outcomes.push(outcome);
        }

        let report = ValidationReport { outcomes };
        debug!("Validation complete: {}", report.summary());
        report
    }

    fn run_check(
        &self,
        name: CheckName,
        original: &Notebook,
        translated: &Notebook,
    ) -> anyhow::Result<CheckOutcome> {
        match name {
            CheckName::CellCount => structure::check_cell_count(original, translated),
            CheckName::KindAlignment => structure::check_kind_alignment(original, translated),
            CheckName::CodeIdentity => {
                content::check_code_identity(original, translated, self.config.code_excerpt_limit)
            }
            CheckName::TranslationCoverage => {
                content::check_translation_coverage(original, translated)
            }
            CheckName::OutputsPresence => outputs::check_outputs_presence(original, translated),
            CheckName::Metadata => metadata::check_metadata(original, translated),
        }
    }

    fn is_enabled(&self, name: CheckName) -> bool {
        match name {
            CheckName::CellCount => self.config.cell_count,
            CheckName::KindAlignment => self.config.kind_alignment,
            CheckName::CodeIdentity => self.config.code_identity,
            CheckName::TranslationCoverage => self.config.translation_coverage,
            CheckName::OutputsPresence => self.config.outputs_presence,
            CheckName::Metadata => self.config.metadata,
        }
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new()
    }
}
