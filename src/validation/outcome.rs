/*!
 * Unified check outcome types.
 *
 * Each check yields exactly one `CheckOutcome` carrying a status and the
 * issues that justify it, so the status and the issue list cannot drift
 * apart the way separate pass/fail flags and a shared issue log can.
 */

use std::fmt;

use serde::Serialize;

/// Identity of a validation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckName {
    /// Both notebooks have the same number of cells
    CellCount,
    /// Every aligned position has the same cell kind
    KindAlignment,
    /// Aligned code cells have byte-identical source
    CodeIdentity,
    /// Markdown cells show evidence of having been translated
    TranslationCoverage,
    /// Translated code cells kept the outputs the original has
    OutputsPresence,
    /// Kernel metadata agrees between the two documents
    Metadata,
}

impl CheckName {
    /// All checks, in execution and reporting order.
    pub fn all() -> [CheckName; 6] {
        [
            Self::CellCount,
            Self::KindAlignment,
            Self::CodeIdentity,
            Self::TranslationCoverage,
            Self::OutputsPresence,
            Self::Metadata,
        ]
    }

    /// Human-readable check label for reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CellCount => "Cell count",
            Self::KindAlignment => "Cell kinds",
            Self::CodeIdentity => "Code cells",
            Self::TranslationCoverage => "Markdown translation",
            Self::OutputsPresence => "Outputs present",
            Self::Metadata => "Metadata",
        }
    }
}

impl fmt::Display for CheckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Severity of a completed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Check found nothing to report
    Passed,
    /// Check found a suspicious but tolerable condition
    Warned,
    /// Check found a hard violation
    Failed,
}

/// Result of one check over a document pair.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    /// Which check produced this outcome
    pub name: CheckName,
    /// Severity of the outcome
    pub status: CheckStatus,
    /// Issue descriptions justifying a non-passed status
    pub issues: Vec<String>,
}

impl CheckOutcome {
    /// A clean pass; carries no issues.
    pub fn passed(name: CheckName) -> Self {
        Self {
            name,
            status: CheckStatus::Passed,
            issues: vec![],
        }
    }

    /// A warning-level outcome; `issues` must explain why.
    pub fn warned(name: CheckName, issues: Vec<String>) -> Self {
        debug_assert!(!issues.is_empty());
        Self {
            name,
            status: CheckStatus::Warned,
            issues,
        }
    }

    /// A failing outcome; `issues` must explain why.
    pub fn failed(name: CheckName, issues: Vec<String>) -> Self {
        debug_assert!(!issues.is_empty());
        Self {
            name,
            status: CheckStatus::Failed,
            issues,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.status == CheckStatus::Passed
    }
}

/// Complete validation report for one document pair.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// One outcome per check, in `CheckName::all()` order
    pub outcomes: Vec<CheckOutcome>,
}

impl ValidationReport {
    /// Whether every check passed cleanly.
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::is_passed)
    }

    /// Whether any check warned or failed.
    pub fn has_issues(&self) -> bool {
        !self.all_passed()
    }

    /// Total number of recorded issue lines.
    pub fn issue_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.issues.len()).sum()
    }

    /// Names of checks that failed hard.
    pub fn failed_checks(&self) -> Vec<CheckName> {
        self.outcomes
            .iter()
            .filter(|o| o.status == CheckStatus::Failed)
            .map(|o| o.name)
            .collect()
    }

    /// All issue lines across checks, in check order.
    pub fn issues(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .flat_map(|o| o.issues.iter().map(String::as_str))
    }

    /// Look up the outcome of a single check.
    pub fn outcome(&self, name: CheckName) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        let passed = self.outcomes.iter().filter(|o| o.is_passed()).count();
        format!(
            "{}/{} checks passed, {} issues",
            passed,
            self.outcomes.len(),
            self.issue_count()
        )
    }
}
