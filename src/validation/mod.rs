/*!
 * Validation module for translation reconciliation.
 *
 * This module runs a fixed battery of independent checks over an aligned
 * notebook pair:
 * - Cell count agreement
 * - Cell kind alignment at every position
 * - Byte identity of code cell sources
 * - Markdown translation coverage (degenerate all-identical detection)
 * - Output presence on translated code cells
 * - Kernel metadata agreement
 *
 * # Architecture
 *
 * - `outcome`: unified per-check result types and the pair report
 * - `structure`: cell count and kind alignment checks
 * - `content`: code identity and translation coverage checks
 * - `outputs`: output presence check
 * - `metadata`: kernel metadata check
 * - `service`: orchestrates all checks with per-check fault isolation
 */

pub mod outcome;
pub mod structure;
pub mod content;
pub mod outputs;
pub mod metadata;
pub mod service;

// Re-export main types
pub use outcome::{CheckName, CheckOutcome, CheckStatus, ValidationReport};
pub use service::{ValidationConfig, ValidationService};
