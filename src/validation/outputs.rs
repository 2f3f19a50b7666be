/*!
 * Output presence check.
 */

use anyhow::Result;

use crate::notebook::Notebook;

use super::outcome::{CheckName, CheckOutcome};

/// Fail when an original code cell has outputs the translated cell lost.
///
/// This is a structural assertion about the translated document as it
/// stands at validation time, whether or not a sync has run.
pub fn check_outputs_presence(original: &Notebook, translated: &Notebook) -> Result<CheckOutcome> {
    let mut issues = Vec::new();

    for (i, (orig_cell, trans_cell)) in original.cells.iter().zip(&translated.cells).enumerate() {
        if !orig_cell.is_code() || !trans_cell.is_code() {
            continue;
        }

        if orig_cell.has_outputs() && trans_cell.output_count() == 0 {
            issues.push(format!(
                "Cell {}: {} outputs missing",
                i,
                orig_cell.output_count()
            ));
        }
    }

    if issues.is_empty() {
        Ok(CheckOutcome::passed(CheckName::OutputsPresence))
    } else {
        Ok(CheckOutcome::failed(CheckName::OutputsPresence, issues))
    }
}
