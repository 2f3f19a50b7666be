/*!
 * Structural checks: cell counts and kind alignment.
 */

use anyhow::Result;

use crate::notebook::Notebook;

use super::outcome::{CheckName, CheckOutcome};

/// Fail when the two notebooks disagree on cell count.
pub fn check_cell_count(original: &Notebook, translated: &Notebook) -> Result<CheckOutcome> {
    let orig_count = original.cell_count();
    let trans_count = translated.cell_count();

    if orig_count != trans_count {
        return Ok(CheckOutcome::failed(
            CheckName::CellCount,
            vec![format!(
                "Cell count mismatch: original={}, translated={}",
                orig_count, trans_count
            )],
        ));
    }

    Ok(CheckOutcome::passed(CheckName::CellCount))
}

/// Fail when any aligned position carries differing cell kinds.
///
/// The walk covers the zipped sequence, so indices past the shorter
/// notebook are never compared here; the count check reports that case.
pub fn check_kind_alignment(original: &Notebook, translated: &Notebook) -> Result<CheckOutcome> {
    let mut issues = Vec::new();

    for (i, (orig_cell, trans_cell)) in original.cells.iter().zip(&translated.cells).enumerate() {
        if orig_cell.cell_type != trans_cell.cell_type {
            issues.push(format!(
                "Cell {}: {} -> {}",
                i, orig_cell.cell_type, trans_cell.cell_type
            ));
        }
    }

    if issues.is_empty() {
        Ok(CheckOutcome::passed(CheckName::KindAlignment))
    } else {
        Ok(CheckOutcome::failed(CheckName::KindAlignment, issues))
    }
}
