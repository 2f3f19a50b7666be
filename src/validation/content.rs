/*!
 * Content checks: code identity and markdown translation coverage.
 */

use anyhow::Result;

use crate::notebook::Notebook;

use super::outcome::{CheckName, CheckOutcome};

/// Fail when aligned code cells differ in their concatenated source.
///
/// When the original source is shorter than `excerpt_limit` characters the
/// issue carries both texts inline for diagnosis, the translated side
/// truncated to the limit.
pub fn check_code_identity(
    original: &Notebook,
    translated: &Notebook,
    excerpt_limit: usize,
) -> Result<CheckOutcome> {
    let mut issues = Vec::new();

    for (i, (orig_cell, trans_cell)) in original.cells.iter().zip(&translated.cells).enumerate() {
        if !orig_cell.is_code() || !trans_cell.is_code() {
            continue;
        }

        let orig_source = orig_cell.source_text();
        let trans_source = trans_cell.source_text();

        if orig_source != trans_source {
            issues.push(format!("Cell {}: code differs", i));
            if orig_source.chars().count() < excerpt_limit {
                issues.push(format!("  Original: {}", orig_source));
                issues.push(format!("  Translated: {}", truncate(&trans_source, excerpt_limit)));
            }
        }
    }

    if issues.is_empty() {
        Ok(CheckOutcome::passed(CheckName::CodeIdentity))
    } else {
        Ok(CheckOutcome::failed(CheckName::CodeIdentity, issues))
    }
}

/// Warn when every non-empty markdown cell is byte-identical on both sides.
///
/// Full identity is a strong signal that no translation happened at all.
/// Partial identity is deliberately not flagged; detecting individual
/// untranslated cells is outside this check's scope.
pub fn check_translation_coverage(
    original: &Notebook,
    translated: &Notebook,
) -> Result<CheckOutcome> {
    let mut non_empty = 0usize;
    let mut identical = 0usize;

    for (orig_cell, trans_cell) in original.cells.iter().zip(&translated.cells) {
        if !orig_cell.is_markdown() || !trans_cell.is_markdown() {
            continue;
        }

        let orig_source = orig_cell.source_text();
        if orig_source.trim().is_empty() {
            continue;
        }

        non_empty += 1;
        if orig_source == trans_cell.source_text() {
            identical += 1;
        }
    }

    if non_empty > 0 && identical == non_empty {
        return Ok(CheckOutcome::warned(
            CheckName::TranslationCoverage,
            vec![format!(
                "All {} non-empty markdown cells are identical (not translated?)",
                non_empty
            )],
        ));
    }

    Ok(CheckOutcome::passed(CheckName::TranslationCoverage))
}

fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
