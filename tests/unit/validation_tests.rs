/*!
 * Tests for the validation check battery
 */

use anyhow::Result;
use serde_json::{json, Value};
use nbsync::notebook::Notebook;
use nbsync::validation::{CheckName, CheckStatus, ValidationService};
use crate::common;

fn load_pair(original: &Value, translated: &Value) -> Result<(Notebook, Notebook)> {
    let temp_dir = common::create_temp_dir()?;
    let orig_path = common::write_notebook(temp_dir.path(), "original.ipynb", original)?;
    let trans_path = common::write_notebook(temp_dir.path(), "translated.ipynb", translated)?;
    Ok((Notebook::load(&orig_path)?, Notebook::load(&trans_path)?))
}

/// Five original cells against four translated ones: the count check fails
/// recording both counts, and the positional checks only cover the aligned
/// prefix, so the divergent fifth cell raises nothing else.
#[test]
fn test_validate_withCountMismatch_shouldTruncateOtherChecks() -> Result<()> {
    let shared = vec![
        common::code_cell_json(&["x = 1\n"], vec![json!({"output_type": "stream"})], json!(1)),
        common::markdown_cell_json(&["# Intro\n"]),
        common::code_cell_json(&["y = 2\n"], vec![], Value::Null),
        common::markdown_cell_json(&["Closing words.\n"]),
    ];

    let mut original_cells = shared.clone();
    // The extra original cell diverges in every way; it must stay invisible
    original_cells.push(common::code_cell_json(
        &["z = 3\n"],
        vec![json!({"output_type": "stream"})],
        json!(5),
    ));

    let mut translated_cells = shared;
    translated_cells[1] = common::markdown_cell_json(&["# Introduction\n"]);
    translated_cells[3] = common::markdown_cell_json(&["Mot de la fin.\n"]);

    let original = common::notebook_json(original_cells, "python3");
    let translated = common::notebook_json(translated_cells, "python3");
    let (original, translated) = load_pair(&original, &translated)?;

    let report = ValidationService::new().validate(&original, &translated);

    let count = report.outcome(CheckName::CellCount).unwrap();
    assert_eq!(count.status, CheckStatus::Failed);
    assert!(count.issues[0].contains("original=5"));
    assert!(count.issues[0].contains("translated=4"));

    assert!(report.outcome(CheckName::KindAlignment).unwrap().is_passed());
    assert!(report.outcome(CheckName::CodeIdentity).unwrap().is_passed());
    assert!(report.outcome(CheckName::OutputsPresence).unwrap().is_passed());

    Ok(())
}

/// All markdown cells identical with at least one non-empty: a single
/// aggregate coverage warning.
#[test]
fn test_validate_withUntranslatedMarkdown_shouldWarnOnce() -> Result<()> {
    let cells = vec![
        common::markdown_cell_json(&["# Same heading\n"]),
        common::code_cell_json(&["x = 1\n"], vec![], Value::Null),
        common::markdown_cell_json(&["Same body text.\n"]),
    ];
    let original = common::notebook_json(cells.clone(), "python3");
    let translated = common::notebook_json(cells, "python3");
    let (original, translated) = load_pair(&original, &translated)?;

    let report = ValidationService::new().validate(&original, &translated);

    let coverage = report.outcome(CheckName::TranslationCoverage).unwrap();
    assert_eq!(coverage.status, CheckStatus::Warned);
    assert_eq!(coverage.issues.len(), 1);
    assert!(coverage.issues[0].contains("All 2"));

    Ok(())
}

/// A one-character code difference in a 40-character cell: the identity
/// check fails and the issue carries both full texts.
#[test]
fn test_validate_withShortCodeDrift_shouldIncludeFullExcerpts() -> Result<()> {
    let orig_text = "result = model.fit(train_x, train_y)  #A";
    let trans_text = "result = model.fit(train_x, train_y)  #B";
    assert_eq!(orig_text.len(), 40);

    let original = common::notebook_json(
        vec![common::code_cell_json(&[orig_text], vec![], Value::Null)],
        "python3",
    );
    let translated = common::notebook_json(
        vec![common::code_cell_json(&[trans_text], vec![], Value::Null)],
        "python3",
    );
    let (original, translated) = load_pair(&original, &translated)?;

    let report = ValidationService::new().validate(&original, &translated);

    let identity = report.outcome(CheckName::CodeIdentity).unwrap();
    assert_eq!(identity.status, CheckStatus::Failed);
    assert!(identity.issues.iter().any(|i| i.contains(orig_text)));
    assert!(identity.issues.iter().any(|i| i.contains(trans_text)));

    Ok(())
}

/// A failure injected into one check leaves every sibling's outcome alone.
#[test]
fn test_validate_withInjectedMetadataFailure_shouldNotAffectSiblings() -> Result<()> {
    let cells = vec![
        common::code_cell_json(&["x = 1\n"], vec![json!({"output_type": "stream"})], json!(1)),
        common::markdown_cell_json(&["# Heading\n"]),
    ];
    let translated_cells = vec![
        common::code_cell_json(&["x = 1\n"], vec![json!({"output_type": "stream"})], json!(1)),
        common::markdown_cell_json(&["# Überschrift\n"]),
    ];
    let original = common::notebook_json(cells.clone(), "python3");
    let translated = common::notebook_json(translated_cells.clone(), "python3");
    let (original, translated) = load_pair(&original, &translated)?;

    let baseline = ValidationService::new().validate(&original, &translated);

    // Same pair, but metadata malformed so the metadata check errors
    let broken = json!({
        "cells": cells.clone(),
        "metadata": {"kernelspec": {"name": ["not", "a", "string"]}},
    });
    let translated_doc = common::notebook_json(translated_cells, "python3");
    let (broken_original, translated2) = load_pair(&broken, &translated_doc)?;

    let poisoned = ValidationService::new().validate(&broken_original, &translated2);

    let metadata = poisoned.outcome(CheckName::Metadata).unwrap();
    assert_eq!(metadata.status, CheckStatus::Failed);

    for name in CheckName::all() {
        if name == CheckName::Metadata {
            continue;
        }
        let before = baseline.outcome(name).unwrap();
        let after = poisoned.outcome(name).unwrap();
        assert_eq!(before.status, after.status, "check {:?} drifted", name);
        assert_eq!(before.issues, after.issues, "check {:?} drifted", name);
    }

    Ok(())
}

/// Missing outputs on the translated side fail the presence check with the
/// original's output count.
#[test]
fn test_validate_withMissingOutputs_shouldRecordOriginalCount() -> Result<()> {
    let original = common::notebook_json(
        vec![common::code_cell_json(
            &["plot()\n"],
            vec![json!({"output_type": "display_data"}), json!({"output_type": "stream"})],
            json!(4),
        )],
        "python3",
    );
    let translated = common::notebook_json(
        vec![common::code_cell_json(&["plot()\n"], vec![], Value::Null)],
        "python3",
    );
    let (original, translated) = load_pair(&original, &translated)?;

    let report = ValidationService::new().validate(&original, &translated);

    let outputs = report.outcome(CheckName::OutputsPresence).unwrap();
    assert_eq!(outputs.status, CheckStatus::Failed);
    assert!(outputs.issues[0].contains("2 outputs missing"));

    Ok(())
}

/// Kernel drift between the two documents is a warning, never a failure.
#[test]
fn test_validate_withKernelDrift_shouldWarn() -> Result<()> {
    let cells = vec![common::code_cell_json(&["x = 1\n"], vec![], Value::Null)];
    let original = common::notebook_json(cells.clone(), "python3");
    let translated = common::notebook_json(cells, "ir");
    let (original, translated) = load_pair(&original, &translated)?;

    let report = ValidationService::new().validate(&original, &translated);

    let metadata = report.outcome(CheckName::Metadata).unwrap();
    assert_eq!(metadata.status, CheckStatus::Warned);
    assert!(metadata.issues[0].contains("python3"));
    assert!(metadata.issues[0].contains("ir"));
    assert!(report.failed_checks().is_empty());

    Ok(())
}
