/*!
 * End-to-end batch reconciliation tests
 */

use std::fs;
use anyhow::Result;
use serde_json::{json, Value};
use nbsync::app_config::Config;
use nbsync::app_controller::{Controller, PairOutcome, RunMode};
use nbsync::notebook::Notebook;
use crate::common;

fn batch_config(source_dir: &std::path::Path, translated_dir: &std::path::Path) -> Config {
    Config {
        source_dir: source_dir.to_path_buf(),
        translated_dir: translated_dir.to_path_buf(),
        patterns: vec!["*".to_string()],
        ..Default::default()
    }
}

/// A sync batch records one outcome per discovered pair: synced where the
/// counterpart exists, skipped where it does not, failed where it is
/// malformed, and the batch always runs to completion.
#[test]
fn test_syncBatch_withMixedPairs_shouldRecordEachOutcome() -> Result<()> {
    let source = common::create_temp_dir()?;
    let translated = common::create_temp_dir()?;

    let good = common::notebook_json(
        vec![common::code_cell_json(
            &["x = 1\n"],
            vec![json!({"output_type": "stream", "text": ["done\n"]})],
            json!(1),
        )],
        "python3",
    );
    let empty_outputs = common::notebook_json(
        vec![common::code_cell_json(&["x = 1\n"], vec![], Value::Null)],
        "python3",
    );

    common::write_notebook(source.path(), "10_good.ipynb", &good)?;
    common::write_notebook(translated.path(), "10_good.ipynb", &empty_outputs)?;

    common::write_notebook(source.path(), "11_broken.ipynb", &good)?;
    common::create_test_file(translated.path(), "11_broken.ipynb", "{not valid json")?;

    common::write_notebook(source.path(), "12_lonely.ipynb", &good)?;

    let controller = Controller::with_config(batch_config(source.path(), translated.path()))?;
    let report = controller.run(RunMode::Sync)?;

    assert_eq!(report.entries.len(), 3);
    assert_eq!(report.processed(), 1);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.skipped(), 1);
    assert_eq!(report.outputs_copied(), 1);

    assert!(matches!(
        report.entries[0].outcome,
        PairOutcome::Synced { outputs_copied: 1 }
    ));
    assert!(matches!(report.entries[1].outcome, PairOutcome::Failed { .. }));
    assert!(matches!(report.entries[2].outcome, PairOutcome::Skipped { .. }));

    // The translated file was rewritten with the copied outputs
    let rewritten = Notebook::load(translated.path().join("10_good.ipynb"))?;
    assert_eq!(rewritten.cells[0].output_count(), 1);
    assert_eq!(rewritten.cells[0].execution_count, Some(Some(1)));

    Ok(())
}

/// Running the sync twice leaves the translated file byte-identical.
#[test]
fn test_syncBatch_twice_shouldBeIdempotentOnDisk() -> Result<()> {
    let source = common::create_temp_dir()?;
    let translated = common::create_temp_dir()?;

    let original = common::notebook_json(
        vec![
            common::code_cell_json(&["a = 1\n"], vec![json!({"output_type": "stream"})], json!(3)),
            common::markdown_cell_json(&["# Titel\n"]),
        ],
        "python3",
    );
    let counterpart = common::notebook_json(
        vec![
            common::code_cell_json(&["a = 1\n"], vec![], Value::Null),
            common::markdown_cell_json(&["# Titre\n"]),
        ],
        "python3",
    );

    common::write_notebook(source.path(), "nb.ipynb", &original)?;
    let trans_path = common::write_notebook(translated.path(), "nb.ipynb", &counterpart)?;

    let controller = Controller::with_config(batch_config(source.path(), translated.path()))?;

    controller.run(RunMode::Sync)?;
    let first = fs::read(&trans_path)?;

    controller.run(RunMode::Sync)?;
    let second = fs::read(&trans_path)?;

    assert_eq!(first, second);

    // Translated prose survived both rewrites
    let notebook = Notebook::load(&trans_path)?;
    assert_eq!(notebook.cells[1].source_text(), "# Titre\n");

    Ok(())
}

/// A validate batch is read-only and sorts pairs into passed and with-issues.
#[test]
fn test_validateBatch_shouldCountPassedAndIssues() -> Result<()> {
    let source = common::create_temp_dir()?;
    let translated = common::create_temp_dir()?;

    let clean_orig = common::notebook_json(
        vec![
            common::code_cell_json(&["x = 1\n"], vec![], Value::Null),
            common::markdown_cell_json(&["# Heading\n"]),
        ],
        "python3",
    );
    let clean_trans = common::notebook_json(
        vec![
            common::code_cell_json(&["x = 1\n"], vec![], Value::Null),
            common::markdown_cell_json(&["# Rubrik\n"]),
        ],
        "python3",
    );
    common::write_notebook(source.path(), "20_clean.ipynb", &clean_orig)?;
    common::write_notebook(translated.path(), "20_clean.ipynb", &clean_trans)?;

    // Code drift makes this pair fail the identity check
    let drift_trans = common::notebook_json(
        vec![
            common::code_cell_json(&["x = 2\n"], vec![], Value::Null),
            common::markdown_cell_json(&["# Rubrik\n"]),
        ],
        "python3",
    );
    common::write_notebook(source.path(), "21_drift.ipynb", &clean_orig)?;
    common::write_notebook(translated.path(), "21_drift.ipynb", &drift_trans)?;

    let before = fs::read(translated.path().join("21_drift.ipynb"))?;

    let controller = Controller::with_config(batch_config(source.path(), translated.path()))?;
    let report = controller.run(RunMode::Validate)?;

    assert_eq!(report.processed(), 2);
    assert_eq!(report.passed(), 1);
    assert_eq!(report.with_issues(), 1);

    // Validation never rewrites files
    let after = fs::read(translated.path().join("21_drift.ipynb"))?;
    assert_eq!(before, after);

    Ok(())
}

/// The JSON report carries the summary and one entry per file.
#[test]
fn test_jsonReport_shouldExposeSummaryAndFiles() -> Result<()> {
    let source = common::create_temp_dir()?;
    let translated = common::create_temp_dir()?;

    let nb = common::notebook_json(
        vec![common::code_cell_json(&["x\n"], vec![json!(1)], json!(1))],
        "python3",
    );
    common::write_notebook(source.path(), "nb.ipynb", &nb)?;
    common::write_notebook(translated.path(), "nb.ipynb", &nb)?;

    let controller = Controller::with_config(batch_config(source.path(), translated.path()))?;
    let report = controller.run(RunMode::Sync)?;

    let json: Value = serde_json::from_str(&report.to_json()?)?;

    assert_eq!(json["summary"]["processed"], json!(1));
    assert_eq!(json["summary"]["outputs_copied"], json!(1));
    assert_eq!(json["files"][0]["name"], json!("nb.ipynb"));
    assert_eq!(json["files"][0]["status"], json!("synced"));

    Ok(())
}
