/*!
 * Common test utilities for the nbsync test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Builds a code cell value in notebook wire format
pub fn code_cell_json(source: &[&str], outputs: Vec<Value>, execution_count: Value) -> Value {
    json!({
        "cell_type": "code",
        "source": source,
        "outputs": outputs,
        "execution_count": execution_count,
        "metadata": {},
    })
}

/// Builds a markdown cell value in notebook wire format
pub fn markdown_cell_json(source: &[&str]) -> Value {
    json!({
        "cell_type": "markdown",
        "source": source,
        "metadata": {},
    })
}

/// Builds a complete notebook value with the given cells and kernel name
pub fn notebook_json(cells: Vec<Value>, kernel: &str) -> Value {
    json!({
        "cells": cells,
        "metadata": {
            "kernelspec": {
                "name": kernel,
                "display_name": kernel,
            },
            "language_info": {"name": "python"},
        },
        "nbformat": 4,
        "nbformat_minor": 5,
    })
}

/// Writes a notebook value to a file in the given directory
pub fn write_notebook(dir: &Path, filename: &str, notebook: &Value) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, serde_json::to_string_pretty(notebook)?)?;
    Ok(file_path)
}
