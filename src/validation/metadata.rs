/*!
 * Kernel metadata check.
 */

use anyhow::{bail, Result};
use serde_json::Value;

use crate::notebook::Notebook;

use super::outcome::{CheckName, CheckOutcome};

/// Warn when both documents name a kernel and the names differ.
///
/// This never fails hard; a kernel mismatch is suspicious but does not
/// invalidate the translation. A malformed `kernelspec.name` (wrong JSON
/// type) is an error and surfaces through the service's fault isolation.
pub fn check_metadata(original: &Notebook, translated: &Notebook) -> Result<CheckOutcome> {
    let orig_kernel = kernel_name(original)?;
    let trans_kernel = kernel_name(translated)?;

    if let (Some(orig), Some(trans)) = (orig_kernel, trans_kernel) {
        if !orig.is_empty() && !trans.is_empty() && orig != trans {
            return Ok(CheckOutcome::warned(
                CheckName::Metadata,
                vec![format!("Kernel mismatch: {} vs {}", orig, trans)],
            ));
        }
    }

    Ok(CheckOutcome::passed(CheckName::Metadata))
}

/// Kernel identifier from `metadata.kernelspec.name`, if any.
fn kernel_name(notebook: &Notebook) -> Result<Option<&str>> {
    match notebook.metadata.pointer("/kernelspec/name") {
        None => Ok(None),
        Some(Value::String(name)) => Ok(Some(name)),
        Some(other) => bail!("metadata.kernelspec.name has unexpected type: {}", other),
    }
}
