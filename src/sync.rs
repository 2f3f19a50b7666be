/*!
 * Output synchronization between notebook pairs.
 *
 * Copies computed outputs and execution counts from an original notebook
 * onto the positionally corresponding cells of its translated counterpart,
 * leaving all translated text content alone.
 */

use log::{debug, warn};

use crate::notebook::Notebook;

/// Synchronizes outputs from an original notebook into a translated one.
pub struct OutputSynchronizer;

impl OutputSynchronizer {
    /// Copy outputs and execution counts across the positional alignment.
    ///
    /// Cells are paired by index up to the shorter notebook's length; a
    /// count mismatch is logged and processing continues over the aligned
    /// prefix. Only code-to-code pairs are touched. An original cell with
    /// no outputs leaves the translated cell's outputs as they are.
    ///
    /// Returns the number of cells whose outputs were copied; execution
    /// count copies do not contribute to the count.
    pub fn synchronize(original: &Notebook, translated: &mut Notebook) -> usize {
        let original_count = original.cell_count();
        let translated_count = translated.cell_count();

        if original_count != translated_count {
            warn!(
                "Cell count mismatch: original has {}, translated has {}; syncing the first {} cells only",
                original_count,
                translated_count,
                original_count.min(translated_count)
            );
        }

        let mut outputs_copied = 0;

        for (orig_cell, trans_cell) in original.cells.iter().zip(translated.cells.iter_mut()) {
            // Only code cells carry outputs
            if !orig_cell.is_code() || !trans_cell.is_code() {
                continue;
            }

            if orig_cell.has_outputs() {
                trans_cell.outputs = orig_cell.outputs.clone();
                outputs_copied += 1;
            }

            // An execution count is copied whenever the key is present,
            // explicit null included
            if let Some(count) = orig_cell.execution_count {
                trans_cell.execution_count = Some(count);
            }
        }

        debug!("Synchronized {} cell outputs", outputs_copied);
        outputs_copied
    }
}
