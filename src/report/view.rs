//! Fixed-width three-row alignment view.
//!
//! ```text
//! T: AC-GT (0 - 3)
//!    || ||
//! Q: ACCGT (0 - 4)
//! ```
//!
//! Each block shows up to `width` columns. Gaps are drawn as `-`, the
//! marker row has `|` for MATCH only. Index ranges are the sequence indices
//! consumed by the block; a block that opens with a gap reports the cursor
//! position before it.

use crate::alignment::engine::AlignmentTrace;
use crate::alignment::reconstruct::rewind_target_cursor;
use crate::alignment::{symbol_at, Side, TraceError};
use crate::core::types::{AlignMode, EditOp};

/// Columns per block
pub const DEFAULT_VIEW_WIDTH: usize = 50;

/// Render `trace` of `query` against `target`.
///
/// # Errors
///
/// Returns `TraceError::MissingPath` without operations and
/// `TraceError::CursorOutOfBounds` if a column points outside a sequence.
pub fn render_alignment(
    query: &[u8],
    target: &[u8],
    trace: &AlignmentTrace,
    width: usize,
) -> Result<String, TraceError> {
    let operations = trace.operations()?;

    let mut t_idx = match trace.mode {
        AlignMode::Infix => rewind_target_cursor(trace)?,
        AlignMode::Global => -1,
    };
    let mut q_idx: isize = -1;
    let mut out = String::new();

    for block in operations.chunks(width.max(1)) {
        out.push_str("T: ");
        let mut start_t = t_idx;
        for (column, &op) in block.iter().enumerate() {
            if op == EditOp::Insert {
                out.push('-');
            } else {
                t_idx += 1;
                out.push(char::from(symbol_at(target, t_idx, Side::Target)?));
            }
            if column == 0 {
                start_t = t_idx;
            }
        }
        out.push_str(&format!(" ({} - {})\n", start_t.max(0), t_idx));

        out.push_str("   ");
        out.extend(
            block
                .iter()
                .map(|&op| if op == EditOp::Match { '|' } else { ' ' }),
        );
        out.push('\n');

        out.push_str("Q: ");
        let mut start_q = q_idx;
        for (column, &op) in block.iter().enumerate() {
            if op == EditOp::Delete {
                out.push('-');
            } else {
                q_idx += 1;
                out.push(char::from(symbol_at(query, q_idx, Side::Query)?));
            }
            if column == 0 {
                start_q = q_idx;
            }
        }
        out.push_str(&format!(" ({} - {})\n\n", start_q.max(0), q_idx));
    }

    Ok(out)
}
