//! Rebuild a single aligned string from an infix trace.
//!
//! The trace only says where the alignment *ends* in the target, so the walk
//! runs in two passes:
//!
//! 1. Rewind: start the target cursor on the end location and step it back
//!    once per target-consuming column (everything but INSERT). The cursor
//!    now sits just before the first aligned target symbol.
//! 2. Forward: emit the target prefix up to the cursor, then replay every
//!    column, then the target suffix after the cursor.
//!
//! DELETE, MATCH and MISMATCH emit the target symbol, INSERT emits the query
//! symbol. The forward pass must land back on the end location.

use crate::alignment::engine::AlignmentTrace;
use crate::alignment::{signed, symbol_at, Side, TraceError};
use crate::core::types::EditOp;

/// Target symbols threaded with query-only insertions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlignedString {
    bytes: Vec<u8>,
}

impl AlignedString {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl std::fmt::Display for AlignedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}

/// Target index immediately before the first aligned target symbol; -1 when
/// the alignment starts on the first target symbol.
///
/// # Errors
///
/// Returns `TraceError::MissingPath` if the trace has no operations.
pub fn rewind_target_cursor(trace: &AlignmentTrace) -> Result<isize, TraceError> {
    let consumed = trace
        .operations()?
        .iter()
        .filter(|op| op.consumes_target())
        .count();
    Ok(signed(trace.target_end) - 1 - signed(consumed))
}

/// Merge `query` into `target` along `trace`.
///
/// # Errors
///
/// Returns `TraceError::MissingPath` without operations,
/// `TraceError::CursorOutOfBounds` when a column points outside either
/// sequence, and `TraceError::EndMismatch` when the forward walk does not end
/// on the reported end location.
pub fn reconstruct(
    query: &[u8],
    target: &[u8],
    trace: &AlignmentTrace,
) -> Result<AlignedString, TraceError> {
    let operations = trace.operations()?;
    let mut t_idx = rewind_target_cursor(trace)?;
    let mut q_idx: isize = -1;

    let mut bytes = Vec::with_capacity(target.len() + operations.len());

    // Leading flank, target[0..=t_idx]
    if t_idx >= 0 {
        let prefix_end = usize::try_from(t_idx + 1).unwrap_or(0);
        let prefix = target
            .get(..prefix_end)
            .ok_or(TraceError::CursorOutOfBounds {
                side: Side::Target,
                index: t_idx,
                len: target.len(),
            })?;
        bytes.extend_from_slice(prefix);
    }

    for op in operations {
        match op {
            EditOp::Delete => {
                t_idx += 1;
                bytes.push(symbol_at(target, t_idx, Side::Target)?);
            }
            EditOp::Insert => {
                q_idx += 1;
                bytes.push(symbol_at(query, q_idx, Side::Query)?);
            }
            EditOp::Match | EditOp::Mismatch => {
                t_idx += 1;
                q_idx += 1;
                symbol_at(query, q_idx, Side::Query)?;
                bytes.push(symbol_at(target, t_idx, Side::Target)?);
            }
        }
    }

    let expected = signed(trace.target_end) - 1;
    if t_idx != expected {
        return Err(TraceError::EndMismatch {
            expected: trace.target_end.saturating_sub(1),
            actual: t_idx,
        });
    }

    // Trailing flank, target(t_idx..]
    let suffix_start = usize::try_from(t_idx + 1).unwrap_or(0);
    if let Some(suffix) = target.get(suffix_start..) {
        bytes.extend_from_slice(suffix);
    }

    Ok(AlignedString { bytes })
}
