//! Percent identity over the aligned region.
//!
//! Identity is `round(matches * 100 / columns)` where every column counts:
//! mismatches and gaps in either sequence are all non-matches. Dividing by
//! the alignment length rather than either sequence length keeps the value
//! in `[0, 100]`.

use crate::alignment::engine::{AlignConfig, AlignmentEngine, AlignmentTrace};
use crate::alignment::AlignError;
use crate::core::types::{AlignMode, EditOp, EqualityRules};

/// Identity from an end-to-end alignment of `first` against `second`.
///
/// # Errors
///
/// Returns `AlignError::EmptySequence` if either sequence is empty.
pub fn global_percent_identity<E: AlignmentEngine + ?Sized>(
    engine: &E,
    first: &[u8],
    second: &[u8],
    equalities: &EqualityRules,
) -> Result<u32, AlignError> {
    percent_identity(engine, first, second, AlignMode::Global, equalities)
}

/// Identity from an infix alignment (`first` located inside `second`).
///
/// # Errors
///
/// Returns `AlignError::EmptySequence` if either sequence is empty.
pub fn infix_percent_identity<E: AlignmentEngine + ?Sized>(
    engine: &E,
    first: &[u8],
    second: &[u8],
    equalities: &EqualityRules,
) -> Result<u32, AlignError> {
    percent_identity(engine, first, second, AlignMode::Infix, equalities)
}

/// # Errors
///
/// Returns `AlignError::EmptySequence` if either sequence is empty.
pub fn percent_identity<E: AlignmentEngine + ?Sized>(
    engine: &E,
    first: &[u8],
    second: &[u8],
    mode: AlignMode,
    equalities: &EqualityRules,
) -> Result<u32, AlignError> {
    let config = AlignConfig::new(mode, equalities.clone());
    let trace = engine.align(first, second, &config)?;
    trace_identity(&trace)
}

/// Identity of an existing full-path trace.
///
/// # Errors
///
/// Returns `AlignError::Trace` if the trace has no path.
pub fn trace_identity(trace: &AlignmentTrace) -> Result<u32, AlignError> {
    let columns = trace.operations()?.len();
    Ok(identity_from_counts(trace.count(EditOp::Match), columns))
}

/// Rounded percentage of matching columns; 0 for an empty alignment
#[must_use]
pub fn identity_from_counts(matches: usize, columns: usize) -> u32 {
    if columns == 0 {
        return 0;
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )] // Percentage 0-100
    {
        ((matches as f64 * 100.0) / columns as f64).round() as u32
    }
}
