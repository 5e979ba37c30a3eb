//! Pairwise alignment: engine adapter, trace reconstruction, identity
//! estimates and the all-pairs driver.
//!
//! - [`AlignmentEngine`]: the call boundary to the external aligner
//! - [`BioAligner`]: the rust-bio backed engine
//! - [`reconstruct`]: rebuilds one merged string from an infix trace
//! - [`identity`]: percent identity from global and infix alignments
//! - [`PairwiseAligner`]: runs every unordered pair of a corpus
//!
//! ## Edit distance
//!
//! Alignments use unit costs: a MISMATCH, INSERT or DELETE costs 1, a MATCH
//! costs 0. Symbols are equal when they are the same byte or an
//! [`EqualityRules`] entry pairs them.
//!
//! ## Example
//!
//! ```rust
//! use pairalign::alignment::{AlignConfig, AlignmentEngine, BioAligner};
//! use pairalign::alignment::reconstruct::reconstruct;
//! use pairalign::core::types::{AlignMode, EqualityRules};
//!
//! let config = AlignConfig::new(AlignMode::Infix, EqualityRules::none());
//! let trace = BioAligner.align(b"CCC", b"AAACCCGGG", &config).unwrap();
//! assert_eq!(trace.edit_distance, 0);
//!
//! let aligned = reconstruct(b"CCC", b"AAACCCGGG", &trace).unwrap();
//! assert_eq!(aligned.as_bytes(), b"AAACCCGGG");
//! ```
//!
//! [`EqualityRules`]: crate::core::types::EqualityRules

use thiserror::Error;

pub mod engine;
pub mod identity;
pub mod pairwise;
pub mod reconstruct;

pub use engine::{AlignConfig, AlignmentEngine, AlignmentTrace, BioAligner};
pub use pairwise::{PairOutcome, PairwiseAligner, PairwiseConfig};

/// Which side of a pair a sequence is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Query,
    Target,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Query => write!(f, "query"),
            Self::Target => write!(f, "target"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AlignError {
    #[error("cannot align an empty {0} sequence")]
    EmptySequence(Side),

    #[error(transparent)]
    Trace(#[from] TraceError),
}

/// A trace that does not fit the sequences it claims to describe
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    #[error("alignment trace has no edit-operation path")]
    MissingPath,

    #[error("alignment trace moves the {side} cursor to {index}, outside a sequence of length {len}")]
    CursorOutOfBounds { side: Side, index: isize, len: usize },

    #[error("alignment trace ends at target index {actual}, expected the end location {expected}")]
    EndMismatch { expected: usize, actual: isize },
}

/// Bounds-checked symbol lookup for signed cursors
pub(crate) fn symbol_at(sequence: &[u8], index: isize, side: Side) -> Result<u8, TraceError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| sequence.get(i).copied())
        .ok_or(TraceError::CursorOutOfBounds {
            side,
            index,
            len: sequence.len(),
        })
}

/// Signed view of a length or index, for cursor arithmetic that may step to -1
#[allow(clippy::cast_possible_wrap)] // Sequence lengths are far below isize::MAX
pub(crate) fn signed(value: usize) -> isize {
    value as isize
}
