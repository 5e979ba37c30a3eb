use bio::alignment::pairwise::Aligner;
use bio::alignment::{Alignment, AlignmentOperation};

use crate::alignment::{AlignError, Side, TraceError};
use crate::core::types::{AlignMode, AlignTask, EditOp, EqualityRules};

/// Score of two equal symbols
const MATCH_SCORE: i32 = 0;
/// Score of two different symbols
const MISMATCH_SCORE: i32 = -1;
/// Unit-cost gaps: no opening cost, one per gapped column
const GAP_OPEN: i32 = 0;
const GAP_EXTEND: i32 = -1;

/// What to ask of the engine for one alignment call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignConfig {
    pub mode: AlignMode,
    pub task: AlignTask,
    pub equalities: EqualityRules,
}

impl AlignConfig {
    /// Full-path alignment in `mode`; the edit distance is never bounded
    #[must_use]
    pub fn new(mode: AlignMode, equalities: EqualityRules) -> Self {
        Self {
            mode,
            task: AlignTask::Path,
            equalities,
        }
    }

    #[must_use]
    pub fn with_task(mut self, task: AlignTask) -> Self {
        self.task = task;
        self
    }
}

/// Result of one alignment call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentTrace {
    /// Mode the trace was produced in
    pub mode: AlignMode,

    /// Unit-cost edit distance
    pub edit_distance: usize,

    /// One past the last target symbol covered by the alignment
    pub target_end: usize,

    /// First target symbol covered by the alignment (`Locations` and `Path` tasks)
    pub target_start: Option<usize>,

    /// Alignment columns in order (`Path` task only)
    pub operations: Option<Vec<EditOp>>,
}

impl AlignmentTrace {
    /// Index of the last target symbol in the alignment, if it covers any
    #[must_use]
    pub fn end_location(&self) -> Option<usize> {
        self.target_end.checked_sub(1)
    }

    /// # Errors
    ///
    /// Returns `TraceError::MissingPath` if the call did not request a path.
    pub fn operations(&self) -> Result<&[EditOp], TraceError> {
        self.operations.as_deref().ok_or(TraceError::MissingPath)
    }

    /// Total number of columns (0 without a path)
    #[must_use]
    pub fn alignment_length(&self) -> usize {
        self.operations.as_ref().map_or(0, Vec::len)
    }

    /// Number of columns of kind `op`
    #[must_use]
    pub fn count(&self, op: EditOp) -> usize {
        self.operations
            .iter()
            .flatten()
            .filter(|&&column| column == op)
            .count()
    }

    /// Run-length encoded extended CIGAR (`=`, `X`, `I`, `D`)
    #[must_use]
    pub fn cigar(&self) -> Option<String> {
        let operations = self.operations.as_ref()?;
        let mut cigar = String::new();
        let mut iter = operations.iter().peekable();

        while let Some(&op) = iter.next() {
            let mut run = 1;
            while iter.next_if(|&&next| next == op).is_some() {
                run += 1;
            }
            cigar.push_str(&run.to_string());
            cigar.push(op.cigar_symbol());
        }

        Some(cigar)
    }
}

/// Call boundary to the external aligner.
///
/// The first sequence is the query, the second the target. Implementations
/// do one alignment per call and hand back an owned trace; nothing is kept
/// between calls.
pub trait AlignmentEngine {
    /// # Errors
    ///
    /// Returns `AlignError::EmptySequence` if either sequence is empty.
    fn align(
        &self,
        query: &[u8],
        target: &[u8],
        config: &AlignConfig,
    ) -> Result<AlignmentTrace, AlignError>;
}

/// Unit-cost aligner on top of the rust-bio pairwise DP.
///
/// Global mode maps to `Aligner::global`, infix mode to
/// `Aligner::semiglobal` (query end to end, free target flanks).
#[derive(Debug, Clone, Copy, Default)]
pub struct BioAligner;

impl AlignmentEngine for BioAligner {
    fn align(
        &self,
        query: &[u8],
        target: &[u8],
        config: &AlignConfig,
    ) -> Result<AlignmentTrace, AlignError> {
        if query.is_empty() {
            return Err(AlignError::EmptySequence(Side::Query));
        }
        if target.is_empty() {
            return Err(AlignError::EmptySequence(Side::Target));
        }

        let equalities = &config.equalities;
        let score = |a: u8, b: u8| {
            if equalities.equal(a, b) {
                MATCH_SCORE
            } else {
                MISMATCH_SCORE
            }
        };
        let mut aligner =
            Aligner::with_capacity(query.len(), target.len(), GAP_OPEN, GAP_EXTEND, &score);

        let alignment = match config.mode {
            AlignMode::Global => aligner.global(query, target),
            AlignMode::Infix => aligner.semiglobal(query, target),
        };

        let operations = classify_columns(query, target, &alignment, equalities);
        let edit_distance = operations
            .iter()
            .filter(|&&op| op != EditOp::Match)
            .count();

        Ok(AlignmentTrace {
            mode: config.mode,
            edit_distance,
            target_end: alignment.yend,
            target_start: (config.task >= AlignTask::Locations).then_some(alignment.ystart),
            operations: (config.task == AlignTask::Path).then_some(operations),
        })
    }
}

/// Convert rust-bio operations, deciding MATCH vs MISMATCH with the same
/// equality rules the scores used. Clip operations carry no columns.
fn classify_columns(
    query: &[u8],
    target: &[u8],
    alignment: &Alignment,
    equalities: &EqualityRules,
) -> Vec<EditOp> {
    let mut q = alignment.xstart;
    let mut t = alignment.ystart;
    let mut columns = Vec::with_capacity(alignment.operations.len());

    for op in &alignment.operations {
        match op {
            AlignmentOperation::Match | AlignmentOperation::Subst => {
                let equal = matches!(
                    (query.get(q), target.get(t)),
                    (Some(&a), Some(&b)) if equalities.equal(a, b)
                );
                columns.push(if equal { EditOp::Match } else { EditOp::Mismatch });
                q += 1;
                t += 1;
            }
            AlignmentOperation::Ins => {
                columns.push(EditOp::Insert);
                q += 1;
            }
            AlignmentOperation::Del => {
                columns.push(EditOp::Delete);
                t += 1;
            }
            AlignmentOperation::Xclip(_) | AlignmentOperation::Yclip(_) => {}
        }
    }

    columns
}
