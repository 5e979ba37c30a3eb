//! All-pairs driver.
//!
//! For N sequences every unordered pair (i, j), i < j, is visited in
//! ascending i then j order. Each pair costs three alignments (the infix
//! trace plus the two identity estimates), so a run does 3 * N(N-1)/2
//! alignment calls. There is no pruning; input size is bounded by that
//! quadratic cost.

use std::io::Write;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::alignment::engine::{AlignConfig, AlignmentEngine};
use crate::alignment::identity::{global_percent_identity, infix_percent_identity};
use crate::alignment::reconstruct::{reconstruct, AlignedString};
use crate::alignment::AlignError;
use crate::core::sequence::SequenceCorpus;
use crate::core::types::{AlignMode, EqualityRules};
use crate::report::view::{render_alignment, DEFAULT_VIEW_WIDTH};

/// Pair count above which a run is reported as large
pub const LARGE_PAIR_COUNT: usize = 1_000_000;

#[derive(Error, Debug)]
pub enum PairwiseError {
    #[error("failed to align sequences {first} and {second}")]
    Align {
        first: usize,
        second: usize,
        #[source]
        source: AlignError,
    },

    #[error("failed to write alignment output")]
    Io(#[from] std::io::Error),
}

/// Configuration for the all-pairs driver
#[derive(Debug, Clone)]
pub struct PairwiseConfig {
    /// Equalities used for the infix trace behind the reconstructed string
    pub trace_equalities: EqualityRules,
    /// Equalities used for both identity estimates
    pub identity_equalities: EqualityRules,
    /// Columns per block in the alignment view
    pub view_width: usize,
    /// Render the alignment view for every pair
    pub render_view: bool,
}

impl Default for PairwiseConfig {
    fn default() -> Self {
        Self {
            trace_equalities: EqualityRules::none(),
            identity_equalities: EqualityRules::ambiguity(),
            view_width: DEFAULT_VIEW_WIDTH,
            render_view: true,
        }
    }
}

/// Everything computed for one pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairOutcome {
    /// Corpus index of the query
    pub first: usize,
    /// Corpus index of the target
    pub second: usize,
    /// Reconstructed alignment string
    pub aligned: AlignedString,
    /// Edit distance of the infix trace
    pub edit_distance: usize,
    /// First target index covered by the infix trace
    pub target_start: Option<usize>,
    /// Last target index covered by the infix trace
    pub end_location: Option<usize>,
    /// Extended CIGAR of the infix trace
    pub cigar: String,
    /// Rendered alignment view, when enabled
    pub view: Option<String>,
    /// Global-mode percent identity
    pub percent_identity: u32,
    /// Infix-mode percent identity
    pub infix_percent_identity: u32,
}

/// Runs every pair of a corpus through one engine
pub struct PairwiseAligner<'e, E: AlignmentEngine + ?Sized> {
    engine: &'e E,
    config: PairwiseConfig,
    trace_config: AlignConfig,
}

impl<'e, E: AlignmentEngine + ?Sized> PairwiseAligner<'e, E> {
    pub fn new(engine: &'e E, config: PairwiseConfig) -> Self {
        let trace_config = AlignConfig::new(AlignMode::Infix, config.trace_equalities.clone());
        Self {
            engine,
            config,
            trace_config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &PairwiseConfig {
        &self.config
    }

    /// Align `query` (corpus index `first`) against `target` (index `second`).
    ///
    /// # Errors
    ///
    /// Returns `AlignError::EmptySequence` for an empty sequence and
    /// `AlignError::Trace` if the engine's trace does not fit the sequences.
    pub fn align_pair(
        &self,
        first: usize,
        second: usize,
        query: &[u8],
        target: &[u8],
    ) -> Result<PairOutcome, AlignError> {
        // The trace is released at the end of this block, before the
        // identity alignments run.
        let (aligned, view, edit_distance, target_start, end_location, cigar) = {
            let trace = self.engine.align(query, target, &self.trace_config)?;
            let aligned = reconstruct(query, target, &trace)?;
            let view = if self.config.render_view {
                Some(render_alignment(
                    query,
                    target,
                    &trace,
                    self.config.view_width,
                )?)
            } else {
                None
            };
            (
                aligned,
                view,
                trace.edit_distance,
                trace.target_start,
                trace.end_location(),
                trace.cigar().unwrap_or_default(),
            )
        };

        let rules = &self.config.identity_equalities;
        let percent_identity = global_percent_identity(self.engine, query, target, rules)?;
        let infix_percent_identity = infix_percent_identity(self.engine, query, target, rules)?;

        Ok(PairOutcome {
            first,
            second,
            aligned,
            edit_distance,
            target_start,
            end_location,
            cigar,
            view,
            percent_identity,
            infix_percent_identity,
        })
    }

    /// Align every pair, writing a header line and the reconstructed string
    /// per pair to `output`, and hand each outcome to `on_pair`. Returns the
    /// number of pairs processed.
    ///
    /// # Errors
    ///
    /// The first failing pair or write aborts the run.
    pub fn run<W, F>(
        &self,
        corpus: &SequenceCorpus,
        output: &mut W,
        mut on_pair: F,
    ) -> Result<usize, PairwiseError>
    where
        W: Write,
        F: FnMut(&PairOutcome) -> std::io::Result<()>,
    {
        let pair_count = corpus.pair_count();
        info!(
            "Aligning {} sequences ({} pairs)",
            corpus.len(),
            pair_count
        );
        if pair_count > LARGE_PAIR_COUNT {
            warn!(
                "{pair_count} pairs requested; all-pairs alignment grows quadratically with the number of sequences"
            );
        }

        let mut processed = 0;
        for (first, second) in corpus.pairs() {
            writeln!(output, ">Alignment of sequences {first} and {second}")?;

            let outcome = self
                .align_pair(
                    first,
                    second,
                    corpus[first].as_bytes(),
                    corpus[second].as_bytes(),
                )
                .map_err(|source| PairwiseError::Align {
                    first,
                    second,
                    source,
                })?;

            debug!(
                first,
                second,
                edit_distance = outcome.edit_distance,
                identity = outcome.percent_identity,
                "aligned pair"
            );

            output.write_all(outcome.aligned.as_bytes())?;
            output.write_all(b"\n")?;
            on_pair(&outcome)?;
            processed += 1;
        }

        output.flush()?;
        Ok(processed)
    }
}
