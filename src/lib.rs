//! # pairalign
//!
//! All-pairs edit-distance alignment of FASTA sequences.
//!
//! Every unordered pair of records in a FASTA file is aligned in infix mode
//! (the lower-index record located inside the higher-index one). For each
//! pair, `pairalign` reports:
//!
//! - **Reconstructed alignment**: the target sequence with the query's
//!   insertions spliced in, flanks kept verbatim
//! - **Edit distance**: unit-cost distance of the infix alignment
//! - **Percent identity**: from a global and from an infix alignment, with
//!   ambiguity codes folded (B=N, Z=Q, x=A, X=A)
//! - **Alignment view**: a wrapped target / marker / query display
//!
//! The dynamic-programming alignment itself comes from rust-bio, behind the
//! [`AlignmentEngine`] trait.
//!
//! ## Example
//!
//! ```rust
//! use pairalign::{BioAligner, PairwiseAligner, PairwiseConfig};
//! use pairalign::parsing::fasta::read_sequences;
//!
//! let corpus = read_sequences(&b">a\nCCC\n>b\nAAACCCGGG\n"[..]).unwrap();
//! let aligner = PairwiseAligner::new(&BioAligner, PairwiseConfig::default());
//!
//! let mut output = Vec::new();
//! let pairs = aligner.run(&corpus, &mut output, |outcome| {
//!     println!("{} vs {}: {}%", outcome.first, outcome.second, outcome.percent_identity);
//!     Ok(())
//! }).unwrap();
//!
//! assert_eq!(pairs, 1);
//! assert_eq!(output, b">Alignment of sequences 0 and 1\nAAACCCGGG\n");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: sequence records, edit operations and equality rules
//! - [`parsing`]: FASTA reading
//! - [`alignment`]: engine adapter, reconstruction, identity and the all-pairs driver
//! - [`report`]: alignment view and machine-readable pair records
//! - [`cli`]: command-line interface implementation

pub mod alignment;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod report;

// Re-export commonly used types for convenience
pub use crate::alignment::engine::{AlignConfig, AlignmentEngine, AlignmentTrace, BioAligner};
pub use crate::alignment::pairwise::{PairOutcome, PairwiseAligner, PairwiseConfig};
pub use crate::core::sequence::{SequenceCorpus, SequenceRecord};
pub use crate::core::types::*;
