//! Core data types for all-pairs alignment.
//!
//! - [`SequenceRecord`]: the symbols of one FASTA record
//! - [`SequenceCorpus`]: records in file order, with pair enumeration
//! - [`EditOp`]: one alignment column (MATCH, MISMATCH, INSERT, DELETE)
//! - [`AlignMode`], [`AlignTask`]: what the alignment engine is asked to do
//! - [`EqualityRules`]: extra symbol equalities used while scoring
//!
//! ## Orientation
//!
//! Every pair is aligned with the lower-index record as the *query* and the
//! higher-index record as the *target*. INSERT consumes a query symbol only,
//! DELETE consumes a target symbol only.
//!
//! [`SequenceRecord`]: sequence::SequenceRecord
//! [`SequenceCorpus`]: sequence::SequenceCorpus
//! [`EditOp`]: types::EditOp
//! [`AlignMode`]: types::AlignMode
//! [`AlignTask`]: types::AlignTask
//! [`EqualityRules`]: types::EqualityRules

pub mod sequence;
pub mod types;
