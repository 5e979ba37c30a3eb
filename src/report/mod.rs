//! Diagnostic reports.
//!
//! - [`view`]: the 50-column target / marker / query view of a trace
//! - [`summary`]: per-pair records for JSON and TSV output
//!
//! The view is independent of the reconstructed alignment string written to
//! the output file and draws gaps differently: the reconstruction never
//! shows a gap character, the view always does.

pub mod summary;
pub mod view;
