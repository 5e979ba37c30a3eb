//! Parsers for sequence input.
//!
//! - **FASTA**: permissive byte-level reader (default) or a strict noodles
//!   reader, plain or gzip/bgzip compressed
//!
//! ## Example
//!
//! ```rust,no_run
//! use pairalign::parsing::fasta::read_fasta_file;
//! use std::path::Path;
//!
//! let corpus = read_fasta_file(Path::new("sequences.fa")).unwrap();
//! println!("{} sequences, {} pairs", corpus.len(), corpus.pair_count());
//! ```

pub mod fasta;
