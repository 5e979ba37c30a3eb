//! Command-line interface for pairalign.
//!
//! ## Usage
//!
//! ```text
//! # Align every pair, write reconstructed alignments to pairs.txt
//! pairalign sequences.fa pairs.txt
//!
//! # Machine-readable per-pair statistics on stdout
//! pairalign sequences.fa pairs.txt --format json
//!
//! # Reject malformed FASTA instead of reading it permissively
//! pairalign sequences.fa.gz pairs.txt --strict
//! ```

use std::path::PathBuf;

use clap::Parser;

pub mod align;

#[derive(Parser)]
#[command(name = "pairalign")]
#[command(version)]
#[command(about = "All-pairs edit-distance alignment of FASTA sequences")]
#[command(
    long_about = "pairalign aligns every pair of sequences in a FASTA file.\n\nFor each pair (i, j), i < j, the output file receives a header line and the target sequence with the query's insertions spliced in at their infix alignment positions. The alignment view, edit distance and percent identities are printed to standard output."
)]
pub struct Cli {
    /// Input FASTA file (plain, .gz or .bgz)
    pub sequences: PathBuf,

    /// Output file for the reconstructed alignments
    pub output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Standard output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Parse the input with a strict FASTA reader
    #[arg(long)]
    pub strict: bool,

    /// Columns per block in the alignment view
    #[arg(long, default_value = "50", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Do not print the alignment view
    #[arg(long)]
    pub no_view: bool,

    /// Treat ambiguity codes (B=N, Z=Q, x=A, X=A) as equal in the reconstructed alignment too
    #[arg(long)]
    pub fold_ambiguity: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
