use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;
use tracing::info;

use crate::alignment::engine::BioAligner;
use crate::alignment::pairwise::{PairOutcome, PairwiseAligner, PairwiseConfig};
use crate::cli::{Cli, OutputFormat};
use crate::core::types::EqualityRules;
use crate::parsing::fasta::{read_fasta_file, read_fasta_file_strict};
use crate::report::summary::{PairReport, TSV_HEADER};
use crate::report::view::DEFAULT_VIEW_WIDTH;

/// Read the input, align every pair and write the output file.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the output file cannot be
/// created, or any pair fails to align.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.format == OutputFormat::Text {
        writeln!(out, "Reading sequences...")?;
    }

    let corpus = if cli.strict {
        read_fasta_file_strict(&cli.sequences)?
    } else {
        read_fasta_file(&cli.sequences)?
    };
    info!(
        "Read {} sequences from {}",
        corpus.len(),
        cli.sequences.display()
    );

    if cli.format == OutputFormat::Text {
        writeln!(out, "Number of sequences: {}", corpus.len())?;
    }

    let file = File::create(&cli.output)
        .with_context(|| format!("Failed to create output file {}", cli.output.display()))?;
    let mut writer = BufWriter::new(file);

    let aligner = PairwiseAligner::new(&BioAligner, pairwise_config(cli));

    if cli.format == OutputFormat::Tsv {
        writeln!(out, "{TSV_HEADER}")?;
    }

    let format = cli.format;
    let pairs = aligner.run(&corpus, &mut writer, |outcome| match format {
        OutputFormat::Text => print_text_pair(&mut out, outcome),
        OutputFormat::Json => print_json_pair(&mut out, outcome),
        OutputFormat::Tsv => writeln!(out, "{}", PairReport::from(outcome).to_tsv_row()),
    })?;

    info!("Wrote {pairs} alignments to {}", cli.output.display());
    out.flush()?;
    Ok(())
}

/// Build the driver configuration from the command line
#[must_use]
pub fn pairwise_config(cli: &Cli) -> PairwiseConfig {
    let trace_equalities = if cli.fold_ambiguity {
        EqualityRules::ambiguity()
    } else {
        EqualityRules::none()
    };

    PairwiseConfig {
        trace_equalities,
        identity_equalities: EqualityRules::ambiguity(),
        view_width: usize::try_from(cli.width).unwrap_or(DEFAULT_VIEW_WIDTH),
        render_view: cli.format == OutputFormat::Text && !cli.no_view,
    }
}

fn print_text_pair<W: Write>(out: &mut W, outcome: &PairOutcome) -> io::Result<()> {
    writeln!(
        out,
        ">Alignment of sequences {} and {}",
        outcome.first, outcome.second
    )?;
    writeln!(out)?;
    if let Some(view) = &outcome.view {
        write!(out, "{view}")?;
    }
    writeln!(out, "Edit distance: {}", outcome.edit_distance)?;
    writeln!(out, "Percent identity: {}", outcome.percent_identity)?;
    writeln!(
        out,
        "Infix Percent identity: {}",
        outcome.infix_percent_identity
    )
}

fn print_json_pair<W: Write>(out: &mut W, outcome: &PairOutcome) -> io::Result<()> {
    serde_json::to_writer(&mut *out, &PairReport::from(outcome))?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn outcome() -> PairOutcome {
        PairwiseAligner::new(&BioAligner, PairwiseConfig::default())
            .align_pair(0, 1, b"CCC", b"AAACCCGGG")
            .unwrap()
    }

    #[test]
    fn test_text_pair_block() {
        let mut buffer = Vec::new();
        print_text_pair(&mut buffer, &outcome()).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            ">Alignment of sequences 0 and 1\n\
             \n\
             T: CCC (3 - 5)\n   |||\nQ: CCC (0 - 2)\n\n\
             Edit distance: 0\n\
             Percent identity: 33\n\
             Infix Percent identity: 100\n"
        );
    }

    #[test]
    fn test_json_pair_is_one_line() {
        let mut buffer = Vec::new();
        print_json_pair(&mut buffer, &outcome()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["cigar"], "3=");
    }

    #[test]
    fn test_config_from_flags() {
        let cli = Cli::parse_from(["pairalign", "in.fa", "out.txt"]);
        let config = pairwise_config(&cli);
        assert!(config.trace_equalities.is_empty());
        assert_eq!(config.identity_equalities, EqualityRules::ambiguity());
        assert_eq!(config.view_width, 50);
        assert!(config.render_view);

        let cli = Cli::parse_from([
            "pairalign",
            "in.fa",
            "out.txt",
            "--fold-ambiguity",
            "--width",
            "80",
            "--format",
            "json",
        ]);
        let config = pairwise_config(&cli);
        assert_eq!(config.trace_equalities, EqualityRules::ambiguity());
        assert_eq!(config.view_width, 80);
        assert!(!config.render_view);
    }

    #[test]
    fn test_zero_width_is_rejected() {
        assert!(Cli::try_parse_from(["pairalign", "in.fa", "out.txt", "--width", "0"]).is_err());
    }
}
