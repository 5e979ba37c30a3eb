//! FASTA reader.
//!
//! The default reader is a single permissive scan over the byte stream:
//!
//! - `>` outside a header starts a header; everything up to the next `\n` is dropped
//! - `\r` and `\n` outside a header are skipped
//! - any other byte is a sequence symbol; the first one after a header (or the
//!   start of the stream) opens a new record
//!
//! No alphabet or length validation is done. The strict reader delegates to
//! noodles and rejects malformed files instead.
//!
//! Paths ending in `.gz` or `.bgz` are decompressed on the fly.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use thiserror::Error;

use crate::core::sequence::{SequenceCorpus, SequenceRecord};

/// Read buffer size for the permissive scanner
const READ_BUFFER_SIZE: usize = 4096;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("There is no file with name {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read FASTA input")]
    Io(#[from] std::io::Error),

    #[error("Malformed FASTA: {0}")]
    Malformed(String),
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

fn open_input(path: &Path) -> Result<Box<dyn Read>, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    if is_gzipped(path) {
        Ok(Box::new(MultiGzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

/// Read every record of a FASTA file with the permissive scanner.
///
/// # Errors
///
/// Returns `ParseError::FileNotFound` if the file cannot be opened and
/// `ParseError::Io` if reading fails part way.
pub fn read_fasta_file(path: &Path) -> Result<SequenceCorpus, ParseError> {
    read_sequences(open_input(path)?)
}

/// Read every record of a FASTA file with the noodles reader.
///
/// # Errors
///
/// Returns `ParseError::FileNotFound` if the file cannot be opened and
/// `ParseError::Malformed` if a record cannot be parsed or has no sequence.
pub fn read_fasta_file_strict(path: &Path) -> Result<SequenceCorpus, ParseError> {
    let reader = BufReader::new(open_input(path)?);
    read_sequences_strict(reader)
}

/// Run the permissive scanner over any byte stream.
///
/// # Errors
///
/// Returns `ParseError::Io` if the underlying reader fails.
pub fn read_sequences<R: Read>(reader: R) -> Result<SequenceCorpus, ParseError> {
    let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, reader);
    let mut scanner = FastaScanner::default();

    loop {
        let consumed = match reader.fill_buf() {
            Ok([]) => break,
            Ok(chunk) => {
                scanner.feed(chunk);
                chunk.len()
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        reader.consume(consumed);
    }

    Ok(scanner.finish())
}

/// Parse a FASTA stream with noodles.
///
/// # Errors
///
/// Returns `ParseError::Malformed` if noodles rejects a record or a record
/// has an empty sequence.
pub fn read_sequences_strict<R: BufRead>(reader: R) -> Result<SequenceCorpus, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut records = Vec::new();

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Malformed(format!("Failed to parse FASTA record: {e}")))?;

        let sequence: &[u8] = record.sequence().as_ref();
        if sequence.is_empty() {
            return Err(ParseError::Malformed(format!(
                "Record '{}' has no sequence",
                String::from_utf8_lossy(record.name())
            )));
        }

        records.push(SequenceRecord::new(sequence.to_vec()));
    }

    Ok(SequenceCorpus::new(records))
}

/// Byte-level state machine behind [`read_sequences`]. `current` is the open
/// record, if any.
#[derive(Debug, Default)]
struct FastaScanner {
    in_header: bool,
    current: Option<Vec<u8>>,
    records: Vec<SequenceRecord>,
}

impl FastaScanner {
    fn feed(&mut self, chunk: &[u8]) {
        for &byte in chunk {
            if self.in_header {
                if byte == b'\n' {
                    self.in_header = false;
                }
                continue;
            }

            match byte {
                b'>' => {
                    self.in_header = true;
                    self.close_record();
                }
                b'\r' | b'\n' => {}
                symbol => self.current.get_or_insert_with(Vec::new).push(symbol),
            }
        }
    }

    fn close_record(&mut self) {
        if let Some(symbols) = self.current.take() {
            self.records.push(SequenceRecord::new(symbols));
        }
    }

    fn finish(mut self) -> SequenceCorpus {
        self.close_record();
        SequenceCorpus::new(self.records)
    }
}
