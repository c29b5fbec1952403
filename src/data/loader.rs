// ============================================================
// Layer 4 — CSV Pair Loader
// ============================================================
// Reads the parallel-sentence CSV into raw SentencePairs.
//
// Expected file shape:
//   header,ignored
//   Bonjour,Hello          ← record 2 → pair (Bonjour, Hello)
//   "Salam, labas",Hi      ← quoted fields may contain commas
//
// Rules:
//   - The first record is ALWAYS dropped (assumed header).
//     It is not inspected, so a headerless file loses its
//     first data row.
//   - Column 0 is the source sentence, column 1 the target.
//     Extra columns are ignored.
//   - A record with fewer than 2 fields fails the whole load.
//   - A blank line is a row with 0 fields, so it fails too.
//     One line break at the very end of the file is not a row.
//   - Nothing is trimmed here; the Normalizer does that.
//
// The csv reader runs in flexible mode with header handling
// turned off, so rows of uneven width reach our own check
// instead of failing inside the csv crate.
//
// csv-core drops empty lines without reporting them. The whole
// file is read into memory, so blank rows are found by counting
// the line breaks between the end of one record and the start
// of the next: more than one break means a blank line.
//
// Reference: csv crate documentation (ReaderBuilder)
//            Rust Book §9 (Error Handling)

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, StringRecord};

use crate::domain::sentence_pair::SentencePair;
use crate::domain::traits::PairSource;
use crate::error::CorpusError;

/// Loads sentence pairs from a CSV file on disk.
/// Implements the PairSource trait from Layer 3.
pub struct CsvPairLoader {
    /// Path to the input CSV
    path: PathBuf,
}

impl CsvPairLoader {
    /// Create a new CsvPairLoader pointed at a file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PairSource for CsvPairLoader {
    fn load_all(&self) -> Result<Vec<SentencePair>, CorpusError> {
        // Reading first means a missing file is reported before
        // anything downstream (including the writers) runs.
        let content = fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CorpusError::InputNotFound {
                path: self.path.clone(),
            },
            _ => CorpusError::io(&self.path, e),
        })?;

        tracing::debug!("Read {} bytes from '{}'", content.len(), self.path.display());
        let pairs = read_pairs(&content, &self.path)?;
        tracing::info!(
            "Read {} sentence pairs from '{}'",
            pairs.len(),
            self.path.display()
        );
        Ok(pairs)
    }
}

/// Parse in-memory CSV content.
/// `origin` is only used for error messages.
pub fn read_pairs(content: &[u8], origin: &Path) -> Result<Vec<SentencePair>, CorpusError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content);

    let mut record = StringRecord::new();

    // Skip the header row unconditionally
    if !rdr.read_record(&mut record)? {
        return Err(CorpusError::EmptyInput {
            path: origin.to_path_buf(),
        });
    }
    tracing::debug!("Skipping header row with {} field(s)", record.len());

    let mut pairs = Vec::new();

    // Record numbers are 1-based and count the header as record 1
    let mut record_no = 1u64;

    while rdr.read_record(&mut record)? {
        record_no += 1;

        let read_from = record.position().map_or(0, |p| p.byte() as usize);
        if has_blank_line(before_record(content, read_from)) {
            return Err(CorpusError::ShortRow { record: record_no, fields: 0 });
        }

        match (record.get(0), record.get(1)) {
            (Some(source), Some(target)) => {
                pairs.push(SentencePair::new(record_no, source, target));
            }
            _ => {
                return Err(CorpusError::ShortRow {
                    record: record_no,
                    fields: record.len(),
                })
            }
        }
    }

    // Blank lines after the last record are rows too
    if has_blank_line(trailing_breaks(content)) {
        return Err(CorpusError::ShortRow { record: record_no + 1, fields: 0 });
    }

    Ok(pairs)
}

fn is_line_break(b: &u8) -> bool {
    matches!(b, b'\r' | b'\n')
}

/// The run of line-break bytes between the previous record and the
/// record whose read started at byte `read_from`.
///
/// The reader may start a record anywhere inside that run, so scan
/// forward to the first content byte, then back to the last one.
fn before_record(content: &[u8], read_from: usize) -> &[u8] {
    let read_from = read_from.min(content.len());
    let begin = content[read_from..]
        .iter()
        .position(|b| !is_line_break(b))
        .map_or(content.len(), |i| read_from + i);
    let run_start = content[..begin]
        .iter()
        .rposition(|b| !is_line_break(b))
        .map_or(0, |i| i + 1);
    &content[run_start..begin]
}

/// The run of line-break bytes at the end of the content.
fn trailing_breaks(content: &[u8]) -> &[u8] {
    before_record(content, content.len())
}

/// More than one line terminator (`\n`, `\r\n` or `\r`) in a run
/// means at least one empty line sits inside it.
fn has_blank_line(run: &[u8]) -> bool {
    let mut terminators = 0;
    let mut i = 0;
    while i < run.len() {
        i += if run[i..].starts_with(b"\r\n") { 2 } else { 1 };
        terminators += 1;
    }
    terminators > 1
}
