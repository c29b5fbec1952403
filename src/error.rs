// ============================================================
// Pipeline Error Type
// ============================================================
// Every fallible step of the corpus pipeline returns this enum.
//
// The CLI layer only needs to tell two situations apart:
//   - the input CSV does not exist  → InputNotFound
//   - anything else                 → printed generically
//
// Keeping the variants typed (instead of bare anyhow errors)
// lets the CLI match on InputNotFound without string sniffing.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)
//            thiserror crate documentation

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    /// The configured input CSV does not exist
    #[error("File '{}' not found. Please check the file path.", .path.display())]
    InputNotFound { path: PathBuf },

    /// The input has no rows at all, so there is no header to skip
    #[error("'{}' is empty: expected a header row", .path.display())]
    EmptyInput { path: PathBuf },

    /// A data row has fewer than the two positional fields we need.
    /// `record` is the 1-based CSV record number (the header is record 1).
    #[error("record {record} has {fields} field(s), expected at least 2")]
    ShortRow { record: u64, fields: usize },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CorpusError {
    /// Wrap an io::Error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// True for the one error the CLI reports with its own message
    pub fn is_input_not_found(&self) -> bool {
        matches!(self, Self::InputNotFound { .. })
    }
}
