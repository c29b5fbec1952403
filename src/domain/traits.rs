// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to the data and infra layers
// only through these two traits:
//
//   PairSource  → where raw sentence pairs come from
//   CorpusSink  → where the cleaned corpus goes
//
// CsvPairLoader and CorpusWriter are the real implementations.
// Tests can plug in in-memory versions without touching disk.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::PathBuf;

use crate::domain::corpus::ParallelCorpus;
use crate::domain::sentence_pair::SentencePair;
use crate::error::CorpusError;

// ─── PairSource ───────────────────────────────────────────────────────────────
/// Any component that can produce the raw sentence pairs of a corpus.
pub trait PairSource {
    /// Load every data row, in file order, header excluded.
    fn load_all(&self) -> Result<Vec<SentencePair>, CorpusError>;
}

// ─── CorpusSink ───────────────────────────────────────────────────────────────
/// Any component that can persist a cleaned corpus.
pub trait CorpusSink {
    /// Write both sides of the corpus, replacing previous content.
    fn write(&self, corpus: &ParallelCorpus) -> Result<WrittenFiles, CorpusError>;
}

/// Where a sink put the two sides, and how many bytes each got.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub source_path:  PathBuf,
    pub source_bytes: u64,
    pub target_path:  PathBuf,
    pub target_bytes: u64,
}
