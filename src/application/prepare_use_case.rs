// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates one corpus-cleaning run in order:
//
//   Step 1: Load raw pairs from the CSV   (Layer 4 - data)
//   Step 2: Clean both fields of each row (Layer 4 - data)
//   Step 3: Write both text files         (Layer 6 - infra)
//   Step 4: Save the JSON report, if any  (Layer 6 - infra)
//
// Every row is read and cleaned before the first byte is
// written. A missing input or a malformed row therefore
// leaves existing output files exactly as they were.
//
// Reference: Rust Book §13 (Iterators and Closures)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::data::{loader::CsvPairLoader, preprocessor::Normalizer};
use crate::domain::{
    corpus::ParallelCorpus,
    sentence_pair::SentencePair,
    traits::{CorpusSink, PairSource},
};
use crate::error::CorpusError;
use crate::infra::{corpus_writer::CorpusWriter, report::save_report};

// ─── Run Configuration ───────────────────────────────────────────────────────
// The defaults are the fixed paths the tool has always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub input_path:    PathBuf,
    pub source_output: PathBuf,
    pub target_output: PathBuf,
    pub report_path:   Option<PathBuf>,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            input_path:    PathBuf::from("sentences.csv"),
            source_output: PathBuf::from("data/darija_clean.txt"),
            target_output: PathBuf::from("data/english_clean.txt"),
            report_path:   None,
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareSummary {
    /// Data rows processed (header excluded)
    pub rows:          usize,
    pub input_path:    PathBuf,
    pub source_output: PathBuf,
    pub source_bytes:  u64,
    pub target_output: PathBuf,
    pub target_bytes:  u64,
}

// ─── PrepareUseCase ──────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config:     PrepareConfig,
    normalizer: Normalizer,
}

impl PrepareUseCase {
    /// Create a new PrepareUseCase with the given configuration
    pub fn new(config: PrepareConfig) -> Self {
        Self {
            config,
            normalizer: Normalizer::new(),
        }
    }

    /// Run against the configured CSV and output files
    pub fn execute(&self) -> Result<PrepareSummary, CorpusError> {
        let cfg    = &self.config;
        let loader = CsvPairLoader::new(&cfg.input_path);
        let writer = CorpusWriter::new(&cfg.source_output, &cfg.target_output);

        let summary = self.run(&loader, &writer)?;

        if let Some(report_path) = &cfg.report_path {
            save_report(report_path, &summary)?;
        }

        Ok(summary)
    }

    /// The pipeline itself, over any source and sink
    pub fn run(
        &self,
        source: &impl PairSource,
        sink:   &impl CorpusSink,
    ) -> Result<PrepareSummary, CorpusError> {
        // ── Step 1: Load raw pairs ────────────────────────────────────────────
        tracing::info!("Loading sentence pairs from '{}'", self.config.input_path.display());
        let pairs = source.load_all()?;

        // ── Step 2: Clean every field ─────────────────────────────────────────
        let corpus = self.clean_pairs(&pairs);
        if corpus.is_empty() {
            tracing::warn!("No data rows after the header; writing empty files");
        } else {
            tracing::info!("Cleaned {} sentence pairs", corpus.len());
        }

        // ── Step 3: Write both sides ──────────────────────────────────────────
        let written = sink.write(&corpus)?;

        Ok(PrepareSummary {
            rows:          corpus.len(),
            input_path:    self.config.input_path.clone(),
            source_output: written.source_path,
            source_bytes:  written.source_bytes,
            target_output: written.target_path,
            target_bytes:  written.target_bytes,
        })
    }

    /// Trim + normalize both sides of every pair, preserving order
    pub fn clean_pairs(&self, pairs: &[SentencePair]) -> ParallelCorpus {
        let mut corpus = ParallelCorpus::with_capacity(pairs.len());
        for pair in pairs {
            let source = self.normalizer.clean_field(&pair.source);
            let target = self.normalizer.clean_field(&pair.target);

            // Still written, as an empty line, to keep both files aligned
            if source.is_empty() || target.is_empty() {
                tracing::debug!("Record {} cleans to an empty line", pair.record);
            }

            corpus.push(source, target);
        }
        corpus
    }
}
