// ============================================================
// Layer 6 — Run Report
// ============================================================
// Optionally saves a JSON summary of a finished run, e.g.
//
//   {
//     "rows": 2,
//     "input_path": "sentences.csv",
//     "source_output": "data/darija_clean.txt",
//     "source_bytes": 13,
//     "target_output": "data/english_clean.txt",
//     "target_bytes": 8
//   }
//
// Only written after both corpus files were written.
//
// Reference: serde_json documentation (to_string_pretty)

use std::path::Path;

use crate::application::prepare_use_case::PrepareSummary;
use crate::error::CorpusError;
use crate::infra::corpus_writer::write_text;

/// Serialise `summary` as pretty JSON and write it to `path`.
pub fn save_report(path: &Path, summary: &PrepareSummary) -> Result<(), CorpusError> {
    let json = serde_json::to_string_pretty(summary)?;
    write_text(path, &json)?;
    tracing::info!("Saved run report to '{}'", path.display());
    Ok(())
}
