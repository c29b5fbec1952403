// ============================================================
// Layer 6 — Corpus Writer
// ============================================================
// Writes the two sides of a ParallelCorpus to plain-text files.
//
// File format:
//   one normalized sentence per line, in input row order,
//   lines joined with '\n', no trailing newline at the end.
//
//   data/darija_clean.txt      data/english_clean.txt
//     bonjour                    hello
//     salam                      hi
//
// Both files are truncated and rewritten on every run; nothing
// is appended. The source file is written first. If writing the
// target fails, the source file is left as written.
//
// Reference: Rust Book §12 (Reading and Writing Files)

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::corpus::ParallelCorpus;
use crate::domain::traits::{CorpusSink, WrittenFiles};
use crate::error::CorpusError;

/// Writes cleaned corpora to two fixed destination files.
/// Implements the CorpusSink trait from Layer 3.
pub struct CorpusWriter {
    source_path: PathBuf,
    target_path: PathBuf,
}

impl CorpusWriter {
    /// Create a new CorpusWriter for the two output paths
    pub fn new(source_path: impl Into<PathBuf>, target_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            target_path: target_path.into(),
        }
    }
}

impl CorpusSink for CorpusWriter {
    fn write(&self, corpus: &ParallelCorpus) -> Result<WrittenFiles, CorpusError> {
        let source_bytes = write_text(&self.source_path, &corpus.source_text())?;
        let target_bytes = write_text(&self.target_path, &corpus.target_text())?;

        tracing::info!(
            "Wrote {} lines to '{}' and '{}'",
            corpus.len(),
            self.source_path.display(),
            self.target_path.display()
        );

        Ok(WrittenFiles {
            source_path: self.source_path.clone(),
            source_bytes,
            target_path: self.target_path.clone(),
            target_bytes,
        })
    }
}

/// Create the parent directory if needed, then replace the file's
/// content with `text`. Returns the number of bytes written.
pub(crate) fn write_text(path: &Path, text: &str) -> Result<u64, CorpusError> {
    // Deliberate addition: a missing parent such as `data/` is created
    // here instead of failing the write with a generic I/O error.
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CorpusError::io(parent, e))?;
    }

    // fs::write truncates an existing file
    fs::write(path, text).map_err(|e| CorpusError::io(path, e))?;
    tracing::debug!("Wrote {} bytes to '{}'", text.len(), path.display());

    Ok(text.len() as u64)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn sample() -> ParallelCorpus {
        let mut c = ParallelCorpus::default();
        c.push("bonjour", "hello");
        c.push("salam", "hi");
        c
    }

    #[test]
    fn test_writes_both_sides() -> Result<()> {
        let dir    = tempfile::tempdir()?;
        let writer = CorpusWriter::new(dir.path().join("src.txt"), dir.path().join("tgt.txt"));

        let written = writer.write(&sample())?;

        assert_eq!(fs::read_to_string(dir.path().join("src.txt"))?, "bonjour\nsalam");
        assert_eq!(fs::read_to_string(dir.path().join("tgt.txt"))?, "hello\nhi");
        assert_eq!(written.source_bytes, 13);
        assert_eq!(written.target_bytes, 8);
        Ok(())
    }

    #[test]
    fn test_overwrites_instead_of_appending() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("src.txt");
        let tgt = dir.path().join("tgt.txt");
        fs::write(&src, "old content that is much longer than the new one")?;
        fs::write(&tgt, "old")?;

        CorpusWriter::new(&src, &tgt).write(&sample())?;

        assert_eq!(fs::read_to_string(&src)?, "bonjour\nsalam");
        assert_eq!(fs::read_to_string(&tgt)?, "hello\nhi");
        Ok(())
    }

    #[test]
    fn test_creates_missing_parent_dirs() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("data").join("darija_clean.txt");
        let tgt = dir.path().join("data").join("english_clean.txt");

        CorpusWriter::new(&src, &tgt).write(&sample())?;

        assert!(src.exists());
        assert!(tgt.exists());
        Ok(())
    }

    #[test]
    fn test_empty_corpus_writes_empty_files() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("src.txt");
        let tgt = dir.path().join("tgt.txt");

        CorpusWriter::new(&src, &tgt).write(&ParallelCorpus::default())?;

        assert_eq!(fs::read_to_string(&src)?, "");
        assert_eq!(fs::read_to_string(&tgt)?, "");
        Ok(())
    }
}
