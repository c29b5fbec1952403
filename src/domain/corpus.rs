// ============================================================
// Layer 3 — ParallelCorpus Domain Type
// ============================================================
// The cleaned corpus: two index-aligned sequences of lines.
//
//   source_lines[i]  ⟷  target_lines[i]
//
// Both vectors are private and only grow together through
// push(), so they can never drift out of alignment. The length
// is always the number of data rows processed.
//
// Output format:
//   Lines are joined with '\n' and NOT terminated, so the last
//   line of each file has no trailing newline.
//
// Reference: Rust Book §8 (Vectors), §5 (Method Syntax)

/// Two aligned, already-normalized line sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParallelCorpus {
    source: Vec<String>,
    target: Vec<String>,
}

impl ParallelCorpus {
    /// Create an empty corpus with room for `n` pairs
    pub fn with_capacity(n: usize) -> Self {
        Self {
            source: Vec::with_capacity(n),
            target: Vec::with_capacity(n),
        }
    }

    /// Append one aligned pair of cleaned lines
    pub fn push(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.source.push(source.into());
        self.target.push(target.into());
    }

    /// Number of pairs (identical for both sides)
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn source_lines(&self) -> &[String] {
        &self.source
    }

    pub fn target_lines(&self) -> &[String] {
        &self.target
    }

    /// Source side as file content: joined, not terminated
    pub fn source_text(&self) -> String {
        self.source_lines().join("\n")
    }

    /// Target side as file content: joined, not terminated
    pub fn target_text(&self) -> String {
        self.target_lines().join("\n")
    }
}
