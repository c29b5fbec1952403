// ============================================================
// Layer 3 — SentencePair Domain Type
// ============================================================
// One row of the parallel corpus: a sentence in the source
// language and its translation in the target language.
//
// Example (Darija → English):
//   source: "Salam, labas?"
//   target: "Hi, how are you?"
//
// The pair is stored raw, exactly as read from the CSV.
// Cleaning happens later in the data layer so this type
// stays a plain value with no behaviour attached.
//
// Reference: Rust Book §5 (Structs)

/// A raw, aligned sentence pair read from one CSV record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentencePair {
    /// 1-based CSV record number, kept for error messages and logs
    pub record: u64,

    /// Column 0 of the record
    pub source: String,

    /// Column 1 of the record
    pub target: String,
}

impl SentencePair {
    /// Create a new SentencePair.
    /// Accepts &str or String for both sides.
    pub fn new(record: u64, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            record,
            source: source.into(),
            target: target.into(),
        }
    }
}
