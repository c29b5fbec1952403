// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the raw CSV and the cleaned lines:
//
//   sentences.csv
//       │
//       ▼
//   CsvPairLoader  → reads records, drops the header
//       │
//       ▼
//   Normalizer     → trims, lowercases, strips punctuation
//
// Each module does one step and is tested on its own.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads sentence pairs from the input CSV
pub mod loader;

/// Lowercases text and removes punctuation
pub mod preprocessor;
