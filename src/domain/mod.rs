// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits describing the corpus.
//
// Rules for this layer:
//   - NO file I/O
//   - NO CSV or regex code
//   - Only data types and the traits other layers implement
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One raw row of the parallel corpus
pub mod sentence_pair;

// The cleaned, index-aligned corpus
pub mod corpus;

// Seams between application, data and infra layers
pub mod traits;
