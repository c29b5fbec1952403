// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the output side of the disk:
//
//   corpus_writer.rs — writes the two aligned text files,
//                      truncating whatever was there before
//
//   report.rs        — optional JSON summary of a run
//
// Reference: Rust Book §12 (I/O and File Handling)

/// Writes the cleaned source/target text files
pub mod corpus_writer;

/// JSON run report
pub mod report;
