// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the data and infra layers for one run.
//
// Rules for this layer:
//   - No text-cleaning rules here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern

// The CSV → two text files workflow
pub mod prepare_use_case;
