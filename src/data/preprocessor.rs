// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Cleans one CSV field before it is written to the corpus.
//
// Cleaning steps (applied in order):
//   1. Trim leading/trailing whitespace      (clean_field only)
//   2. Lowercase every character (Unicode-aware)
//   3. Remove every char that is not a word char or whitespace
//
// "Word char" means a letter (\p{L}) or number (\p{N}) of any
// script, or the underscore. Combining marks and other
// connector punctuation are NOT word chars, so Arabic harakat
// and decomposed accents are stripped while "²" and "½" stay.
// Whitespace is Unicode \s plus the \x1C-\x1F separators.
// It is kept untouched, so this is NOT a tokenizer and does
// not collapse runs of spaces.
//
// Examples:
//   "Hé, ça va?"      → "hé ça va"
//   "Salam!"          → "salam"
//   "snake_Case 42%"  → "snake_case 42"
//   "مَرحبا"          → "مرحبا"
//
// Reference: Rust Book §8 (Strings in Rust)
//            regex crate documentation (Unicode classes)

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is neither a word character nor whitespace.
static PUNCTUATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\p{L}\p{N}_\s\x1C-\x1F]").expect("punctuation pattern is valid")
});

pub struct Normalizer;

impl Normalizer {
    /// Create a new Normalizer instance
    pub fn new() -> Self {
        Self
    }

    /// Lowercase `text` and strip punctuation and symbols.
    /// Pure: the empty string maps to the empty string.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        PUNCTUATION_RE.replace_all(&lowered, "").into_owned()
    }

    /// The per-field step of the pipeline: trim, then normalize.
    pub fn clean_field(&self, raw: &str) -> String {
        self.normalize(raw.trim())
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("Hé, ça va?"), "hé ça va");
        assert_eq!(n.normalize("Hi?!"), "hi");
    }

    #[test]
    fn test_keeps_digits_underscore_and_whitespace() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("snake_Case 42%"), "snake_case 42");
        assert_eq!(n.normalize("a\tb\nc  d"), "a\tb\nc  d");
    }

    #[test]
    fn test_keeps_non_latin_word_chars() {
        let n = Normalizer::new();
        // Arabic question mark (U+061F) is punctuation, the letters stay
        assert_eq!(n.normalize("واش نتا مزيان؟"), "واش نتا مزيان");
        assert_eq!(n.normalize("Привет, МИР!"), "привет мир");
    }

    #[test]
    fn test_strips_marks_and_connectors_keeps_all_numbers() {
        let n = Normalizer::new();
        // decomposed é, superscript two, fatha on meem, undertie
        assert_eq!(
            n.normalize("cafe\u{301} x\u{b2} \u{645}\u{64e} a\u{203f}b"),
            "cafe x\u{b2} \u{645} ab"
        );
        assert_eq!(n.normalize("½ Ⅻ"), "½ ⅻ");
    }

    #[test]
    fn test_keeps_information_separators() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("a\x1cb\x1fc"), "a\x1cb\x1fc");
    }

    #[test]
    fn test_strips_symbols() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("5€ + 3$ = \"cheap\""), "5  3  cheap");
    }

    #[test]
    fn test_empty_string() {
        let n = Normalizer::new();
        assert_eq!(n.normalize(""), "");
        assert_eq!(n.clean_field("   "), "");
    }

    #[test]
    fn test_is_idempotent() {
        let n = Normalizer::new();
        for s in ["Hé, ça va?", "  Salam!!  ", "ÀÉÎ_x-y", "Straße, İstanbul", "واش؟"] {
            let once  = n.normalize(s);
            let twice = n.normalize(&once);
            assert_eq!(once, twice, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_output_has_no_uppercase() {
        let n = Normalizer::new();
        let out = n.normalize("ÀÉÎ ABC Ωμέγα XYZ_123");
        assert!(!out.chars().any(char::is_uppercase), "got {out:?}");
    }

    #[test]
    fn test_clean_field_trims_before_normalizing() {
        let n = Normalizer::new();
        assert_eq!(n.clean_field("  Salam!  "), "salam");
        // Trim happens first, so a lone symbol collapses to empty
        assert_eq!(n.clean_field(" ! "), "");
        // Inner whitespace is left alone
        assert_eq!(n.clean_field("\tBonjour , toi\n"), "bonjour  toi");
    }
}
