// ============================================================
// Layer 4 — Multi-Sense Splitter
// ============================================================
// Entries with several meanings carry them in one gloss, numbered
// inline: "(mathematics) the set of 1 integers 2 real numbers".
// The marker is a digit run with a single space on each side.
//
// The split walks the gloss left to right. At each marker, the
// text before it (trimmed) becomes the current sense, and the scan
// continues from the digit run itself — so every sense after the
// first keeps its leading number, which is exactly what the
// flashcard rows should show. When no marker is left, the rest is
// the final (or only) sense.
//
// A plain quantity in prose ("weighs 5 kilograms") is
// indistinguishable from a sense marker and splits too. That is a
// known property of the numbering scheme, not something this
// module tries to outsmart.

use once_cell::sync::Lazy;
use regex::Regex;

/// One-or-more digits with a single space on each side.
static RE_SENSE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r" [0-9]+ ").unwrap());

/// Split a cleaned gloss into its numbered senses.
/// Always returns at least one element; a gloss without markers
/// comes back whole, trimmed, as the only sense.
pub fn split_senses(gloss: &str) -> Vec<String> {
    let mut senses = Vec::new();
    let mut rest   = gloss;

    while let Some(m) = RE_SENSE_MARKER.find(rest) {
        // Cut just before the digit run: the leading space stays on
        // this side of the cut and trim() discards it.
        let cut = m.start() + 1;
        senses.push(rest[..cut].trim().to_string());
        rest = &rest[cut..];
    }

    senses.push(rest.trim().to_string());
    senses
}
