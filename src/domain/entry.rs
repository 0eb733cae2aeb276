// ============================================================
// Layer 3 — RawEntry Domain Type
// ============================================================
// Represents one line of the Pleco export before any processing.
// This is a plain data struct with no behaviour — just the three
// tab-separated fields exactly as they appear in the file.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// One unprocessed vocabulary entry from the export file.
/// The english field still carries everything Pleco hides in it:
/// part-of-speech tags, topic labels, hyperlink leftovers and
/// sense numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEntry {
    /// The Chinese term, first tab field
    pub chinese: String,

    /// The pinyin romanization, second tab field
    pub pinyin: String,

    /// The English gloss, everything after the second tab
    /// (it may itself contain tabs, which are kept)
    pub english: String,
}

impl RawEntry {
    /// Create a new RawEntry.
    /// Uses impl Into<String> so callers can pass &str or String —
    /// this is idiomatic Rust for flexible string arguments.
    pub fn new(
        chinese: impl Into<String>,
        pinyin:  impl Into<String>,
        english: impl Into<String>,
    ) -> Self {
        Self {
            chinese: chinese.into(),
            pinyin:  pinyin.into(),
            english: english.into(),
        }
    }
}
