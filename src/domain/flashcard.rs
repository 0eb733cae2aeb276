// ============================================================
// Layer 3 — Flashcard Domain Type
// ============================================================
// Represents one finished flashcard: the original Chinese and
// pinyin untouched, the detected part of speech, and the cleaned
// English gloss split into its numbered senses.
//
// Once built a Flashcard is only read (printed) — it is never
// mutated again.
//
// Reference: Rust Book §5 (Structs), §19 (Display trait)

use core::fmt;
use serde::{Deserialize, Serialize};

/// Separator inserted between senses when a multi-sense card is
/// rendered as a single text block. The tabs line the continuation
/// rows up under the "English translation:" column of the preview.
pub const SENSE_SEPARATOR: &str = ";\n\t\t\t";

/// One flashcard derived from a RawEntry.
///
/// `senses` is never empty: an entry without sense numbering yields
/// exactly one sense holding the whole cleaned gloss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    /// Original Chinese text, unmodified
    pub chinese: String,

    /// Original romanization text, unmodified
    pub pinyin: String,

    /// Detected part-of-speech tags, comma-joined for display,
    /// or "unknown" when none was found in the gloss
    pub part_of_speech: String,

    /// The cleaned gloss, one string per numbered sense,
    /// in source order
    pub senses: Vec<String>,
}

impl Flashcard {
    /// The cleaned English gloss as a single displayable block,
    /// senses joined with SENSE_SEPARATOR.
    pub fn english(&self) -> String {
        self.senses.join(SENSE_SEPARATOR)
    }
}

/// The four-line preview format. Labels, tab counts and field order
/// are fixed — output-comparison tests depend on them.
impl fmt::Display for Flashcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Chinese entry:\t\t{}", self.chinese)?;
        writeln!(f, "Pinyin:\t\t\t{}", self.pinyin)?;
        writeln!(f, "English translation:\t{}", self.english())?;
        write!(f, "Part of speech:\t\t{}", self.part_of_speech)
    }
}
