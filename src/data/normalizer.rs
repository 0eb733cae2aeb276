// ============================================================
// Layer 4 — Entry Normalizer
// ============================================================
// Turns one RawEntry into one Flashcard by running the pipeline
// stages in their fixed order:
//
//   Step 1: classify    — pull part-of-speech tags off the gloss
//   Step 2: glyph filter— drop the invalid question-mark block
//   Step 3: cleanup     — the six ordered pattern rewrites
//   Step 4: split       — cut the gloss at sense-number markers
//
// Classification runs on the raw gloss, before any filtering:
// the tags sit at the very front of the line, ahead of anything
// the later rewrites touch. Chinese and pinyin pass through
// untouched — only the English gloss is worked on.

use crate::data::classifier::find_part_of_speech;
use crate::data::cleanup::clean_gloss;
use crate::data::glyph::strip_invalid_glyphs;
use crate::data::splitter::split_senses;
use crate::domain::entry::RawEntry;
use crate::domain::flashcard::Flashcard;

/// Normalizes raw entries into flashcards.
/// Stateless; one instance can process any number of entries.
pub struct EntryNormalizer;

impl EntryNormalizer {
    /// Create a new EntryNormalizer instance
    pub fn new() -> Self {
        Self
    }

    /// Build the flashcard for one entry.
    pub fn normalize(&self, entry: &RawEntry) -> Flashcard {
        let (part_of_speech, gloss) = find_part_of_speech(&entry.english);
        let gloss  = strip_invalid_glyphs(&gloss);
        let gloss  = clean_gloss(&gloss);
        let senses = split_senses(&gloss);

        Flashcard {
            chinese: entry.chinese.clone(),
            pinyin:  entry.pinyin.clone(),
            part_of_speech,
            senses,
        }
    }
}

/// Implement Default so EntryNormalizer can be created with
/// EntryNormalizer::default()
impl Default for EntryNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
