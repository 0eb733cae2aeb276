// ============================================================
// Layer 4 — Invalid Glyph Filter
// ============================================================
// Pleco exports contain characters that render as question-mark
// boxes everywhere outside Pleco itself: the code points from
// 55204 through 63742. The block spans the unassigned tail of the
// Hangul syllables, the surrogate range, and almost all of the
// Private Use Area, which Pleco uses for its own internal symbols.
// None of them carry meaning in the gloss text, so they are
// deleted outright rather than replaced with a placeholder.

/// First code point of the invalid block (inclusive)
const INVALID_FIRST: u32 = 55204;

/// Last code point of the invalid block (inclusive)
const INVALID_LAST: u32 = 63742;

/// Remove every character in the invalid block from `text`.
/// Total function: text without such characters passes through
/// unchanged, and filtering twice equals filtering once.
pub fn strip_invalid_glyphs(text: &str) -> String {
    text.chars()
        .filter(|&c| !(INVALID_FIRST..=INVALID_LAST).contains(&(c as u32)))
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_use_characters_removed() {
        // U+E000 and U+F8FE sit inside the block
        assert_eq!(strip_invalid_glyphs("a\u{e000}b\u{f8fe}c"), "abc");
    }

    #[test]
    fn test_block_boundaries() {
        // One below the block and one above it survive
        assert_eq!(strip_invalid_glyphs("\u{d7a3}"), "\u{d7a3}");
        assert_eq!(strip_invalid_glyphs("\u{f8ff}"), "\u{f8ff}");
        // The first and last code points of the block do not
        assert_eq!(strip_invalid_glyphs("\u{d7a4}"), "");
        assert_eq!(strip_invalid_glyphs("\u{f8fe}"), "");
    }

    #[test]
    fn test_clean_text_is_untouched() {
        let text = "verb 到 dao4 to arrive";
        assert_eq!(strip_invalid_glyphs(text), text);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once  = strip_invalid_glyphs("he\u{e123}llo\u{f000}");
        let twice = strip_invalid_glyphs(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(strip_invalid_glyphs(""), "");
    }
}
