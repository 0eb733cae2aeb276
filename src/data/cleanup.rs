// ============================================================
// Layer 4 — Gloss Cleanup Pipeline
// ============================================================
// Cleans one English gloss after glyph filtering and before
// sense splitting. The export leaves two kinds of junk behind:
//
//   - Hyperlink leftovers. Pleco cross-references render as a run
//     of digits glued to duplicated Chinese characters ("12你好"),
//     and as stray pinyin syllables glued to the character they
//     romanize ("a1你").
//   - Mispositioned annotations. Topic labels appear bare in the
//     running text, and sometimes sit in front of the sense number
//     instead of after it.
//
// Six rewrites fix this, applied in this exact order:
//
//   1. remove_link_numbers      — delete digit+hanzi link runs
//   2. detach_link_pinyin       — space off stray pinyin syllables
//   3. parenthesize_topic_labels— wrap bare topic labels
//   4. collapse_double_spaces   — two spaces become one
//   5. wrap_see_links           — wrap "See <word> <hanzi>" tips
//   6. lead_with_sense_number   — sense number before annotation
//
// Each step is a pure string-to-string function and a no-op when
// its pattern is absent, so the steps are testable in isolation.
// The order is load-bearing: step 1 leaves double spaces behind
// that step 4 removes, and step 6 only fires on the parentheses
// that step 3 may just have introduced.
//
// Patterns are compiled once into process-wide statics.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::vocab::TOPIC_LABELS;

/// The topic labels as a regex alternation, escaped, in list order
/// so longer labels win over the words they contain.
fn topic_alternation() -> String {
    TOPIC_LABELS
        .iter()
        .map(|label| regex::escape(label))
        .collect::<Vec<_>>()
        .join("|")
}

/// Two-or-more digits glued to one-or-more CJK ideographs:
/// the numeric half of a Pleco cross-reference link.
static RE_LINK_NUMBERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{2,}[\u{4e00}-\u{9fff}]+").unwrap());

/// A single letter+digit pinyin syllable tail glued to a CJK
/// ideograph. The ideograph is kept, so it is captured and
/// re-emitted after the inserted space.
static RE_LINK_PINYIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-zA-Z][0-9])([\u{4e00}-\u{9fff}])").unwrap());

/// A bare topic label followed by whitespace. A label already in
/// parentheses is followed by ')' and therefore never matches.
static RE_BARE_TOPIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"({})(\s)", topic_alternation())).unwrap()
});

/// "See", one word, then CJK text, then one required trailing
/// character. A whitespace tail ends the tip without being part of
/// it; any other tail character belongs inside it. The tail must
/// exist: a tip whose ideograph run is a single character at the
/// very end of the gloss has nothing to close against and is left
/// alone (with two or more, the last ideograph itself is the tail).
static RE_SEE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(See \w+ [\u{4e00}-\u{9fff}]+)(\s|\S)").unwrap());

/// A parenthesized topic annotation at the very front of the gloss,
/// immediately followed by a sense number.
static RE_ANNOTATION_BEFORE_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(\((?:{})\) )(\d )", topic_alternation())).unwrap()
});

/// Step 1: delete every digit+hanzi cross-reference run.
pub fn remove_link_numbers(text: &str) -> String {
    RE_LINK_NUMBERS.replace_all(text, "").into_owned()
}

/// Step 2: detach a stray pinyin syllable from the ideograph after
/// it by inserting a single space. Nothing is deleted.
pub fn detach_link_pinyin(text: &str) -> String {
    RE_LINK_PINYIN.replace_all(text, "$1 $2").into_owned()
}

/// Step 3: wrap bare topic labels in parentheses.
pub fn parenthesize_topic_labels(text: &str) -> String {
    RE_BARE_TOPIC.replace_all(text, "($1)$2").into_owned()
}

/// Step 4: collapse every run of exactly two spaces to one.
/// Single left-to-right pass, not iterated to convergence: a run of
/// five or more spaces still has leftovers afterwards.
pub fn collapse_double_spaces(text: &str) -> String {
    text.replace("  ", " ")
}

/// Step 5: wrap "See ..." cross-reference tips in parentheses.
/// The captured tail decides where the closing parenthesis goes:
/// after the tip when the tail is whitespace, around the tail when
/// it is anything else.
pub fn wrap_see_links(text: &str) -> String {
    RE_SEE_LINK
        .replace_all(text, |caps: &regex::Captures| {
            let tip  = &caps[1];
            let tail = &caps[2];
            if tail.chars().all(char::is_whitespace) {
                format!("({tip}){tail}")
            } else {
                format!("({tip}{tail})")
            }
        })
        .into_owned()
}

/// Step 6: if the gloss starts with "(<topic>) <digit> ", swap the
/// two groups so the sense number leads the line.
pub fn lead_with_sense_number(text: &str) -> String {
    RE_ANNOTATION_BEFORE_NUMBER.replace(text, "$2$1").into_owned()
}

/// Run all six rewrites in order over one gloss.
pub fn clean_gloss(text: &str) -> String {
    let text = remove_link_numbers(text);
    let text = detach_link_pinyin(&text);
    let text = parenthesize_topic_labels(&text);
    let text = collapse_double_spaces(&text);
    let text = wrap_see_links(&text);
    lead_with_sense_number(&text)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    // ── Step 1 ────────────────────────────────────────────────────────────

    #[test]
    fn test_link_numbers_deleted_entirely() {
        assert_eq!(remove_link_numbers("hello 12你好 world"), "hello  world");
        assert_eq!(remove_link_numbers("345连看"), "");
    }

    #[test]
    fn test_single_digit_before_hanzi_survives_step_one() {
        // One digit is a pinyin tone number, not a link id
        assert_eq!(remove_link_numbers("a1你"), "a1你");
    }

    #[test]
    fn test_digits_without_hanzi_survive() {
        assert_eq!(remove_link_numbers("around 1900 it was"), "around 1900 it was");
    }

    // ── Step 2 ────────────────────────────────────────────────────────────

    #[test]
    fn test_pinyin_tail_detached_not_deleted() {
        assert_eq!(detach_link_pinyin("a1你"), "a1 你");
        assert_eq!(detach_link_pinyin("see hao3好 here"), "see hao3 好 here");
    }

    #[test]
    fn test_pinyin_already_spaced_is_untouched() {
        assert_eq!(detach_link_pinyin("hao3 好"), "hao3 好");
    }

    // ── Step 3 ────────────────────────────────────────────────────────────

    #[test]
    fn test_bare_topic_label_is_wrapped() {
        assert_eq!(
            parenthesize_topic_labels("literary to depart"),
            "(literary) to depart"
        );
    }

    #[test]
    fn test_wrapped_topic_label_is_not_rewrapped() {
        assert_eq!(
            parenthesize_topic_labels("(literary) to depart"),
            "(literary) to depart"
        );
    }

    #[test]
    fn test_longer_label_wins_over_contained_word() {
        assert_eq!(
            parenthesize_topic_labels("Chinese medicine term"),
            "(Chinese medicine) term"
        );
        assert_eq!(
            parenthesize_topic_labels("internet slang term"),
            "(internet slang) term"
        );
    }

    #[test]
    fn test_label_at_end_of_text_is_not_wrapped() {
        // No following whitespace, no match
        assert_eq!(parenthesize_topic_labels("pure mathematics"), "pure mathematics");
    }

    // ── Step 4 ────────────────────────────────────────────────────────────

    #[test]
    fn test_double_space_becomes_single() {
        assert_eq!(collapse_double_spaces("a  b"), "a b");
    }

    #[test]
    fn test_collapse_is_a_single_pass() {
        // Four spaces collapse to two, five to three — the pass is
        // deliberately not repeated to convergence.
        assert_eq!(collapse_double_spaces("a    b"), "a  b");
        assert_eq!(collapse_double_spaces("a     b"), "a   b");
    }

    // ── Step 5 ────────────────────────────────────────────────────────────

    #[test]
    fn test_see_tip_wrapped_up_to_whitespace() {
        assert_eq!(
            wrap_see_links("See ni3 你好 for more"),
            "(See ni3 你好) for more"
        );
    }

    #[test]
    fn test_see_tip_at_end_of_gloss_needs_a_tail() {
        // One ideograph and then end-of-text: no tail, no wrap
        assert_eq!(wrap_see_links("also See hao3 好"), "also See hao3 好");
        // With two ideographs the second one is the tail
        assert_eq!(wrap_see_links("also See ni3 你好"), "also (See ni3 你好)");
    }

    #[test]
    fn test_see_tip_takes_one_trailing_character() {
        assert_eq!(
            wrap_see_links("See ni3 你好, elsewhere"),
            "(See ni3 你好,) elsewhere"
        );
    }

    // ── Step 6 ────────────────────────────────────────────────────────────

    #[test]
    fn test_annotation_and_sense_number_swap() {
        assert_eq!(
            lead_with_sense_number("(literary) 1 old term"),
            "1 (literary) old term"
        );
    }

    #[test]
    fn test_no_swap_without_sense_number() {
        assert_eq!(
            lead_with_sense_number("(literary) old term"),
            "(literary) old term"
        );
    }

    #[test]
    fn test_no_swap_when_annotation_is_not_leading() {
        assert_eq!(
            lead_with_sense_number("old (literary) 1 term"),
            "old (literary) 1 term"
        );
    }

    // ── Composed pipeline ─────────────────────────────────────────────────

    #[test]
    fn test_full_cleanup_of_linked_gloss() {
        // Step 1 deletes the link run and leaves a double space
        // behind; step 4 closes it up again.
        assert_eq!(clean_gloss("to meet 12你好 again"), "to meet again");
    }

    #[test]
    fn test_full_cleanup_wraps_then_swaps() {
        assert_eq!(
            clean_gloss("literary 1 old term"),
            "1 (literary) old term"
        );
    }

    #[test]
    fn test_cleanup_is_a_no_op_on_clean_text() {
        let text = "1 (literary) old term;2 modern term";
        assert_eq!(clean_gloss(text), text);
    }
}
