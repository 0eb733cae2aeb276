// ============================================================
// Layer 4 — Part-of-Speech Classifier
// ============================================================
// Pleco does not export the part of speech as its own field — it
// prepends it to the English gloss ("verb to arrive") and mentions
// further tags in running text. Two passes recover them:
//
//   1. Prefix pass: walk the PARTS_OF_SPEECH list in order against
//      the progressively stripped gloss; every label the text
//      starts with (followed by whitespace) is cut off the front
//      and becomes the primary tag, a later match overwriting an
//      earlier one. A gloss that opens with chained labels
//      ("verb idiom to ...") loses them all and keeps only the
//      last as its tag.
//   2. Containment pass: walk the list again over the remaining
//      text; every label that occurs anywhere as a substring and
//      is not already recorded is appended.
//
// The output order is therefore list order, not the order in which
// labels appear in the gloss. Containment is plain substring
// search, so a label inside a longer word also matches — that is
// how the export has always been read, and card decks built on it
// depend on the tags staying stable.

use crate::domain::vocab::PARTS_OF_SPEECH;

/// Detect the part-of-speech tags of a gloss.
///
/// Returns the comma-joined tag string ("unknown" when nothing was
/// found) together with the gloss text, which has every
/// prefix-matched label (each with the one whitespace character
/// after it) removed from the front.
pub fn find_part_of_speech(gloss: &str) -> (String, String) {
    let mut primary: Option<&str> = None;
    let mut text = gloss;

    // ── Prefix pass ───────────────────────────────────────────────────────
    // The list is walked once; each label is tested against whatever
    // the earlier matches left behind, and the last one to match is
    // the tag that sticks. The label must be followed by whitespace
    // so "verbose ..." is not read as "verb".
    for label in PARTS_OF_SPEECH {
        if let Some(rest) = text.strip_prefix(label) {
            let mut chars = rest.chars();
            if chars.next().is_some_and(char::is_whitespace) {
                primary = Some(label);
                text = chars.as_str();
            }
        }
    }

    let mut labels: Vec<&str> = Vec::new();
    if let Some(label) = primary {
        labels.push(label);
    }

    // ── Containment pass ──────────────────────────────────────────────────
    // Scan what is left of the gloss for the remaining labels.
    for label in PARTS_OF_SPEECH {
        if !labels.contains(&label) && text.contains(label) {
            labels.push(label);
        }
    }

    let part_of_speech = if labels.is_empty() {
        "unknown".to_string()
    } else {
        labels.join(", ")
    };

    (part_of_speech, text.to_string())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_label_is_stripped() {
        let (pos, text) = find_part_of_speech("noun a kind of tree");
        assert_eq!(pos, "noun");
        assert_eq!(text, "a kind of tree");
    }

    #[test]
    fn test_two_word_label() {
        let (pos, text) = find_part_of_speech("measure word for books");
        assert_eq!(pos, "measure word");
        assert_eq!(text, "for books");
    }

    #[test]
    fn test_chained_leading_labels_all_stripped_last_wins() {
        // Both labels come off the front; only the second survives
        // as the tag.
        let (pos, text) = find_part_of_speech("verb idiom to hit the road");
        assert_eq!(pos, "idiom");
        assert_eq!(text, "to hit the road");
    }

    #[test]
    fn test_no_label_yields_unknown() {
        let (pos, text) = find_part_of_speech("a kind of tree");
        assert_eq!(pos, "unknown");
        assert_eq!(text, "a kind of tree");
    }

    #[test]
    fn test_label_prefix_of_longer_word_is_not_stripped() {
        // "verbose" starts with "verb" but there is no whitespace
        // after the label, so the front of the gloss stays intact.
        // The containment pass still sees "verb" inside the word.
        let (pos, text) = find_part_of_speech("verbose description");
        assert_eq!(pos, "verb");
        assert_eq!(text, "verbose description");
    }

    #[test]
    fn test_embedded_labels_appended_in_list_order() {
        // "pronoun" appears before "verb" in the text, but the list
        // order (noun, verb, pronoun) decides the output order —
        // and "noun" also matches inside "pronoun".
        let (pos, _) = find_part_of_speech("used as a pronoun or a verb");
        assert_eq!(pos, "noun, verb, pronoun");
    }

    #[test]
    fn test_primary_label_is_not_repeated() {
        let (pos, text) = find_part_of_speech("noun the noun class");
        assert_eq!(pos, "noun");
        assert_eq!(text, "the noun class");
    }

    #[test]
    fn test_classification_is_deterministic() {
        let input = "verb idiom to hit the road";
        assert_eq!(find_part_of_speech(input), find_part_of_speech(input));
    }
}
