// ============================================================
// Layer 3 — Label Vocabularies
// ============================================================
// Pleco hides two kinds of annotations inside the English gloss:
//   - the part of speech ("noun", "measure word", ...)
//   - the topic or register of a sense ("medicine", "slang", ...)
// Both vocabularies are closed: Pleco only ever emits these exact
// strings, so detection is plain substring work against the lists.
//
// ORDER MATTERS in both lists. The classifier and the cleanup
// pipeline traverse them front to back, so the traversal order is
// part of the observable behaviour (which label wins a prefix
// match, how multi-label output is ordered). Treat the lists as
// immutable configuration and never sort them.

/// The part-of-speech tags Pleco prepends or embeds in a gloss,
/// in traversal order.
pub const PARTS_OF_SPEECH: [&str; 11] = [
    "noun",
    "adjective",
    "verb",
    "adverb",
    "idiom",
    "pronoun",
    "preposition",
    "conjunction",
    "interjection",
    "abstract noun",
    "measure word",
];

/// The topic/subject labels Pleco attaches to individual senses,
/// in traversal order. Multi-word labels ("Chinese medicine",
/// "internet slang") are listed before the single words they
/// contain so the longer form wins the alternation.
pub const TOPIC_LABELS: [&str; 51] = [
    "literary",
    "linguistics",
    "archaic",
    "zoology",
    "pejorative",
    "sports",
    "botany",
    "Chinese medicine",
    "medicine",
    "dialect",
    "ichthyology",
    "courteous",
    "polite expression",
    "vulgar",
    "chemistry",
    "electronics",
    "colloquial",
    "dated",
    "ornithology",
    "textile",
    "mathematics",
    "astronomy",
    "internet slang",
    "slang",
    "anatomy",
    "Buddhism",
    "religion",
    "philosophy",
    "Taoism",
    "Christianity",
    "physics",
    "biology",
    "computing",
    "geology",
    "electricity",
    "law",
    "music",
    "formal",
    "informal",
    "abbreviation",
    "history",
    "economics",
    "Islam",
    "Catholicism",
    "transliteration",
    "figurative",
    "metallurgy",
    "mechanics",
    "well-known phrase",
    "loanword",
    "mythology",
];
