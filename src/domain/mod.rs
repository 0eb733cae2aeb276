// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs,
// constants and traits that define the core concepts.
//
// Rules for this layer:
//   - NO file I/O here
//   - NO regex or parsing code here
//   - Only plain Rust structs, consts, and traits
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A raw tab-separated line from the export
pub mod entry;

// A finished flashcard record ready for printing
pub mod flashcard;

// The fixed part-of-speech and topic label vocabularies
pub mod vocab;

// Core abstractions (traits) that other layers implement
pub mod traits;
