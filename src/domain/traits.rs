// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - VocabLoader implements EntrySource
//   - a future XML-export loader could also implement EntrySource
//   - the application layer only sees EntrySource
//     and works with both without any changes
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::entry::RawEntry;

// ─── EntrySource ──────────────────────────────────────────────────────────────
/// Any component that can produce raw vocabulary entries.
///
/// Implementations:
///   - VocabLoader → reads the single .txt export in a directory
pub trait EntrySource {
    /// Load all available entries from this source.
    /// Returns a Vec of RawEntry or an error.
    fn load_all(&self) -> Result<Vec<RawEntry>>;
}
