// ============================================================
// Layer 2 — ConvertUseCase
// ============================================================
// Orchestrates the full conversion pipeline in order:
//
//   Step 1: Find and parse the export  (Layer 4 - data)
//   Step 2: Normalize each entry       (Layer 4 - data)
//
// The resulting deck is handed back to the CLI layer, which owns
// all printing.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::loader::VocabLoader;
use crate::data::normalizer::EntryNormalizer;
use crate::domain::flashcard::Flashcard;
use crate::domain::traits::EntrySource;

// ─── Conversion Configuration ────────────────────────────────────────────────
// All settings for a conversion run. Serialisable so a run can be
// described in or reproduced from a config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    pub input_dir: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_dir: "input_files".to_string(),
        }
    }
}

// ─── ConvertUseCase ──────────────────────────────────────────────────────────
// Owns the config and runs the full conversion pipeline.
pub struct ConvertUseCase {
    config: ConvertConfig,
}

impl ConvertUseCase {
    /// Create a new ConvertUseCase with the given configuration
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Execute the full conversion pipeline end to end.
    pub fn execute(&self) -> Result<Vec<Flashcard>> {
        let cfg = &self.config;

        // ── Step 1: Find and parse the export ─────────────────────────────
        // VocabLoader locates the one .txt file and splits it into
        // raw entries; malformed lines are warned about and skipped.
        let loader  = VocabLoader::new(&cfg.input_dir);
        let entries = loader.load_all()?;
        tracing::info!("Loaded {} raw entries", entries.len());

        // ── Step 2: Normalize each entry ──────────────────────────────────
        // Entries are independent, so this is a straight map in
        // source order.
        let normalizer = EntryNormalizer::new();
        let deck: Vec<Flashcard> = entries
            .iter()
            .map(|entry| normalizer.normalize(entry))
            .collect();

        Ok(deck)
    }
}
