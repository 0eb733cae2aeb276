// ============================================================
// Layer 4 — Vocabulary Export Loader
// ============================================================
// Finds the Pleco export in a directory and parses it into
// RawEntry values.
//
// How the export is shaped:
//   One entry per line, three fields separated by horizontal tabs:
//     <chinese>\t<pinyin>\t<english gloss with annotations>
//   The gloss may itself contain tabs, so the line is split at the
//   first two tabs only and the remainder is kept whole. The file
//   conventionally ends with a newline, leaving one trailing blank
//   line that is not an entry.
//
// Exactly one .txt file is expected in the directory. With none
// there is nothing to convert; with several, picking one silently
// would process the wrong deck, so both cases abort with the
// directory (and the competing names) in the error.
//
// Reference: Rust Book §9 (Error Handling), §12 (I/O)

use anyhow::{bail, Context, Result};
use std::{fs, path::{Path, PathBuf}};

use crate::domain::entry::RawEntry;
use crate::domain::traits::EntrySource;

/// Loads the single .txt export from a given directory.
/// Implements the EntrySource trait from Layer 3.
pub struct VocabLoader {
    /// Path to the directory containing the export
    dir: String,
}

impl VocabLoader {
    /// Create a new VocabLoader pointed at a directory
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: dir.into() }
    }

    /// Locate the one .txt file in the input directory.
    fn find_export_file(&self) -> Result<PathBuf> {
        let dir = Path::new(&self.dir);

        let mut matches: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir))?
        {
            let entry = entry?;
            let path  = entry.path();

            if path.extension().and_then(|e| e.to_str()) == Some("txt") {
                matches.push(path);
            }
        }

        // Directory-listing order is platform noise; sort so the
        // ambiguity diagnostic below is stable.
        matches.sort();

        match matches.len() {
            0 => bail!("No .txt export found in '{}'", self.dir),
            1 => Ok(matches.remove(0)),
            _ => {
                let names: Vec<String> = matches
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect();
                bail!(
                    "Expected exactly one .txt export in '{}', found {}: {}",
                    self.dir,
                    names.len(),
                    names.join(", ")
                )
            }
        }
    }
}

/// Implement the EntrySource trait so the application layer can
/// call load_all() without knowing about file layout.
impl EntrySource for VocabLoader {
    fn load_all(&self) -> Result<Vec<RawEntry>> {
        let path = self.find_export_file()?;
        tracing::info!("Reading vocabulary export '{}'", path.display());

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;

        let mut entries = Vec::new();

        for (lineno, line) in split_records(&raw).iter().enumerate() {
            match parse_record(line) {
                Some(entry) => entries.push(entry),
                // Log a warning but continue — one malformed line
                // should not lose the rest of the deck.
                None => {
                    tracing::warn!(
                        "Skipping line {} of '{}': fewer than 3 tab-separated fields",
                        lineno + 1,
                        path.display()
                    );
                }
            }
        }

        tracing::info!("Successfully loaded {} entries", entries.len());
        Ok(entries)
    }
}

/// Split the raw file into record lines, dropping the blank line a
/// trailing newline leaves at the end.
fn split_records(raw: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = raw.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Parse one line into a RawEntry: split at the first two tabs,
/// keep the remainder whole. Returns None when the line has fewer
/// than three fields.
fn parse_record(line: &str) -> Option<RawEntry> {
    let mut fields = line.splitn(3, '\t');
    let chinese = fields.next()?;
    let pinyin  = fields.next()?;
    let english = fields.next()?;
    Some(RawEntry::new(chinese, pinyin, english))
}
