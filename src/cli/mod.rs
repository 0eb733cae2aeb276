// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// There is exactly one operation — convert — so the binary takes
// no subcommand: running it bare converts the export found in the
// default input directory and prints the flashcards to stdout.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the arguments submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::ConvertArgs;

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "pleco-memrise",
    version = "0.1.0",
    about = "Convert a Pleco vocabulary export into Memrise-ready flashcard text."
)]
pub struct Cli {
    /// Options for the conversion run (all have defaults)
    #[command(flatten)]
    pub args: ConvertArgs,
}

impl Cli {
    /// Run the conversion and print the resulting deck.
    /// This keeps the CLI layer thin — it only routes and prints,
    /// never computes.
    pub fn run(self) -> Result<()> {
        use crate::application::convert_use_case::ConvertUseCase;

        tracing::info!("Converting vocabulary export in: {}", self.args.input_dir);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = ConvertUseCase::new(self.args.into());
        let deck     = use_case.execute()?;

        // One record per entry, blank line after each.
        // Printing happens here and nowhere else.
        for card in &deck {
            println!("{card}");
            println!();
        }

        tracing::info!("Printed {} flashcards", deck.len());
        Ok(())
    }
}
