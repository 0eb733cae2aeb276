// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Defines the flags for the single convert operation.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for bad args
//   - type conversion and default values
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::Args;
use crate::application::convert_use_case::ConvertConfig;

/// All arguments for a conversion run.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Directory containing the Pleco .txt export (exactly one file is expected)
    #[arg(long, default_value = "input_files")]
    pub input_dir: String,
}

/// Convert CLI ConvertArgs into the application-layer ConvertConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<ConvertArgs> for ConvertConfig {
    fn from(a: ConvertArgs) -> Self {
        ConvertConfig {
            input_dir: a.input_dir,
        }
    }
}
