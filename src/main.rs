mod cli;
mod application;
mod domain;
mod data;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    // Diagnostics go to stderr so the flashcard records on stdout can be
    // redirected straight into a file.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pleco_memrise=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
