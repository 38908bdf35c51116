// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr only, stdout is reserved for the document)
// 3. Read the YAML input from a file or piped stdin
// 4. Parse + render it into a bookmarks file
// 5. Print the document, or print the error and exit with code 1
//
// The document is built completely in memory before the single write, so a
// failed run never leaves half a bookmarks file on stdout.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod bookmark;      // src/bookmark/ - data model, parsing and rendering
mod cli;           // src/cli.rs - command-line parsing
mod error;         // src/error.rs - error types
mod input;         // src/input/ - reading the file or stdin

use std::io::Write;

use anyhow::Result;
use clap::Parser;  // Parser trait enables the parse() method
use cli::Cli;
use log::LevelFilter;

// Current-thread runtime: one read, one write. Stdin reads still go through
// tokio's blocking pool.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let input = input::read_input(cli.input.as_deref()).await?;
    let document = bookmark::generate(&input, cli.indent.get())?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(document.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

// Sends log output to stderr
//
// Default level is "warn"; --verbose bumps it to "debug".
// RUST_LOG, when set, overrides both.
fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
