// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is a single command: read a YAML bookmark tree, print an HTML
// bookmarks file. All configuration lives here as flags.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: for the positional argument that may be left out
// =============================================================================

use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::bookmark::DEFAULT_INDENT;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "bookmark-maker",
    version,
    about = "Generate a bookmarks file in a format importable by browsers",
    long_about = "bookmark-maker turns a YAML file describing your bookmarks and folders into a \
                  Netscape bookmark file that modern browsers can import. \
                  Each bookmark entry has a title and URL, plus optional tags and keyword; \
                  entries without a URL are folders and may hold children. \
                  The generated file is printed to stdout, redirect it to save it.",
    after_help = "Examples:\n  bookmark-maker input.yaml > bookmarks.html\n  cat input.yaml | bookmark-maker"
)]
pub struct Cli {
    /// YAML file to read ("-" or omitted with piped input reads stdin)
    ///
    /// A path given here is read even when something is also piped into stdin.
    pub input: Option<PathBuf>,

    /// Number of spaces per nesting level
    // NonZeroUsize makes clap reject --indent 0 for us
    #[arg(long, default_value_t = default_indent())]
    pub indent: NonZeroUsize,

    /// Print debug information to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn default_indent() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_INDENT).unwrap_or(NonZeroUsize::MIN)
}
