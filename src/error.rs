// src/error.rs
// =============================================================================
// Every way generating a bookmarks file can fail.
//
// The pipeline never recovers locally: each of these is handed straight back
// to main(), printed, and turned into a non-zero exit code. Because the whole
// document is built in memory first, an error always means "nothing written".
//
// Rust concepts:
// - Enums with data: each variant carries what the message needs
// - thiserror: derives std::error::Error and Display from attributes
// - #[from]: lets the ? operator convert a serde_yaml::Error automatically
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookmarkError {
    /// No path was given and nothing is being piped into stdin
    #[error("input file is required, pass a path or pipe the input YAML data")]
    MissingInput,

    /// The input source produced zero bytes
    #[error("blank data is not allowed")]
    EmptyInput,

    /// The bytes are not a valid bookmarks document
    #[error("invalid bookmarks YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The input file (or stdin) could not be read
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
