// src/input/read.rs
// =============================================================================
// Reads the whole input (file or stdin) into a byte buffer.
//
// We use tokio's async file and stdin handles on a current-thread runtime:
// there is exactly one read per run, start to finish. tokio hands the actual
// file and stdin reads to its blocking thread pool.
//
// Rust concepts:
// - async fn / .await: for the file and stdin reads
// - std::io::IsTerminal: to tell "piped" from "interactive" stdin
// - map_err: to attach the path to an I/O error
// =============================================================================

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use log::debug;
use tokio::io::AsyncReadExt;

use crate::error::BookmarkError;

// Where the YAML comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    fn display_name(&self) -> PathBuf {
        match self {
            InputSource::File(path) => path.clone(),
            InputSource::Stdin => PathBuf::from("<stdin>"),
        }
    }
}

// Picks the input source
//
// Parameters:
//   path: the positional argument, if any
//   stdin_is_terminal: true when nothing is piped in
//
// An explicit path always wins; "-" is the conventional name for stdin.
pub fn resolve_source(path: Option<&Path>, stdin_is_terminal: bool) -> Result<InputSource, BookmarkError> {
    match path {
        Some(path) if path == Path::new("-") => Ok(InputSource::Stdin),
        Some(path) => Ok(InputSource::File(path.to_path_buf())),
        None if !stdin_is_terminal => Ok(InputSource::Stdin),
        None => Err(BookmarkError::MissingInput),
    }
}

// Reads every byte from the chosen source
pub async fn read_source(source: &InputSource) -> Result<Vec<u8>, BookmarkError> {
    let result = match source {
        InputSource::File(path) => tokio::fs::read(path).await,
        InputSource::Stdin => {
            let mut buffer = Vec::new();
            let mut stdin = tokio::io::stdin();
            stdin.read_to_end(&mut buffer).await.map(|_| buffer)
        }
    };

    let bytes = result.map_err(|source_err| BookmarkError::Io {
        path: source.display_name(),
        source: source_err,
    })?;

    debug!("read {} byte(s) from {}", bytes.len(), source.display_name().display());

    Ok(bytes)
}

// Resolves the source against the real stdin and reads it
pub async fn read_input(path: Option<&Path>) -> Result<Vec<u8>, BookmarkError> {
    let source = resolve_source(path, std::io::stdin().is_terminal())?;
    read_source(&source).await
}
