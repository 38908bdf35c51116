// src/input/mod.rs
// =============================================================================
// This module gets the YAML bytes into memory.
//
// Sources, in order of preference:
// - a path given on the command line ("-" also means stdin)
// - whatever is piped into stdin
//
// If neither is available we fail early with MissingInput instead of
// sitting there waiting for someone to type YAML into the terminal.
// =============================================================================

mod read;

pub use read::read_input;
