// src/bookmark/mod.rs
// =============================================================================
// Everything that turns YAML into a bookmarks file.
//
// Submodules:
// - model: the bookmark tree (links and folders)
// - parse: YAML bytes -> tree
// - render: one node -> markup lines, recursively
// - document: header + rendered nodes + footer
//
// Nothing in here touches files, stdin or stdout; callers hand in bytes and
// get a String back.
// =============================================================================

mod document;
mod model;
mod parse;
mod render;

pub use document::{generate, DEFAULT_INDENT};
