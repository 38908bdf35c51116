// src/bookmark/document.rs
// =============================================================================
// Wraps rendered nodes in the fixed Netscape bookmark file header and footer,
// and exposes generate(): bytes in, finished document out.
//
// The header must be byte-exact for browsers to recognise the file, so it is
// one constant string. It ends with the top-level "<DL><p>" (no newline), and
// the footer closes that list.
// =============================================================================

use log::debug;

use super::model::BookmarkNode;
use super::parse::parse_input;
use super::render::render;
use crate::error::BookmarkError;

/// Spaces per nesting level when nothing else is configured
pub const DEFAULT_INDENT: usize = 2;

pub const PREAMBLE: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file.
     It will be read and overwritten.
     DO NOT EDIT! -->
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<meta http-equiv="Content-Security-Policy"
      content="default-src 'self'; script-src 'none'; img-src data: *; object-src 'none'"></meta>
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks Menu</H1>
<DL><p>"#;

pub const POSTAMBLE: &str = "</DL><p>";

// Builds the complete document for a list of top-level nodes
pub fn assemble(nodes: &[BookmarkNode], indent_unit: usize) -> String {
    let mut out = String::from(PREAMBLE);

    for node in nodes {
        out.push_str(&render(node, 0, indent_unit));
    }

    out.push_str(POSTAMBLE);
    out
}

// Parses YAML bytes and renders the full bookmarks document
//
// Nothing is returned (and so nothing gets printed) unless every step
// succeeded.
pub fn generate(input: &[u8], indent_unit: usize) -> Result<String, BookmarkError> {
    let file = parse_input(input)?;
    let document = assemble(&file.bookmarks, indent_unit);

    debug!("rendered bookmarks document ({} bytes)", document.len());

    Ok(document)
}
