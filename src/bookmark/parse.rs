// src/bookmark/parse.rs
// =============================================================================
// Turns raw YAML bytes into a BookmarkFile.
//
// Expected input:
//
//   bookmarks:
//     - title: Google
//       url: https://www.google.com/
//       tags: [search, internet]
//       keyword: g
//     - title: Work          # no url => folder
//       children:
//         - title: Grafana
//           url: https://grafana.com/
//
// serde_yaml fills a loose "wire" struct (RawNode) where every field is
// optional. We then convert it into the strict BookmarkNode enum, deciding
// link vs folder by whether a non-empty url is present.
//
// Rust concepts:
// - serde derive: generates the YAML mapping code for us
// - #[serde(deny_unknown_fields)]: reject typos at the top level
// - Recursion: a RawNode contains more RawNodes
// =============================================================================

use log::{debug, warn};
use serde::Deserialize;

use super::model::{BookmarkFile, BookmarkNode, Folder, Link};
use crate::error::BookmarkError;

// The document as written on disk.
//
// Only the `bookmarks` key is allowed at the top level. A missing key or a
// bare `bookmarks:` (null) both mean "no bookmarks".
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFile {
    #[serde(default)]
    bookmarks: Option<Vec<RawNode>>,
}

// One node as written on disk. Unknown keys inside a node are ignored.
#[derive(Debug, Deserialize)]
struct RawNode {
    title: Option<String>,
    url: Option<String>,
    tags: Option<Vec<String>>,
    keyword: Option<String>,
    children: Option<Vec<RawNode>>,
}

// Parses the input bytes into a bookmark tree
//
// Parameters:
//   input: the raw YAML document (must not be empty)
//
// Returns:
//   Ok(BookmarkFile) with every node converted
//   Err(EmptyInput) for a zero-length buffer
//   Err(Parse) for anything serde_yaml rejects (bad nesting, unknown
//   top-level keys, a string where a list is expected, ...)
pub fn parse_input(input: &[u8]) -> Result<BookmarkFile, BookmarkError> {
    if input.is_empty() {
        return Err(BookmarkError::EmptyInput);
    }

    let raw: RawFile = serde_yaml::from_slice(input)?;

    let bookmarks: Vec<BookmarkNode> = raw
        .bookmarks
        .unwrap_or_default()
        .into_iter()
        .map(into_node)
        .collect();

    debug!(
        "parsed {} top-level bookmark node(s), {} of them folders",
        bookmarks.len(),
        bookmarks.iter().filter(|node| node.is_folder()).count()
    );

    Ok(BookmarkFile { bookmarks })
}

// Converts one wire node (and, for folders, its whole subtree)
fn into_node(raw: RawNode) -> BookmarkNode {
    let title = raw.title.unwrap_or_default();
    let children = raw.children.unwrap_or_default();

    match raw.url.filter(|url| !url.is_empty()) {
        Some(url) => {
            let node = BookmarkNode::Link(Link {
                title,
                url,
                tags: raw.tags.unwrap_or_default(),
                keyword: raw.keyword.filter(|keyword| !keyword.is_empty()),
            });

            // A link cannot own children: keep the link, drop the subtree.
            if !children.is_empty() {
                warn!(
                    "bookmark '{}' has a url and {} child node(s); the children are ignored",
                    node.title(),
                    children.len()
                );
            }

            node
        }
        None => BookmarkNode::Folder(Folder {
            title,
            children: children.into_iter().map(into_node).collect(),
        }),
    }
}
