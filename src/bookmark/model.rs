// src/bookmark/model.rs
// =============================================================================
// The in-memory bookmark tree.
//
// A node is either a single link or a folder of other nodes. Instead of
// guessing "is this a folder?" from an empty URL every time we look at a node,
// the answer is baked into the type: a BookmarkNode is one of two enum
// variants, and only a Folder can own children.
//
// Ownership is a strict tree: every node is owned by exactly one parent
// (or by the BookmarkFile at the top), so cycles are impossible.
//
// Rust concepts:
// - Enums with struct payloads (a "sum type")
// - Vec<T>: ordered, owned collections (order = rendering order)
// - Option<T>: for the optional shortcut keyword
// =============================================================================

/// A single bookmark pointing at a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub title: String,
    pub url: String,
    /// Free-text labels, emitted comma-joined in this order
    pub tags: Vec<String>,
    /// Address-bar shortcut for the bookmark
    pub keyword: Option<String>,
}

/// A named group of bookmarks and sub-folders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub title: String,
    pub children: Vec<BookmarkNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkNode {
    Link(Link),
    Folder(Folder),
}

impl BookmarkNode {
    pub fn is_folder(&self) -> bool {
        matches!(self, BookmarkNode::Folder(_))
    }

    pub fn title(&self) -> &str {
        match self {
            BookmarkNode::Link(link) => &link.title,
            BookmarkNode::Folder(folder) => &folder.title,
        }
    }
}

/// The root of a parsed document: the top-level nodes in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkFile {
    pub bookmarks: Vec<BookmarkNode>,
}
