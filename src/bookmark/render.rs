// src/bookmark/render.rs
// =============================================================================
// Renders one bookmark node (and everything below it) as Netscape bookmark
// markup.
//
// Output for a link at depth 0:
//
//   <DT><A HREF = "https://x/" ADD_DATE = "" LAST_MODIFIED = "" TAGS = "a,b">X</A>
//
// Output for a folder at depth 0:
//
//   <DT><H3>CMD</H3>
//   <DL><p>
//     ...children at depth 1...
//   </DL><p>
//
// Attribute names, their order and the spaces around '=' are what browsers'
// importers expect, so they are written out literally. ADD_DATE and
// LAST_MODIFIED are always present but empty: we don't track timestamps.
//
// Rust concepts:
// - Recursion: a folder renders its children by calling back into us
// - &mut String: one buffer is threaded through the whole walk
// - match on enums: the compiler makes sure both node kinds are handled
// =============================================================================

use super::model::{BookmarkNode, Folder, Link};

// Renders a node and its subtree
//
// Parameters:
//   node: the node to render
//   depth: 0 for top-level nodes, +1 per enclosing folder
//   indent_unit: spaces per depth level
//
// Every line ends with '\n' and starts with depth * indent_unit spaces.
pub fn render(node: &BookmarkNode, depth: usize, indent_unit: usize) -> String {
    let mut out = String::new();
    render_into(&mut out, node, depth, indent_unit);
    out
}

// Appends the rendering of `node` to `out`
fn render_into(out: &mut String, node: &BookmarkNode, depth: usize, indent_unit: usize) {
    let indent = " ".repeat(depth * indent_unit);

    match node {
        BookmarkNode::Link(link) => render_link(out, link, &indent),
        BookmarkNode::Folder(folder) => render_folder(out, folder, &indent, depth, indent_unit),
    }
}

fn render_link(out: &mut String, link: &Link, indent: &str) {
    out.push_str(indent);
    out.push_str(r#"<DT><A HREF = ""#);
    out.push_str(&link.url);
    out.push_str(r#"" ADD_DATE = "" LAST_MODIFIED = """#);

    if !link.tags.is_empty() {
        out.push_str(r#" TAGS = ""#);
        out.push_str(&link.tags.join(","));
        out.push('"');
    }

    if let Some(keyword) = link.keyword.as_deref().filter(|k| !k.is_empty()) {
        out.push_str(r#" SHORTCUTURL = ""#);
        out.push_str(keyword);
        out.push('"');
    }

    out.push('>');
    out.push_str(&link.title);
    out.push_str("</A>\n");
}

fn render_folder(out: &mut String, folder: &Folder, indent: &str, depth: usize, indent_unit: usize) {
    out.push_str(indent);
    out.push_str("<DT><H3>");
    out.push_str(&folder.title);
    out.push_str("</H3>\n");

    out.push_str(indent);
    out.push_str("<DL><p>\n");

    for child in &folder.children {
        render_into(out, child, depth + 1, indent_unit);
    }

    out.push_str(indent);
    out.push_str("</DL><p>\n");
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why r#"..."# strings?
//    - They are "raw" strings: backslashes and quotes need no escaping
//    - Handy when the output itself is full of double quotes
//
// 2. Why render_into instead of returning a String from every call?
//    - Each recursive call would otherwise build and copy its own String
//    - Passing one &mut String down the tree keeps a single growing buffer
//
// 3. What does .as_deref() do?
//    - Turns &Option<String> into Option<&str>
//    - Lets us filter and borrow the keyword without cloning it
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn link(title: &str, url: &str, tags: &[&str], keyword: Option<&str>) -> BookmarkNode {
        BookmarkNode::Link(Link {
            title: title.to_string(),
            url: url.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            keyword: keyword.map(str::to_string),
        })
    }

    fn folder(title: &str, children: Vec<BookmarkNode>) -> BookmarkNode {
        BookmarkNode::Folder(Folder {
            title: title.to_string(),
            children,
        })
    }

    #[test]
    fn test_render_link_with_tags() {
        let node = link("Google", "https://www.google.com/", &["search", "internet"], None);
        assert_eq!(
            render(&node, 0, 2),
            "<DT><A HREF = \"https://www.google.com/\" ADD_DATE = \"\" LAST_MODIFIED = \"\" TAGS = \"search,internet\">Google</A>\n"
        );
    }

    #[test]
    fn test_render_link_indented_without_tags() {
        let node = link("Sublink", "https://www.example.com/sublink", &[], None);
        assert_eq!(
            render(&node, 1, 2),
            "  <DT><A HREF = \"https://www.example.com/sublink\" ADD_DATE = \"\" LAST_MODIFIED = \"\">Sublink</A>\n"
        );
    }

    #[test]
    fn test_render_link_with_keyword() {
        let node = link("Amazon", "https://www.amazon.com/", &["shopping"], Some("amazon"));
        assert_eq!(
            render(&node, 0, 2),
            "<DT><A HREF = \"https://www.amazon.com/\" ADD_DATE = \"\" LAST_MODIFIED = \"\" TAGS = \"shopping\" SHORTCUTURL = \"amazon\">Amazon</A>\n"
        );
    }

    #[test]
    fn test_render_empty_keyword_is_omitted() {
        let node = link("A", "https://a.example/", &[], Some(""));
        assert!(!render(&node, 0, 2).contains("SHORTCUTURL"));
    }

    #[test]
    fn test_render_folder() {
        let node = folder(
            "CMD",
            vec![link("Grafana", "https://www.grafana.com/sublink", &[], None)],
        );
        let expected = "<DT><H3>CMD</H3>\n\
                        <DL><p>\n  \
                        <DT><A HREF = \"https://www.grafana.com/sublink\" ADD_DATE = \"\" LAST_MODIFIED = \"\">Grafana</A>\n\
                        </DL><p>\n";
        assert_eq!(render(&node, 0, 2), expected);
    }

    #[test]
    fn test_render_nested_folders() {
        let node = folder(
            "Dev",
            vec![
                link("Sublink", "https://www.example.com/sublink", &[], None),
                folder(
                    "CMD",
                    vec![link("Grafana", "https://www.grafana.com/sublink", &[], None)],
                ),
            ],
        );
        let expected = [
            "<DT><H3>Dev</H3>",
            "<DL><p>",
            "  <DT><A HREF = \"https://www.example.com/sublink\" ADD_DATE = \"\" LAST_MODIFIED = \"\">Sublink</A>",
            "  <DT><H3>CMD</H3>",
            "  <DL><p>",
            "    <DT><A HREF = \"https://www.grafana.com/sublink\" ADD_DATE = \"\" LAST_MODIFIED = \"\">Grafana</A>",
            "  </DL><p>",
            "</DL><p>",
            "",
        ]
        .join("\n");
        assert_eq!(render(&node, 0, 2), expected);
    }

    #[test]
    fn test_render_empty_folder() {
        let node = folder("Empty", vec![]);
        assert_eq!(render(&node, 1, 4), "    <DT><H3>Empty</H3>\n    <DL><p>\n    </DL><p>\n");
    }

    // Random trees: up to 4 levels deep, a handful of children per folder.
    fn arb_node() -> impl Strategy<Value = BookmarkNode> {
        let leaf = (
            "[A-Za-z ]{0,12}",
            "https://[a-z]{1,10}\\.example/[a-z]{0,6}",
            prop::collection::vec("[a-z]{1,8}", 0..4),
            prop::option::of("[a-z]{0,5}"),
        )
            .prop_map(|(title, url, tags, keyword)| {
                BookmarkNode::Link(Link { title, url, tags, keyword })
            });

        leaf.prop_recursive(4, 48, 6, |inner| {
            ("[A-Za-z ]{0,12}", prop::collection::vec(inner, 0..6))
                .prop_map(|(title, children)| BookmarkNode::Folder(Folder { title, children }))
        })
    }

    // (line, depth) for every line render() should produce
    fn expected_depths(node: &BookmarkNode, depth: usize, lines: &mut Vec<usize>) {
        match node {
            BookmarkNode::Link(_) => lines.push(depth),
            BookmarkNode::Folder(folder) => {
                lines.push(depth);
                lines.push(depth);
                for child in &folder.children {
                    expected_depths(child, depth + 1, lines);
                }
                lines.push(depth);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_render_is_deterministic(node in arb_node(), unit in 1usize..5) {
            prop_assert_eq!(render(&node, 0, unit), render(&node, 0, unit));
        }

        #[test]
        fn prop_block_markers_are_balanced(node in arb_node(), depth in 0usize..3) {
            let out = render(&node, depth, 2);
            let mut open = 0usize;
            for line in out.lines() {
                match line.trim_start() {
                    "<DL><p>" => open += 1,
                    "</DL><p>" => {
                        prop_assert!(open > 0, "closing marker without opener");
                        open -= 1;
                    }
                    _ => {}
                }
            }
            prop_assert_eq!(open, 0);
        }

        #[test]
        fn prop_indent_is_depth_times_unit(node in arb_node(), depth in 0usize..3, unit in 1usize..5) {
            let out = render(&node, depth, unit);
            let mut depths = Vec::new();
            expected_depths(&node, depth, &mut depths);

            let lines: Vec<&str> = out.lines().collect();
            prop_assert_eq!(lines.len(), depths.len());
            for (line, d) in lines.iter().zip(depths) {
                let leading = line.len() - line.trim_start_matches(' ').len();
                prop_assert_eq!(leading, d * unit);
            }
            prop_assert!(out.ends_with('\n'));
        }

        #[test]
        fn prop_link_attributes_follow_tags_and_keyword(
            tags in prop::collection::vec("[a-z]{1,8}", 0..4),
            keyword in prop::option::of("[a-z]{0,5}"),
        ) {
            let node = BookmarkNode::Link(Link {
                title: "T".to_string(),
                url: "https://t.example/".to_string(),
                tags: tags.clone(),
                keyword: keyword.clone(),
            });
            let out = render(&node, 0, 2);

            if tags.is_empty() {
                prop_assert!(!out.contains("TAGS"));
            } else {
                let expected = format!(" TAGS = \"{}\"", tags.join(","));
                prop_assert!(out.contains(&expected));
            }

            match keyword.as_deref() {
                Some(k) if !k.is_empty() => {
                    let expected = format!(" SHORTCUTURL = \"{}\">", k);
                    prop_assert!(out.contains(&expected));
                }
                _ => prop_assert!(!out.contains("SHORTCUTURL")),
            }
        }
    }
}
