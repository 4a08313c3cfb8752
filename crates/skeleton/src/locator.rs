use crate::error::Result;
use crate::profile::LanguageProfile;
use tree_sitter::{Node, QueryCursor, StreamingIterator, Tree};

/// A body region matched by a profile's query
#[derive(Debug, Clone, Copy)]
pub struct Capture<'a> {
    /// Capture name from the query (`body`)
    pub label: &'a str,
    pub node: Node<'a>,
}

impl<'a> Capture<'a> {
    /// First row of the body (0-based)
    pub fn start_line(&self) -> usize {
        self.node.start_position().row
    }

    /// Last row holding a byte of the body (0-based, inclusive).
    ///
    /// A body whose trailing line break is part of the node ends at column 0
    /// of the next row; that row contains none of the body.
    pub fn end_line(&self) -> usize {
        let end = self.node.end_position();
        if end.column == 0 && end.row > self.start_line() {
            end.row - 1
        } else {
            end.row
        }
    }

    pub fn is_single_line(&self) -> bool {
        self.start_line() == self.end_line()
    }

    /// First child node of the body, if any
    pub fn first_child(&self) -> Option<Node<'a>> {
        self.node.child(0)
    }

    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }
}

/// Run the profile's body query over `tree`, returning captures in document order.
///
/// Nested bodies are all reported; overlapping regions are resolved later by
/// set union in the reducer.
pub fn locate<'a>(
    tree: &'a Tree,
    source: &'a str,
    profile: &'a LanguageProfile,
) -> Result<Vec<Capture<'a>>> {
    let query = profile.query()?;
    let names = query.capture_names();

    let mut cursor = QueryCursor::new();
    let mut captures = Vec::new();

    let mut matches = cursor.matches(query, tree.root_node(), source.as_bytes());
    while let Some(m) = matches.next() {
        for cap in m.captures {
            // Zero-width bodies come from error recovery and carry no text.
            if cap.node.start_byte() == cap.node.end_byte() {
                continue;
            }
            captures.push(Capture {
                label: names[cap.index as usize],
                node: cap.node,
            });
        }
    }

    captures.sort_by_key(|c| (c.node.start_byte(), c.node.end_byte()));

    log::debug!(
        "Located {} {} body captures",
        captures.len(),
        profile.id()
    );
    Ok(captures)
}
