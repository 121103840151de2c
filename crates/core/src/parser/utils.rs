use std::ops::Range;
use tree_sitter::Node;

/// Byte extent of a node. Tree-sitter nodes never include the whitespace or
/// comments around them, so this is the trivia-exclusive content range.
pub fn content_range(node: &Node) -> Range<usize> {
    node.start_byte()..node.end_byte()
}

/// Source text covered by a node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}

/// The first named child of `node` that is not a comment
pub fn first_named_significant_child<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|child| !child.is_extra())
}
