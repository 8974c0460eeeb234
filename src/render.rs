use crate::ast::Node;

const INDENT: &str = "  ";

/// Renders `tree` as one line per node, pre-order, indented two spaces per level.
pub fn render(tree: &Node) -> Vec<String> {
    tree.walk()
        .map(|(depth, node)| format!("{}{}", INDENT.repeat(depth), node.kind))
        .collect()
}
