use crate::ast::{Node, NodeKind};
use crate::comments::strip_line_comments;
use crate::error::OutlineError;
use crate::parser::Parser;
use crate::render::render;
use crate::utils::flatten_lines;
use serde::Serialize;

/// The outline of one source file, ready for style rules to inspect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub file_name: String,
    pub tree: Node,
}

impl AnalysisResult {
    /// The outline as text, one node per line.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        render(&self.tree)
    }

    /// Serializes the outline into a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.tree)
    }

    /// Serializes the outline into a YAML string.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.tree)
    }

    /// The first top-level package declaration, as its path segments.
    #[must_use]
    pub fn package(&self) -> Option<&[String]> {
        self.tree.children.iter().find_map(|node| match &node.kind {
            NodeKind::Package { path } => Some(path.as_slice()),
            _ => None,
        })
    }

    /// Top-level import nodes in source order.
    pub fn imports(&self) -> impl Iterator<Item = &Node> {
        self.tree
            .children
            .iter()
            .filter(|node| matches!(node.kind, NodeKind::Import { .. }))
    }

    /// Every class in the tree, including nested ones, in pre-order.
    pub fn classes(&self) -> impl Iterator<Item = &Node> {
        self.tree
            .walk()
            .map(|(_, node)| node)
            .filter(|node| matches!(node.kind, NodeKind::Class { .. }))
    }
}

/// Outlines a multi-line source file.
///
/// Line comments are stripped and the lines are flattened before parsing, so `source`
/// can be the file contents as read from disk.
///
/// # Arguments
///
/// * `source` - The file contents.
/// * `file_name` - The name of the file (used for error reporting).
///
/// # Errors
///
/// Returns an `OutlineError` if the source nests deeper than the parser allows.
pub fn analyze(source: &str, file_name: &str) -> Result<AnalysisResult, OutlineError> {
    let flattened = flatten_lines(&strip_line_comments(source));
    let tree = Parser::new_with_name(&flattened, file_name.to_string()).parse_unit()?;
    Ok(AnalysisResult {
        file_name: file_name.to_string(),
        tree,
    })
}
