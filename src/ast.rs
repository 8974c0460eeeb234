use serde::Serialize;
use std::fmt::{self, Display};

/// A node of the outline tree. Children are kept in source order.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    Root,
    Package {
        path: Vec<String>,
    },
    Import {
        package: Vec<String>,
        name: String,
        is_static: bool,
    },
    Class {
        qualifiers: Vec<String>,
        name: String,
    },
    Method {
        qualifiers: Vec<String>,
        name: String,
    },
    Variable {
        qualifiers: Vec<String>,
        object_type: String,
        name: String,
    },
    Parameters,
    Conditional {
        keyword: ConditionalKeyword,
    },
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionalKeyword {
    If,
    Else,
    For,
    Do,
    While,
}

impl ConditionalKeyword {
    /// Maps a leading header word to a conditional keyword, if it is one.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            "for" => Some(Self::For),
            "do" => Some(Self::Do),
            "while" => Some(Self::While),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Else => "else",
            Self::For => "for",
            Self::Do => "do",
            Self::While => "while",
        }
    }
}

impl Node {
    pub fn new(kind: NodeKind, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    pub fn leaf(kind: NodeKind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// Depth-first, pre-order walk yielding each node with its depth (root = 0).
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }
}

/// Iterator returned by [`Node::walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

// --- Canonical line forms ---

struct Qualifiers<'a>(&'a [String]);

impl Display for Qualifiers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

impl Display for ConditionalKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Root => write!(f, "root"),
            NodeKind::Package { path } => write!(f, "package: {}", path.join(".")),
            NodeKind::Import {
                package,
                name,
                is_static,
            } => {
                write!(f, "import: ")?;
                if *is_static {
                    write!(f, "static ")?;
                }
                for segment in package {
                    write!(f, "{segment}.")?;
                }
                write!(f, "{name}")
            }
            NodeKind::Class { qualifiers, name } => {
                write!(f, "class: {} {name}", Qualifiers(qualifiers))
            }
            NodeKind::Method { qualifiers, name } => {
                write!(f, "method: {} {name}", Qualifiers(qualifiers))
            }
            NodeKind::Variable {
                qualifiers,
                object_type,
                name,
            } => write!(
                f,
                "variable: {} {object_type} {name}",
                Qualifiers(qualifiers)
            ),
            NodeKind::Parameters => write!(f, "parameters"),
            NodeKind::Conditional { keyword } => write!(f, "conditional: {keyword}"),
        }
    }
}
