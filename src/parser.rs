use crate::ast::{ConditionalKeyword, Node, NodeKind};
use crate::comments::{strip_block_comments, Literal};
use crate::error::{OutlineError, ParserError};
use crate::regions::{extract, CLOSE_BRACE};
use crate::segmenter::{segment, Block, CLOSE_PAREN, OPEN_PAREN, TERMINATOR};

pub const DEFAULT_MAX_NESTING: usize = 256;

const BRACE_PAIR: &str = "{}";
const CLASS_KEYWORD: &str = "class";
const PACKAGE_KEYWORD: &str = "package";
const IMPORT_KEYWORD: &str = "import";
const STATIC_KEYWORD: &str = "static";
const PARAMETER_SEPARATOR: char = ',';

/// A structural parser for Java-like sources.
///
/// The input is expected to be a single flattened line (see
/// [`crate::utils::flatten_lines`]). Parsing never fails on malformed text: blocks that
/// cannot be classified are left out of the tree. The only error is nesting deeper than
/// the configured budget.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    name: String,
    source_text: &'a str,
    max_nesting: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source_text: &'a str) -> Self {
        Self::new_with_name(source_text, "source.java".to_string())
    }

    pub fn new_with_name(source_text: &'a str, name: String) -> Self {
        Self {
            name,
            source_text,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }

    #[must_use]
    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }

    /// Parses the whole source unit into a `Root` node.
    ///
    /// # Errors
    /// Returns [`ParserError::MaxNestingExceeded`] if regions nest deeper than allowed.
    pub fn parse_unit(&self) -> Result<Node, OutlineError> {
        let text = strip_block_comments(self.source_text);
        let children = self.parse_level(&text, 0)?;
        Ok(Node::new(NodeKind::Root, children))
    }

    /// Runs extraction, segmentation and classification over one nesting level.
    fn parse_level(&self, text: &str, depth: usize) -> Result<Vec<Node>, ParserError> {
        if depth > self.max_nesting {
            log::warn!(
                "{}: nesting depth {depth} exceeds limit {}",
                self.name,
                self.max_nesting
            );
            return Err(ParserError::MaxNestingExceeded {
                name: self.name.clone(),
                limit: self.max_nesting,
            });
        }

        let extraction = extract(text);
        let mut nodes = Vec::new();
        for block in segment(&extraction) {
            if let Some(node) = self.classify(&block, depth)? {
                log::trace!("depth {depth}: {}", node.kind);
                nodes.push(node);
            } else {
                log::debug!("depth {depth}: skipped block {:?}", block.text.trim());
            }
        }
        Ok(nodes)
    }

    /// Produces at most one node for a block. Rules are tried in a fixed order.
    fn classify(&self, block: &Block<'_>, depth: usize) -> Result<Option<Node>, ParserError> {
        // Excess closers stay in the outer text and lead the next block.
        let text = block
            .text
            .trim_start_matches(|c: char| c == CLOSE_BRACE || c.is_whitespace())
            .trim_end();

        if let Some(body) = block.body {
            let header = text.strip_suffix(BRACE_PAIR).unwrap_or(text).trim();
            if header.split_whitespace().any(|word| word == CLASS_KEYWORD) {
                return self.build_class(header, body, depth).map(Some);
            }
            if let Some(keyword) = leading_keyword(header) {
                return self.build_conditional(keyword, header, depth).map(Some);
            }
            return self.build_method(header, body, depth);
        }

        let Some(statement) = text.strip_suffix(TERMINATOR) else {
            return Ok(None);
        };

        if let Some(path) = strip_keyword(statement, PACKAGE_KEYWORD) {
            return Ok(build_package(path));
        }
        if let Some(path) = strip_keyword(statement, IMPORT_KEYWORD) {
            return Ok(build_import(path));
        }
        if let Some(position) = find_assignment(statement) {
            return Ok(build_variable(&statement[..position]));
        }
        Ok(None)
    }

    fn build_class(&self, header: &str, body: &str, depth: usize) -> Result<Node, ParserError> {
        let mut words = header.split_whitespace();
        let qualifiers = words
            .by_ref()
            .take_while(|word| *word != CLASS_KEYWORD)
            .map(str::to_string)
            .collect();
        let name = words.next().unwrap_or_default().to_string();

        let children = self.parse_level(body, depth + 1)?;
        Ok(Node::new(NodeKind::Class { qualifiers, name }, children))
    }

    fn build_conditional(
        &self,
        keyword: ConditionalKeyword,
        header: &str,
        depth: usize,
    ) -> Result<Node, ParserError> {
        let children = match parenthesized(header) {
            Some(inner) => self.parse_level(inner, depth + 1)?,
            None => Vec::new(),
        };
        Ok(Node::new(NodeKind::Conditional { keyword }, children))
    }

    fn build_method(
        &self,
        header: &str,
        body: &str,
        depth: usize,
    ) -> Result<Option<Node>, ParserError> {
        let signature = header.find(OPEN_PAREN).map_or(header, |open| &header[..open]);
        let mut qualifiers: Vec<String> =
            signature.split_whitespace().map(str::to_string).collect();
        let Some(name) = qualifiers.pop() else {
            return Ok(None);
        };

        let mut children = Vec::new();
        if let Some(parameters) = parenthesized(header).map(parse_parameters) {
            if !parameters.children.is_empty() {
                children.push(parameters);
            }
        }
        children.extend(self.parse_level(body, depth + 1)?);
        Ok(Some(Node::new(NodeKind::Method { qualifiers, name }, children)))
    }
}

/// Parses a flattened source unit with the default configuration.
///
/// # Errors
/// Returns an error only when the source nests deeper than [`DEFAULT_MAX_NESTING`].
pub fn parse(text: &str) -> Result<Node, OutlineError> {
    Parser::new(text).parse_unit()
}

/// Splits a parameter list on commas into a `Parameters` node.
///
/// Commas inside generic arguments or nested parentheses are not special, so such
/// parameters come out split.
pub fn parse_parameters(text: &str) -> Node {
    let children = text
        .split(PARAMETER_SEPARATOR)
        .filter_map(|parameter| {
            let words: Vec<&str> = parameter.split_whitespace().collect();
            declaration(&words)
        })
        .collect();
    Node::new(NodeKind::Parameters, children)
}

fn build_package(path: &str) -> Option<Node> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    Some(Node::leaf(NodeKind::Package {
        path: path.split('.').map(|s| s.trim().to_string()).collect(),
    }))
}

fn build_import(body: &str) -> Option<Node> {
    let mut is_static = false;
    let path: String = body
        .split_whitespace()
        .filter(|word| {
            let marker = *word == STATIC_KEYWORD;
            is_static |= marker;
            !marker
        })
        .collect();
    if path.is_empty() {
        return None;
    }

    let (package, name): (Vec<String>, &str) = match path.rsplit_once('.') {
        Some((package, name)) => (package.split('.').map(str::to_string).collect(), name),
        None => (Vec::new(), path.as_str()),
    };
    Some(Node::leaf(NodeKind::Import {
        package,
        name: name.to_string(),
        is_static,
    }))
}

fn build_variable(left_side: &str) -> Option<Node> {
    let words: Vec<&str> = left_side.split_whitespace().collect();
    if words.len() < 2 {
        return None;
    }
    declaration(&words)
}

/// Builds a `Variable` from `qualifiers.. type name`.
fn declaration(words: &[&str]) -> Option<Node> {
    match words {
        [qualifiers @ .., object_type, name] => Some(Node::leaf(NodeKind::Variable {
            qualifiers: qualifiers.iter().map(|q| q.to_string()).collect(),
            object_type: object_type.to_string(),
            name: name.to_string(),
        })),
        _ => None,
    }
}

/// Returns the rest of `statement` if it starts with `keyword` as a whole word.
fn strip_keyword<'s>(statement: &'s str, keyword: &str) -> Option<&'s str> {
    let rest = statement.strip_prefix(keyword)?;
    rest.starts_with(char::is_whitespace).then_some(rest)
}

/// The conditional keyword a header starts with, if any.
fn leading_keyword(header: &str) -> Option<ConditionalKeyword> {
    let end = header
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(header.len());
    ConditionalKeyword::from_word(&header[..end])
}

/// The text between the first `(` and its matching `)`, or to the end when unmatched.
fn parenthesized(text: &str) -> Option<&str> {
    let open = text.find(OPEN_PAREN)?;
    let inner = &text[open + OPEN_PAREN.len_utf8()..];
    let mut depth = 0usize;
    for (index, c) in inner.char_indices() {
        match c {
            OPEN_PAREN => depth += 1,
            CLOSE_PAREN if depth == 0 => return Some(&inner[..index]),
            CLOSE_PAREN => depth -= 1,
            _ => {}
        }
    }
    Some(inner)
}

/// Byte offset of the first plain `=` outside parentheses and literals.
///
/// Comparisons (`==`, `!=`, `<=`, `>=`) and compound assignments (`+=`, `<<=`, ...) are
/// not declarations and are skipped.
fn find_assignment(statement: &str) -> Option<usize> {
    let bytes = statement.as_bytes();
    let mut depth = 0usize;
    let mut literal = Literal::default();
    for (index, c) in statement.char_indices() {
        if literal.consume(c) {
            continue;
        }
        match c {
            OPEN_PAREN => depth += 1,
            CLOSE_PAREN => depth = depth.saturating_sub(1),
            '=' if depth == 0 => {
                let prev = index.checked_sub(1).map(|i| bytes[i]);
                let next = bytes.get(index + 1).copied();
                let is_operator = matches!(
                    prev,
                    Some(b'=' | b'!' | b'<' | b'>' | b'+' | b'-' | b'*' | b'/' | b'%' | b'&' | b'|' | b'^')
                ) || next == Some(b'=');
                if !is_operator {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}
