use crate::comments::Literal;
use crate::regions::{Extraction, CLOSE_BRACE, OPEN_BRACE};

pub const TERMINATOR: char = ';';
pub const OPEN_PAREN: char = '(';
pub const CLOSE_PAREN: char = ')';

/// One classifiable unit of outer text.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Block<'a> {
    /// The block verbatim, including its `;` or `{}` ending.
    pub text: &'a str,
    /// The body of the region owned by this block, when it ended with `{}`.
    pub body: Option<&'a str>,
}

impl Block<'_> {
    pub fn ends_with_braces(&self) -> bool {
        self.body.is_some()
    }
}

/// Splits the outer text of `extraction` into blocks.
///
/// A block ends at a `;` outside parentheses and literals, or at a `{}` pair. Content
/// after the last block end is dropped.
pub fn segment(extraction: &Extraction) -> Vec<Block<'_>> {
    let outer = extraction.outer.as_str();
    let mut blocks = Vec::new();
    let mut start = 0;
    let mut paren_depth: usize = 0;
    let mut literal = Literal::default();
    let mut prev: Option<char> = None;
    let mut next_region = 0;

    for (index, c) in outer.char_indices() {
        let end = index + c.len_utf8();
        let in_literal = literal.consume(c);
        match c {
            OPEN_PAREN if !in_literal => paren_depth += 1,
            CLOSE_PAREN if !in_literal => paren_depth = paren_depth.saturating_sub(1),
            _ => {}
        }

        if prev == Some(OPEN_BRACE) && c == CLOSE_BRACE {
            blocks.push(Block {
                text: &outer[start..end],
                body: Some(extraction.region(next_region)),
            });
            next_region += 1;
            paren_depth = 0;
            literal = Literal::default();
            start = end;
        } else if c == TERMINATOR && paren_depth == 0 && !in_literal {
            blocks.push(Block {
                text: &outer[start..end],
                body: None,
            });
            start = end;
        }
        prev = Some(c);
    }

    if start < outer.len() {
        log::trace!("dropping unterminated trailing text {:?}", &outer[start..]);
    }
    blocks
}
