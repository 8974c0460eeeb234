//! Comment removal for flattened and multi-line sources.

pub const BLOCK_COMMENT_OPEN: &str = "/*";
pub const BLOCK_COMMENT_CLOSE: &str = "*/";
pub const LINE_COMMENT: &str = "//";

/// Removes every block comment from `text`.
///
/// Markers do not nest. An unterminated comment swallows the rest of the text.
pub fn strip_block_comments(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(BLOCK_COMMENT_OPEN) {
        result.push_str(&rest[..start]);
        let inside = &rest[start + BLOCK_COMMENT_OPEN.len()..];
        match inside.find(BLOCK_COMMENT_CLOSE) {
            Some(end) => rest = &inside[end + BLOCK_COMMENT_CLOSE.len()..],
            None => {
                log::debug!("unterminated block comment, dropping {} bytes", inside.len());
                return result;
            }
        }
    }
    result.push_str(rest);
    result
}

/// Removes `//` comments from each line of `source`, keeping the line structure.
///
/// Markers inside string or char literals, and inside block comments that may span
/// several lines, are left alone. Block comments themselves are kept for
/// [`strip_block_comments`].
pub fn strip_line_comments(source: &str) -> String {
    let mut in_block = false;
    source
        .lines()
        .map(|line| {
            let (code, still_in_block) = scan_line(line, in_block);
            in_block = still_in_block;
            code
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tracks whether a left-to-right scan is inside a string or char literal.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Literal {
    quote: Option<char>,
    escaped: bool,
}

impl Literal {
    /// Feeds one character. Returns true if it belongs to a literal, quotes included.
    pub(crate) fn consume(&mut self, c: char) -> bool {
        match self.quote {
            Some(quote) => {
                if self.escaped {
                    self.escaped = false;
                } else if c == '\\' {
                    self.escaped = true;
                } else if c == quote {
                    self.quote = None;
                }
                true
            }
            None if c == '"' || c == '\'' => {
                self.quote = Some(c);
                true
            }
            None => false,
        }
    }
}

/// Returns the line cut at its line comment, and whether a block comment is still open.
fn scan_line(line: &str, mut in_block: bool) -> (&str, bool) {
    let mut literal = Literal::default();
    let mut resume_at = 0;
    for (i, c) in line.char_indices() {
        if i < resume_at {
            continue;
        }
        let rest = &line[i..];
        if in_block {
            if rest.starts_with(BLOCK_COMMENT_CLOSE) {
                in_block = false;
                resume_at = i + BLOCK_COMMENT_CLOSE.len();
            }
        } else if literal.consume(c) {
            continue;
        } else if rest.starts_with(LINE_COMMENT) {
            return (&line[..i], false);
        } else if rest.starts_with(BLOCK_COMMENT_OPEN) {
            in_block = true;
            resume_at = i + BLOCK_COMMENT_OPEN.len();
        }
    }
    (line, in_block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_javadoc() {
        let text = "/** Docs. */public class Foo{}";
        assert_eq!(strip_block_comments(text), "public class Foo{}");
    }

    #[test]
    fn test_strips_several_comments() {
        let text = "a/* one */b/** two */c";
        assert_eq!(strip_block_comments(text), "abc");
    }

    #[test]
    fn test_comment_markers_do_not_nest() {
        let text = "a/* outer /* inner */b*/c";
        assert_eq!(strip_block_comments(text), "ab*/c");
    }

    #[test]
    fn test_close_marker_must_follow_open_marker() {
        // `/*/` does not close itself.
        assert_eq!(strip_block_comments("a/*/b*/c"), "ac");
        assert_eq!(strip_block_comments("a/**/b"), "ab");
    }

    #[test]
    fn test_unterminated_comment_swallows_rest() {
        assert_eq!(strip_block_comments("int x = 1;/** never closed"), "int x = 1;");
    }

    #[test]
    fn test_text_without_comments_is_unchanged() {
        let text = "import java.util.*;int a = 2 * 3;";
        assert_eq!(strip_block_comments(text), text);
    }

    #[test]
    fn test_line_comments_are_cut() {
        let source = "int x = 1; // one\n// whole line\nint y = 2;";
        assert_eq!(strip_line_comments(source), "int x = 1; \n\nint y = 2;");
    }

    #[test]
    fn test_line_comment_markers_in_literals_are_kept() {
        let source = r#"String url = "http://example.com"; // site"#;
        assert_eq!(
            strip_line_comments(source),
            r#"String url = "http://example.com"; "#
        );

        let escaped = r#"String s = "a\"//b"; char c = '"'; // end"#;
        assert_eq!(
            strip_line_comments(escaped),
            r#"String s = "a\"//b"; char c = '"'; "#
        );
    }

    #[test]
    fn test_line_comments_after_non_ascii_text() {
        let source = "String s = \"ü//ñ\"; // é\nchar ß = 'ö'; /* ƒ */ // x";
        assert_eq!(
            strip_line_comments(source),
            "String s = \"ü//ñ\"; \nchar ß = 'ö'; /* ƒ */ "
        );
    }

    #[test]
    fn test_literal_tracks_escapes() {
        let mut literal = Literal::default();
        let inside: Vec<bool> = r#"a"b\"c"d"#.chars().map(|c| literal.consume(c)).collect();
        assert_eq!(
            inside,
            vec![false, true, true, true, true, true, true, false]
        );
    }

    #[test]
    fn test_line_comment_markers_in_block_comments_are_kept() {
        let source = "/*\n * see http://example.com\n */\nint x; // gone";
        assert_eq!(
            strip_line_comments(source),
            "/*\n * see http://example.com\n */\nint x; "
        );
    }
}
