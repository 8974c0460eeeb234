//! One level of brace-region extraction.

pub const OPEN_BRACE: char = '{';
pub const CLOSE_BRACE: char = '}';

/// The result of extracting one level of brace nesting from a piece of text.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Extraction {
    /// Text outside the first layer of regions. Each region leaves its delimiters
    /// behind as an adjacent `{}` pair.
    pub outer: String,
    /// Region bodies in source order. The k-th `{}` pair in `outer` owns `regions[k]`.
    pub regions: Vec<String>,
}

impl Extraction {
    /// All region bodies concatenated.
    pub fn leftover(&self) -> String {
        self.regions.concat()
    }

    pub fn region(&self, index: usize) -> &str {
        self.regions.get(index).map_or("", String::as_str)
    }
}

/// Separates `text` into its outer text and the bodies of its top-level brace regions.
///
/// Depth rises on the character after an opener and falls when the next character is
/// a closer, so the delimiters themselves stay in the outer text. Depth never goes
/// below zero: excess closers simply remain outer text.
pub fn extract(text: &str) -> Extraction {
    let mut extraction = Extraction::default();
    let mut depth: usize = 0;
    let mut prev: Option<char> = None;
    let mut in_region = false;
    // Set when an opener at depth zero is directly followed by its closer.
    let mut empty_region = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if prev == Some(OPEN_BRACE) {
            if empty_region {
                empty_region = false;
                extraction.regions.push(String::new());
            } else {
                depth += 1;
            }
        }

        if depth == 0 {
            extraction.outer.push(c);
            in_region = false;
        } else {
            if !in_region {
                extraction.regions.push(String::new());
                in_region = true;
            }
            if let Some(region) = extraction.regions.last_mut() {
                region.push(c);
            }
        }

        if chars.peek() == Some(&CLOSE_BRACE) {
            if depth > 0 {
                depth -= 1;
            } else if c == OPEN_BRACE {
                empty_region = true;
            }
        }
        prev = Some(c);
    }

    log::trace!(
        "extracted {} region(s), {} outer bytes",
        extraction.regions.len(),
        extraction.outer.len()
    );
    extraction
}
