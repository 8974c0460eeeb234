use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum OutlineError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parser(#[from] ParserError),
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("Maximum nesting depth of {limit} exceeded in {name}")]
    #[diagnostic(
        code(parser::max_nesting_exceeded),
        help("The source nests braces or parentheses deeper than the parser allows. Raise the limit with `Parser::with_max_nesting` if this is expected.")
    )]
    MaxNestingExceeded { name: String, limit: usize },
}
