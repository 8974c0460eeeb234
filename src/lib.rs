pub mod api;
pub mod ast;
pub mod comments;
pub mod error;
pub mod parser;
pub mod regions;
pub mod render;
pub mod segmenter;
pub mod utils;

pub use api::{analyze, AnalysisResult};
pub use ast::{ConditionalKeyword, Node, NodeKind};
pub use error::{OutlineError, ParserError};
pub use parser::{parse, Parser, DEFAULT_MAX_NESTING};
pub use render::render;
