//! Block-level parsing.
//!
//! Two tightly coupled stages run in a single pass:
//! - the line classifier assigns a structural type to each physical line,
//!   given the type of the block being accumulated;
//! - the assembler groups classified lines into blocks and emits each
//!   completed block through the renderer.
//!
//! Supported blocks: ATX and setext headings, thematic breaks, indented
//! code and paragraphs.

mod emit;
mod line;
mod parser;

pub use line::{Line, LineClassifier, LineType};
pub use parser::BlockParser;
