//! Graphviz DOT interchange for undirected graphs
//!
//! - `lexer`: tokenizer
//! - `parser`: DOT text to [`Graph`](crate::graph::Graph)
//! - `writer`: [`Graph`](crate::graph::Graph) to DOT text

pub mod lexer;
pub mod parser;
pub mod writer;

pub use parser::parse;
pub use writer::{quote_id, to_string, write};
