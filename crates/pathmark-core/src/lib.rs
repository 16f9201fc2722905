//! Pathmark Core Library
//!
//! Shortest-path search and path highlighting for undirected, weighted,
//! attributed graphs, plus the Graphviz DOT reader and writer around it.

pub mod config;
pub mod dot;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod pipeline;
