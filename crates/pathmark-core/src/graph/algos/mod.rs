//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source weighted shortest paths

pub mod dijkstra;

pub use dijkstra::{dijkstra, HeapEntry, PredecessorMap};
