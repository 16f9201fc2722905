//! Attributed graph model and shortest-path operations
//!
//! Provides the pieces of the find-and-highlight pipeline:
//! - `model`: undirected graph with attributed vertices and weighted edges
//! - `pair`: unordered pair used to match edges against path steps
//! - `algos`: Dijkstra producing a predecessor map
//! - `path`: predecessor-chain reconstruction
//! - `annotate`: applying the highlight marker to a path
//! - `traversal`: adjacency provider trait consumed by the algorithms

pub mod algos;
pub mod annotate;
pub mod model;
pub mod pair;
pub mod path;
pub mod traversal;
pub mod types;

pub use algos::{dijkstra, PredecessorMap};
pub use annotate::annotate_path;
pub use model::Graph;
pub use pair::SymmetricPair;
pub use path::{reconstruct_path, Path};
pub use traversal::{GraphProvider, Neighbor};
pub use types::{
    DisplayAttrs, Edge, EdgeAttrs, EdgeId, HighlightMarker, Vertex, VertexId, DEFAULT_COLOR,
    DEFAULT_LINE_WIDTH,
};
