//! Path reconstruction from a predecessor map

use crate::error::{PathmarkError, Result};
use crate::graph::algos::PredecessorMap;
use crate::graph::pair::SymmetricPair;
use crate::graph::types::VertexId;
use crate::graph::GraphProvider;

/// Vertices of a shortest path, ordered from source to destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    vertices: Vec<VertexId>,
}

impl Path {
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn source(&self) -> VertexId {
        self.vertices[0]
    }

    pub fn destination(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// A path always holds at least its source
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }

    /// Consecutive vertex pairs, i.e. the hops the path takes
    pub fn steps(&self) -> impl Iterator<Item = SymmetricPair<VertexId>> + '_ {
        self.vertices
            .windows(2)
            .map(|w| SymmetricPair::new(w[0], w[1]))
    }
}

/// Walk predecessors back from `destination` until `source` is reached.
///
/// The walk is bounded by the number of vertices in the map; a chain that
/// breaks off or runs longer than that is reported as unreachable rather than
/// being patched up.
pub fn reconstruct_path(
    provider: &dyn GraphProvider,
    map: &PredecessorMap,
    destination: VertexId,
) -> Result<Path> {
    let source = map.source();
    let unreachable = || PathmarkError::VertexUnreachable {
        from: provider.vertex_name(source).to_string(),
        to: provider.vertex_name(destination).to_string(),
    };

    let mut vertices = vec![destination];
    let mut current = destination;
    while current != source {
        if vertices.len() > map.len() {
            tracing::warn!(
                destination = provider.vertex_name(destination),
                steps = vertices.len(),
                "predecessor_chain_too_long"
            );
            return Err(unreachable());
        }
        current = map.predecessor(current).ok_or_else(unreachable)?;
        vertices.push(current);
    }

    vertices.reverse();
    Ok(Path { vertices })
}
