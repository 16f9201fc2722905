use crate::error::{PathmarkError, Result};
use crate::graph::types::VertexId;
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance, then vertex)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub distance: u128,
    pub vertex: VertexId,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Result of a single-source run: distance and predecessor per vertex
///
/// The source and every unreachable vertex have no predecessor; they are told
/// apart by the distance, which is `Some(0)` for the source and `None` for
/// unreachable vertices.
///
/// Distances are `u128`: a simple path has fewer than 2^64 edges of at most
/// `i64::MAX` each, so sums never overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap {
    source: VertexId,
    distances: Vec<Option<u128>>,
    predecessors: Vec<Option<VertexId>>,
}

impl PredecessorMap {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Number of vertices covered by the map
    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.predecessors.get(v.index()).copied().flatten()
    }

    /// Shortest distance from the source, `None` if unreachable
    pub fn distance(&self, v: VertexId) -> Option<u128> {
        self.distances.get(v.index()).copied().flatten()
    }

    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.distance(v).is_some()
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        source: VertexId,
        distances: Vec<Option<u128>>,
        predecessors: Vec<Option<VertexId>>,
    ) -> Self {
        Self {
            source,
            distances,
            predecessors,
        }
    }
}

/// Reject graphs with negative weights before any relaxation happens
fn check_weights(provider: &dyn GraphProvider) -> Result<()> {
    for (_, u, v, weight) in provider.weighted_edges() {
        if weight < 0 {
            tracing::warn!(
                from = provider.vertex_name(u),
                to = provider.vertex_name(v),
                weight,
                "negative_weight"
            );
            return Err(PathmarkError::NegativeWeight {
                from: provider.vertex_name(u).to_string(),
                to: provider.vertex_name(v).to_string(),
                weight,
            });
        }
    }
    Ok(())
}

/// Single-source Dijkstra over an undirected graph with non-negative weights.
///
/// Uses a binary heap with lazy deletion, O((V + E) log V). Ties on distance
/// are settled in vertex insertion order so repeated runs give the same tree.
#[tracing::instrument(skip(provider), fields(source = %source, vertices = provider.vertex_count()))]
pub fn dijkstra(provider: &dyn GraphProvider, source: VertexId) -> Result<PredecessorMap> {
    let n = provider.vertex_count();
    if source.index() >= n {
        return Err(PathmarkError::UnknownVertex {
            id: source.to_string(),
        });
    }
    check_weights(provider)?;

    let mut distances: Vec<Option<u128>> = vec![None; n];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    distances[source.index()] = Some(0);
    heap.push(Reverse(HeapEntry {
        distance: 0,
        vertex: source,
    }));

    let mut settled_count = 0usize;
    while let Some(Reverse(HeapEntry { distance, vertex })) = heap.pop() {
        if settled[vertex.index()] {
            continue;
        }
        settled[vertex.index()] = true;
        settled_count += 1;

        for neighbor in provider.neighbors(vertex) {
            let target = neighbor.vertex.index();
            if settled[target] {
                continue;
            }
            // Weights were validated above
            let candidate = distance + u128::from(neighbor.weight.unsigned_abs());
            if distances[target].is_none_or(|known| candidate < known) {
                distances[target] = Some(candidate);
                predecessors[target] = Some(vertex);
                heap.push(Reverse(HeapEntry {
                    distance: candidate,
                    vertex: neighbor.vertex,
                }));
            }
        }
    }

    tracing::debug!(settled = settled_count, "dijkstra_complete");

    Ok(PredecessorMap {
        source,
        distances,
        predecessors,
    })
}

#[cfg(test)]
mod tests;
