use crate::graph::model::Graph;
use crate::graph::types::{EdgeId, VertexId};

/// One step away from a vertex along an incident edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub edge: EdgeId,
    pub vertex: VertexId,
    pub weight: i64,
}

/// Trait for providing weighted adjacency to the path algorithms
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;
    fn vertex_name(&self, v: VertexId) -> &str;
    /// Neighbors of `v` in a stable order; self-loops are omitted
    fn neighbors(&self, v: VertexId) -> Vec<Neighbor>;
    /// Every edge as `(edge, u, v, weight)`
    fn weighted_edges(&self) -> Vec<(EdgeId, VertexId, VertexId, i64)>;
}

impl GraphProvider for Graph {
    fn vertex_count(&self) -> usize {
        Graph::vertex_count(self)
    }

    fn vertex_name(&self, v: VertexId) -> &str {
        Graph::vertex_name(self, v)
    }

    fn neighbors(&self, v: VertexId) -> Vec<Neighbor> {
        self.incident_edges(v)
            .iter()
            .filter_map(|&edge_id| {
                let edge = self.edge(edge_id);
                if edge.is_self_loop() {
                    return None;
                }
                edge.opposite(v).map(|vertex| Neighbor {
                    edge: edge_id,
                    vertex,
                    weight: edge.weight(),
                })
            })
            .collect()
    }

    fn weighted_edges(&self) -> Vec<(EdgeId, VertexId, VertexId, i64)> {
        self.edges()
            .map(|e| {
                let edge = self.edge(e);
                let (u, v) = edge.raw_endpoints();
                (e, u, v, edge.weight())
            })
            .collect()
    }
}
