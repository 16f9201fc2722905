//! In-memory attributed graph
//!
//! Vertices and edges live in insertion-ordered vectors and are addressed by
//! dense handles. Adjacency is kept per vertex as a list of incident edges, so
//! parallel edges and self-loops are representable.

use std::collections::HashMap;

use crate::error::{PathmarkError, Result};
use crate::graph::pair::SymmetricPair;
use crate::graph::types::{DisplayAttrs, Edge, EdgeAttrs, EdgeId, Vertex, VertexId};

/// Undirected graph with attributed vertices and weighted edges
#[derive(Debug, Clone, Default)]
pub struct Graph {
    name: Option<String>,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    index: HashMap<String, VertexId>,
    incidence: Vec<Vec<EdgeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph name as given in the interchange format, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Add a vertex; fails if the identity is already taken
    pub fn add_vertex(&mut self, id: impl Into<String>, attrs: DisplayAttrs) -> Result<VertexId> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(PathmarkError::DuplicateVertex { id });
        }

        let handle = VertexId::new(self.vertices.len());
        self.index.insert(id.clone(), handle);
        self.vertices.push(Vertex::new(id, attrs));
        self.incidence.push(Vec::new());
        Ok(handle)
    }

    /// Add an undirected edge between two existing vertices
    pub fn add_edge(&mut self, u: &str, v: &str, weight: i64, attrs: EdgeAttrs) -> Result<EdgeId> {
        let u = self.require_vertex(u)?;
        let v = self.require_vertex(v)?;

        let handle = EdgeId::new(self.edges.len());
        self.edges.push(Edge::new(u, v, weight, attrs));
        self.incidence[u.index()].push(handle);
        if u != v {
            self.incidence[v.index()].push(handle);
        }
        Ok(handle)
    }

    pub fn find_vertex(&self, id: &str) -> Option<VertexId> {
        self.index.get(id).copied()
    }

    fn require_vertex(&self, id: &str) -> Result<VertexId> {
        self.find_vertex(id)
            .ok_or_else(|| PathmarkError::UnknownVertex { id: id.to_string() })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertex handles in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Edge handles in insertion order
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId::new)
    }

    /// Unordered endpoints of an edge
    pub fn endpoints(&self, edge: EdgeId) -> SymmetricPair<VertexId> {
        SymmetricPair::from(self.edges[edge.index()].raw_endpoints())
    }

    /// Edges touching `v`, each listed once (self-loops included)
    pub fn incident_edges(&self, v: VertexId) -> &[EdgeId] {
        &self.incidence[v.index()]
    }

    pub fn vertex(&self, v: VertexId) -> &Vertex {
        &self.vertices[v.index()]
    }

    pub fn vertex_mut(&mut self, v: VertexId) -> &mut Vertex {
        &mut self.vertices[v.index()]
    }

    pub fn edge(&self, e: EdgeId) -> &Edge {
        &self.edges[e.index()]
    }

    pub fn edge_mut(&mut self, e: EdgeId) -> &mut Edge {
        &mut self.edges[e.index()]
    }

    /// Identity string of a vertex handle
    pub fn vertex_name(&self, v: VertexId) -> &str {
        self.vertices[v.index()].id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        for id in ["a", "b", "c"] {
            graph.add_vertex(id, DisplayAttrs::default()).unwrap();
        }
        graph.add_edge("a", "b", 1, EdgeAttrs::default()).unwrap();
        graph.add_edge("b", "c", 2, EdgeAttrs::default()).unwrap();
        graph.add_edge("c", "a", 3, EdgeAttrs::default()).unwrap();
        graph
    }

    #[test]
    fn test_duplicate_vertex_rejected() {
        let mut graph = Graph::new();
        graph.add_vertex("a", DisplayAttrs::default()).unwrap();
        let err = graph.add_vertex("a", DisplayAttrs::default()).unwrap_err();
        assert!(matches!(err, PathmarkError::DuplicateVertex { id } if id == "a"));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_edge_to_unknown_vertex_rejected() {
        let mut graph = Graph::new();
        graph.add_vertex("a", DisplayAttrs::default()).unwrap();
        let err = graph
            .add_edge("a", "ghost", 1, EdgeAttrs::default())
            .unwrap_err();
        assert!(matches!(err, PathmarkError::UnknownVertex { id } if id == "ghost"));
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.incident_edges(VertexId::new(0)).is_empty());
    }

    #[test]
    fn test_iteration_is_insertion_ordered() {
        let graph = triangle();
        let names: Vec<&str> = graph.vertices().map(|v| graph.vertex_name(v)).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        let weights: Vec<i64> = graph.edges().map(|e| graph.edge(e).weight()).collect();
        assert_eq!(weights, vec![1, 2, 3]);
    }

    #[test]
    fn test_endpoints_are_unordered() {
        let graph = triangle();
        let a = graph.find_vertex("a").unwrap();
        let c = graph.find_vertex("c").unwrap();
        let ca = graph.edges().nth(2).unwrap();
        assert_eq!(graph.endpoints(ca), SymmetricPair::new(a, c));
    }

    #[test]
    fn test_incidence_lists() {
        let graph = triangle();
        let b = graph.find_vertex("b").unwrap();
        assert_eq!(graph.incident_edges(b).len(), 2);
    }

    #[test]
    fn test_self_loop_listed_once() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("a", DisplayAttrs::default()).unwrap();
        graph.add_edge("a", "a", 4, EdgeAttrs::default()).unwrap();
        assert_eq!(graph.incident_edges(a).len(), 1);
    }

    #[test]
    fn test_attribute_setters() {
        let mut graph = triangle();
        let a = graph.find_vertex("a").unwrap();
        graph.vertex_mut(a).set_color("red");
        graph.vertex_mut(a).set_line_width(2.5);
        assert_eq!(graph.vertex(a).color(), "red");
        assert_eq!(graph.vertex(a).font_color(), "black");
        assert_eq!(graph.vertex(a).line_width(), 2.5);

        let e = graph.edges().next().unwrap();
        graph.edge_mut(e).set_weight(10);
        graph.edge_mut(e).set_label("ten");
        assert_eq!(graph.edge(e).weight(), 10);
        assert_eq!(graph.edge(e).label(), "ten");
    }
}
