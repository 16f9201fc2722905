//! Find-and-highlight pipeline
//!
//! Resolves vertex names, runs the shortest-path engine, reconstructs the path
//! and, for [`mark_shortest_path`], highlights it on the graph. Every step
//! completes before the graph is touched, so a failed run leaves the graph as
//! it was loaded.

use std::time::Instant;

use serde::Serialize;

use crate::error::{PathmarkError, Result};
use crate::graph::{
    annotate_path, dijkstra, reconstruct_path, Graph, HighlightMarker, Path, VertexId,
};
use crate::trace_time;

/// Summary of a pipeline run, suitable for printing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    pub from: String,
    pub to: String,
    pub distance: u128,
    /// Vertex identities from `from` to `to`
    pub path: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_edges: Option<usize>,
}

impl PathReport {
    fn new(graph: &Graph, path: &Path, distance: u128) -> Self {
        Self {
            from: graph.vertex_name(path.source()).to_string(),
            to: graph.vertex_name(path.destination()).to_string(),
            distance,
            path: path
                .vertices()
                .iter()
                .map(|&v| graph.vertex_name(v).to_string())
                .collect(),
            highlighted_edges: None,
        }
    }

    /// Number of hops on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Look up start and destination, reporting every name that is missing
pub fn resolve_endpoints(
    graph: &Graph,
    start: &str,
    destination: &str,
) -> Result<(VertexId, VertexId)> {
    match (graph.find_vertex(start), graph.find_vertex(destination)) {
        (Some(s), Some(d)) => Ok((s, d)),
        (s, d) => {
            let mut ids = Vec::new();
            if s.is_none() {
                ids.push(start.to_string());
            }
            if d.is_none() && (destination != start || s.is_some()) {
                ids.push(destination.to_string());
            }
            Err(PathmarkError::StartOrDestinationNotFound { ids })
        }
    }
}

/// Compute the shortest path and its total weight without modifying the graph
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn shortest_path(graph: &Graph, start: &str, destination: &str) -> Result<(Path, u128)> {
    let begin = Instant::now();
    let (source, target) = resolve_endpoints(graph, start, destination)?;

    let map = dijkstra(graph, source)?;
    trace_time!(begin, "dijkstra");

    let path = reconstruct_path(graph, &map, target)?;
    let distance = map.distance(target).ok_or_else(|| PathmarkError::VertexUnreachable {
        from: graph.vertex_name(source).to_string(),
        to: graph.vertex_name(target).to_string(),
    })?;
    trace_time!(begin, "reconstruct_path", hops = path.len() - 1);

    Ok((path, distance))
}

/// Report the shortest path without annotating the graph
pub fn describe_shortest_path(graph: &Graph, start: &str, destination: &str) -> Result<PathReport> {
    let (path, distance) = shortest_path(graph, start, destination)?;
    Ok(PathReport::new(graph, &path, distance))
}

/// Run the full pipeline: find the shortest path and highlight it in place
pub fn mark_shortest_path(
    graph: &mut Graph,
    start: &str,
    destination: &str,
    marker: &HighlightMarker,
) -> Result<PathReport> {
    let (path, distance) = shortest_path(graph, start, destination)?;
    let highlighted = annotate_path(graph, &path, marker);

    let mut report = PathReport::new(graph, &path, distance);
    report.highlighted_edges = Some(highlighted);
    tracing::info!(
        from = %report.from,
        to = %report.to,
        distance,
        highlighted_edges = highlighted,
        "path_marked"
    );
    Ok(report)
}
