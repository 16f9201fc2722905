//! Highlighting of a reconstructed path on the graph

use crate::graph::model::Graph;
use crate::graph::path::Path;
use crate::graph::types::HighlightMarker;

/// Apply `marker` to every vertex of `path` and to every edge joining two
/// consecutive path vertices. Returns the number of edges highlighted.
///
/// Values are overwritten, never accumulated, so repeating the call on an
/// already annotated graph leaves it unchanged. Every parallel edge between
/// two consecutive vertices is highlighted.
pub fn annotate_path(graph: &mut Graph, path: &Path, marker: &HighlightMarker) -> usize {
    for &v in path.vertices() {
        marker.apply(graph.vertex_mut(v).display_mut());
    }

    let steps: Vec<_> = path.steps().collect();
    let on_path: Vec<_> = graph
        .edges()
        .filter(|&e| {
            let endpoints = graph.endpoints(e);
            steps.iter().any(|step| *step == endpoints)
        })
        .collect();

    for &e in &on_path {
        marker.apply(graph.edge_mut(e).display_mut());
    }

    tracing::debug!(
        vertices = path.len(),
        edges = on_path.len(),
        "annotate_path"
    );
    on_path.len()
}
