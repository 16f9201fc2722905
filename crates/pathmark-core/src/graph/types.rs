use serde::{Deserialize, Serialize};
use std::fmt;

/// Default color tag for vertices and edges
pub const DEFAULT_COLOR: &str = "black";

/// Default line width for vertices and edges
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Handle to a vertex, dense index in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) fn new(index: usize) -> Self {
        VertexId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Handle to an edge, dense index in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

impl EdgeId {
    pub(crate) fn new(index: usize) -> Self {
        EdgeId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Display attributes shared by vertices and edges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayAttrs {
    pub color: String,
    pub font_color: String,
    pub line_width: f64,
}

impl Default for DisplayAttrs {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            font_color: DEFAULT_COLOR.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// Attribute values applied to vertices and edges that lie on the path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightMarker {
    pub color: String,
    pub font_color: String,
    pub line_width: f64,
}

impl Default for HighlightMarker {
    fn default() -> Self {
        Self {
            color: "green".to_string(),
            font_color: "green".to_string(),
            line_width: 3.0,
        }
    }
}

impl HighlightMarker {
    /// Overwrite display attributes with the marker values
    pub fn apply(&self, attrs: &mut DisplayAttrs) {
        attrs.color.clone_from(&self.color);
        attrs.font_color.clone_from(&self.font_color);
        attrs.line_width = self.line_width;
    }
}

/// A named vertex with display attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    id: String,
    display: DisplayAttrs,
}

impl Vertex {
    pub(crate) fn new(id: String, display: DisplayAttrs) -> Self {
        Self { id, display }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display(&self) -> &DisplayAttrs {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut DisplayAttrs {
        &mut self.display
    }

    pub fn color(&self) -> &str {
        &self.display.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.display.color = color.into();
    }

    pub fn font_color(&self) -> &str {
        &self.display.font_color
    }

    pub fn set_font_color(&mut self, font_color: impl Into<String>) {
        self.display.font_color = font_color.into();
    }

    pub fn line_width(&self) -> f64 {
        self.display.line_width
    }

    pub fn set_line_width(&mut self, line_width: f64) {
        self.display.line_width = line_width;
    }
}

/// Attributes supplied when an edge is added to a graph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeAttrs {
    /// Informational label; `None` means "use the textual weight"
    pub label: Option<String>,
    pub display: DisplayAttrs,
}

/// An undirected weighted connection between two vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    endpoints: (VertexId, VertexId),
    weight: i64,
    label: String,
    display: DisplayAttrs,
}

impl Edge {
    pub(crate) fn new(u: VertexId, v: VertexId, weight: i64, attrs: EdgeAttrs) -> Self {
        let label = attrs.label.unwrap_or_else(|| weight.to_string());
        Self {
            endpoints: (u, v),
            weight,
            label,
            display: attrs.display,
        }
    }

    /// Endpoints in the order they were given; order carries no meaning
    pub fn raw_endpoints(&self) -> (VertexId, VertexId) {
        self.endpoints
    }

    /// The endpoint opposite to `v`, if `v` is one of the endpoints
    pub fn opposite(&self, v: VertexId) -> Option<VertexId> {
        match self.endpoints {
            (a, b) if a == v => Some(b),
            (a, b) if b == v => Some(a),
            _ => None,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.endpoints.0 == self.endpoints.1
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: i64) {
        self.weight = weight;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn display(&self) -> &DisplayAttrs {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut DisplayAttrs {
        &mut self.display
    }

    pub fn color(&self) -> &str {
        &self.display.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.display.color = color.into();
    }

    pub fn font_color(&self) -> &str {
        &self.display.font_color
    }

    pub fn set_font_color(&mut self, font_color: impl Into<String>) {
        self.display.font_color = font_color.into();
    }

    pub fn line_width(&self) -> f64 {
        self.display.line_width
    }

    pub fn set_line_width(&mut self, line_width: f64) {
        self.display.line_width = line_width;
    }
}
