//! Error types and exit codes for pathmark
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed graph, unknown vertex, negative weight)
//! - 4: Destination unreachable from the start vertex

mod macros;

use thiserror::Error;

/// Exit codes for the pathmark binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - graph or query cannot be processed (3)
    Data = 3,
    /// No path exists between the requested vertices (4)
    Unreachable = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading, searching or annotating a graph
#[derive(Error, Debug)]
pub enum PathmarkError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Graph construction errors (exit code 3)
    #[error("duplicate vertex: {id}")]
    DuplicateVertex { id: String },

    #[error("unknown vertex: {id}")]
    UnknownVertex { id: String },

    #[error("edge {from} -- {to} has negative weight {weight}; shortest paths are undefined")]
    NegativeWeight {
        from: String,
        to: String,
        weight: i64,
    },

    #[error("vertex not found in graph: {}", .ids.join(", "))]
    StartOrDestinationNotFound { ids: Vec<String> },

    #[error("graph must be undirected")]
    DirectedGraph,

    #[error("DOT syntax error on line {line}: {reason}")]
    DotSyntax { line: usize, reason: String },

    #[error("invalid value for attribute {attribute}: {value}")]
    InvalidAttribute { attribute: String, value: String },

    // Topology outcome (exit code 4)
    #[error("no path from {from} to {to}")]
    VertexUnreachable { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl PathmarkError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathmarkError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed DOT document
    pub fn dot_syntax(line: usize, reason: impl Into<String>) -> Self {
        PathmarkError::DotSyntax {
            line,
            reason: reason.into(),
        }
    }

    /// Create an error for an attribute value that does not parse
    pub fn invalid_attribute(attribute: &str, value: impl std::fmt::Display) -> Self {
        PathmarkError::InvalidAttribute {
            attribute: attribute.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        PathmarkError::Other(format!("failed to {} {}: {}", operation, path, error))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathmarkError::UnknownFormat(_)
            | PathmarkError::UsageError(_)
            | PathmarkError::InvalidValue { .. } => ExitCode::Usage,

            PathmarkError::DuplicateVertex { .. }
            | PathmarkError::UnknownVertex { .. }
            | PathmarkError::NegativeWeight { .. }
            | PathmarkError::StartOrDestinationNotFound { .. }
            | PathmarkError::DirectedGraph
            | PathmarkError::DotSyntax { .. }
            | PathmarkError::InvalidAttribute { .. } => ExitCode::Data,

            PathmarkError::VertexUnreachable { .. } => ExitCode::Unreachable,

            PathmarkError::Io(_)
            | PathmarkError::Json(_)
            | PathmarkError::Toml(_)
            | PathmarkError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathmarkError::UnknownFormat(_) => "unknown_format",
            PathmarkError::UsageError(_) => "usage_error",
            PathmarkError::InvalidValue { .. } => "invalid_value",
            PathmarkError::DuplicateVertex { .. } => "duplicate_vertex",
            PathmarkError::UnknownVertex { .. } => "unknown_vertex",
            PathmarkError::NegativeWeight { .. } => "negative_weight",
            PathmarkError::StartOrDestinationNotFound { .. } => "start_or_destination_not_found",
            PathmarkError::DirectedGraph => "directed_graph",
            PathmarkError::DotSyntax { .. } => "dot_syntax",
            PathmarkError::InvalidAttribute { .. } => "invalid_attribute",
            PathmarkError::VertexUnreachable { .. } => "vertex_unreachable",
            PathmarkError::Io(_) => "io_error",
            PathmarkError::Json(_) => "json_error",
            PathmarkError::Toml(_) => "toml_error",
            PathmarkError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathmark operations
pub type Result<T> = std::result::Result<T, PathmarkError>;
