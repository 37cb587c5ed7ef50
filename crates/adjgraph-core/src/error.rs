//! Error types for adjgraph Core

use thiserror::Error;

/// Result type alias using adjgraph's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Graph error types
///
/// Vertex identifiers are carried in their `Debug` rendering so the error
/// stays independent of the graph's type parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Duplicate vertex in initial vertex set: {0}")]
    DuplicateVertex(String),

    #[error("Duplicate edge: {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("Vertex not found: {0}")]
    VertexNotFound(String),
}

impl Error {
    pub(crate) fn vertex_not_found(vertex: &impl std::fmt::Debug) -> Self {
        Self::VertexNotFound(format!("{:?}", vertex))
    }

    pub(crate) fn duplicate_edge(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        Self::DuplicateEdge {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}
