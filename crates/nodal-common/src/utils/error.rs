//! Error types for Nodal.
//!
//! Every variant is recoverable: a failed operation leaves the graph in the
//! state it had before the call. "Unreachable" and "disconnected" are not
//! errors; algorithms report them through `None` sentinels in their results.

use crate::types::{EdgeKind, VertexKey};
use thiserror::Error;

/// Result type alias for Nodal operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by graph storages and algorithms.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A vertex identity is not present in the graph.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    /// A vertex identity was added twice.
    #[error("vertex already present: {0}")]
    DuplicateVertex(String),

    /// A weighted edge was added to an unweighted graph, or vice versa.
    #[error("graph expects {expected} edges, got a {found} edge")]
    EdgeKindMismatch {
        /// The edge kind the graph accepts.
        expected: EdgeKind,
        /// The edge kind that was supplied.
        found: EdgeKind,
    },

    /// An edge weight was NaN or infinite.
    #[error("edge weight must be finite, got {0}")]
    NonFiniteWeight(f64),

    /// The algorithm requires a weighted graph.
    #[error("{algorithm} requires a weighted graph")]
    UnweightedGraph {
        /// Name of the rejecting algorithm.
        algorithm: &'static str,
    },

    /// The algorithm requires an undirected graph.
    #[error("{algorithm} does not support directed graphs")]
    DirectedGraphNotSupported {
        /// Name of the rejecting algorithm.
        algorithm: &'static str,
    },

    /// Dijkstra met an edge with negative weight.
    #[error("negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeightEdge {
        /// Index of the edge's source vertex.
        from: usize,
        /// Index of the edge's target vertex.
        to: usize,
        /// The offending weight.
        weight: f64,
    },
}

impl Error {
    /// Builds a [`Error::VertexNotFound`] for `id`.
    pub fn vertex_not_found<V: VertexKey>(id: &V) -> Self {
        Self::VertexNotFound(format!("{id:?}"))
    }

    /// Builds a [`Error::DuplicateVertex`] for `id`.
    pub fn duplicate_vertex<V: VertexKey>(id: &V) -> Self {
        Self::DuplicateVertex(format!("{id:?}"))
    }
}
