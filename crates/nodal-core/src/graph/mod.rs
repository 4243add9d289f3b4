//! The graph contract and its storages.
//!
//! [`Graph`] is the only surface algorithms are allowed to touch. Two
//! storages implement it:
//!
//! - [`ListGraph`] - per-vertex adjacency rows, cheap for sparse graphs
//! - [`MatrixGraph`] - dense adjacency and weight matrices, O(1) edge lookup
//!
//! Both hand out stable vertex indices, recycle the indices of removed
//! vertices, and reject edges whose kind (weighted or unweighted) does not
//! match the graph.

mod list;
mod matrix;

pub use list::ListGraph;
pub use matrix::MatrixGraph;

use nodal_common::types::{EdgeKind, Matrix, VertexKey, WeightMatrix};
use nodal_common::utils::error::{Error, Result};
use serde::Serialize;

/// An edge between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeRef {
    /// Index of the source vertex.
    pub source: usize,
    /// Index of the target vertex.
    pub target: usize,
    /// The edge weight; `None` on unweighted graphs.
    pub weight: Option<f64>,
}

/// Operations every graph storage supports.
///
/// Identity-level methods (`add_vertex`, `neighbors`, ...) take caller
/// identities and fail with [`Error::VertexNotFound`] for unknown ones.
/// Index-level methods (`edges_from`, `vertex`, ...) take indices and
/// return empty results for free or out-of-range slots.
///
/// Every failing mutation leaves the graph unchanged.
pub trait Graph<V: VertexKey> {
    /// Adds a vertex and returns its index.
    ///
    /// Fails with [`Error::DuplicateVertex`] if `id` is already present.
    fn add_vertex(&mut self, id: V) -> Result<usize>;

    /// Adds an unweighted edge from `u` to `v` (both ways if undirected).
    ///
    /// An existing edge between the same pair is kept as is.
    fn add_edge(&mut self, u: &V, v: &V) -> Result<()>;

    /// Adds a weighted edge from `u` to `v` (both ways if undirected).
    ///
    /// An existing edge between the same pair has its weight overwritten.
    fn add_weighted_edge(&mut self, u: &V, v: &V, weight: f64) -> Result<()>;

    /// Removes a vertex together with every edge touching it.
    fn remove_vertex(&mut self, u: &V) -> Result<()>;

    /// Removes the edge from `u` to `v` (both ways if undirected).
    ///
    /// Returns whether an edge existed.
    fn remove_edge(&mut self, u: &V, v: &V) -> Result<bool>;

    /// Returns true if an edge from `u` to `v` exists.
    fn are_connected(&self, u: &V, v: &V) -> Result<bool>;

    /// Returns the identities reachable from `u` over one edge.
    fn neighbors(&self, u: &V) -> Result<Vec<V>>;

    /// Returns the index assigned to `u`.
    fn index_of(&self, u: &V) -> Result<usize>;

    /// Returns the number of live vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges, counting an undirected edge once.
    fn edge_count(&self) -> usize;

    /// Returns true if edges are ordered pairs.
    fn is_directed(&self) -> bool;

    /// Returns true if edges carry weights.
    fn is_weighted(&self) -> bool;

    /// Returns one past the highest index ever assigned.
    ///
    /// Per-vertex result arrays are sized to this value.
    fn capacity(&self) -> usize;

    /// Returns the identity stored at `index`.
    fn vertex(&self, index: usize) -> Option<&V>;

    /// Returns all live indices in ascending order.
    fn vertex_indices(&self) -> Vec<usize>;

    /// Returns `(target, weight)` for every edge leaving `index`.
    fn edges_from(&self, index: usize) -> Vec<(usize, Option<f64>)>;

    /// Returns the kind of edges this graph accepts.
    fn edge_kind(&self) -> EdgeKind {
        EdgeKind::from_weighted(self.is_weighted())
    }

    /// Returns true if `u` is present.
    fn contains_vertex(&self, u: &V) -> bool {
        self.index_of(u).is_ok()
    }

    /// Returns the weight of the edge from `u` to `v`, or `None` if there is
    /// no such edge or the graph is unweighted.
    fn edge_weight(&self, u: &V, v: &V) -> Result<Option<f64>> {
        let x = self.index_of(u)?;
        let y = self.index_of(v)?;
        Ok(self
            .edges_from(x)
            .into_iter()
            .find(|&(target, _)| target == y)
            .and_then(|(_, weight)| weight))
    }

    /// Returns every edge once, in ascending source order.
    ///
    /// Undirected edges are reported with `source <= target`.
    fn edges(&self) -> Vec<EdgeRef> {
        let directed = self.is_directed();
        self.vertex_indices()
            .into_iter()
            .flat_map(|source| {
                self.edges_from(source)
                    .into_iter()
                    .filter(move |&(target, _)| directed || source <= target)
                    .map(move |(target, weight)| EdgeRef {
                        source,
                        target,
                        weight,
                    })
            })
            .collect()
    }

    /// Returns the `capacity() × capacity()` weight matrix.
    ///
    /// Missing edges are `None`, the diagonal of every live vertex is
    /// `Some(0.0)`, and rows of free slots are entirely `None`.
    fn weight_matrix(&self) -> WeightMatrix {
        let mut matrix = Matrix::new(self.capacity(), None);
        for source in self.vertex_indices() {
            for (target, weight) in self.edges_from(source) {
                matrix[(source, target)] = weight;
            }
            matrix[(source, source)] = Some(0.0);
        }
        matrix
    }
}

/// Checks an edge against the graph's kind before anything is mutated.
pub(crate) fn check_edge(kind: EdgeKind, weight: Option<f64>) -> Result<()> {
    let found = EdgeKind::from_weighted(weight.is_some());
    if found != kind {
        return Err(Error::EdgeKindMismatch {
            expected: kind,
            found,
        });
    }
    match weight {
        Some(w) if !w.is_finite() => Err(Error::NonFiniteWeight(w)),
        _ => Ok(()),
    }
}
