//! Shortest path algorithms: Dijkstra and Floyd-Warshall.
//!
//! Distances are `Option<f64>` where `None` means unreachable. A path whose
//! length overflows `f64` is never recorded, so every `Some` distance is
//! finite. Both algorithms index their results by vertex index, so results
//! are sized to [`Graph::capacity`] and free slots read as unreachable.

use std::collections::BinaryHeap;

use nodal_common::types::{VertexKey, WeightMatrix};
use nodal_common::utils::error::{Error, Result};
use nodal_core::Graph;
use serde::Serialize;
use tracing::{debug, trace};

use crate::traits::MinScored;

// ============================================================================
// Dijkstra's Algorithm
// ============================================================================

/// Result of Dijkstra's algorithm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DijkstraResult {
    /// Index of the source vertex.
    pub source: usize,
    /// Shortest distance from the source to each index.
    pub distances: Vec<Option<f64>>,
    /// Predecessor of each index on its shortest path. The source is its own
    /// predecessor.
    pub predecessors: Vec<Option<usize>>,
}

impl DijkstraResult {
    /// Returns the distance to `index`, or `None` if unreachable.
    #[must_use]
    pub fn distance(&self, index: usize) -> Option<f64> {
        self.distances.get(index).copied().flatten()
    }

    /// Returns true if `index` was reached from the source.
    #[must_use]
    pub fn is_reachable(&self, index: usize) -> bool {
        self.distance(index).is_some()
    }

    /// Reconstructs the index path from the source to `target`.
    ///
    /// Returns `None` if `target` is unreachable.
    #[must_use]
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);
            if path.len() > self.predecessors.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Computes single-source shortest paths with Dijkstra's algorithm.
///
/// Uses a binary heap with lazy deletion: a vertex may be queued several
/// times and stale entries are skipped when popped.
///
/// # Errors
///
/// - [`Error::UnweightedGraph`] if the graph is unweighted
/// - [`Error::VertexNotFound`] if `source` is not in the graph
/// - [`Error::NegativeWeightEdge`] if an edge reachable from the source has
///   negative weight
pub fn dijkstra<V, G>(graph: &G, source: &V) -> Result<DijkstraResult>
where
    V: VertexKey,
    G: Graph<V> + ?Sized,
{
    if !graph.is_weighted() {
        return Err(Error::UnweightedGraph {
            algorithm: "dijkstra",
        });
    }
    let start = graph.index_of(source)?;

    let n = graph.capacity();
    let mut distances: Vec<Option<f64>> = vec![None; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    distances[start] = Some(0.0);
    predecessors[start] = Some(start);
    heap.push(MinScored(0.0, start));

    while let Some(MinScored(dist, u)) = heap.pop() {
        if distances[u].is_some_and(|best| dist > best) {
            continue;
        }

        for (v, weight) in graph.edges_from(u) {
            let Some(w) = weight else { continue };
            if w < 0.0 {
                return Err(Error::NegativeWeightEdge {
                    from: u,
                    to: v,
                    weight: w,
                });
            }

            let candidate = dist + w;
            if !candidate.is_finite() {
                continue;
            }
            if distances[v].is_none_or(|current| candidate < current) {
                trace!(from = u, to = v, distance = candidate, "relaxed");
                distances[v] = Some(candidate);
                predecessors[v] = Some(u);
                heap.push(MinScored(candidate, v));
            }
        }
    }

    debug!(
        source = start,
        reached = distances.iter().flatten().count(),
        "dijkstra finished"
    );
    Ok(DijkstraResult {
        source: start,
        distances,
        predecessors,
    })
}

// ============================================================================
// Floyd-Warshall Algorithm
// ============================================================================

/// Result of the Floyd-Warshall algorithm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloydWarshallResult {
    /// `capacity × capacity` matrix of shortest distances.
    pub distances: WeightMatrix,
}

impl FloydWarshallResult {
    /// Returns the shortest distance from `i` to `j`, or `None` if
    /// unreachable.
    #[must_use]
    pub fn distance(&self, i: usize, j: usize) -> Option<f64> {
        self.distances.weight(i, j)
    }

    /// Returns every distance from `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn row(&self, i: usize) -> &[Option<f64>] {
        self.distances.row(i)
    }

    /// Returns the largest distance between any two of `indices`, or `None`
    /// if some pair is unreachable.
    ///
    /// An empty or single-vertex selection has diameter zero.
    #[must_use]
    pub fn diameter(&self, indices: &[usize]) -> Option<f64> {
        let mut longest = 0.0_f64;
        for &i in indices {
            for &j in indices {
                longest = longest.max(self.distance(i, j)?);
            }
        }
        Some(longest)
    }
}

/// Computes all-pairs shortest paths with the Floyd-Warshall algorithm.
///
/// Negative edges are allowed. With a negative cycle the diagonal entries
/// on that cycle end up negative.
///
/// # Errors
///
/// Returns [`Error::UnweightedGraph`] if the graph is unweighted.
pub fn floyd_warshall<V, G>(graph: &G) -> Result<FloydWarshallResult>
where
    V: VertexKey,
    G: Graph<V> + ?Sized,
{
    if !graph.is_weighted() {
        return Err(Error::UnweightedGraph {
            algorithm: "floyd-warshall",
        });
    }

    let mut dist = graph.weight_matrix();
    let n = dist.dimension();

    for k in 0..n {
        let mut next = dist.clone();
        for i in 0..n {
            let Some(ik) = dist.weight(i, k) else { continue };
            for j in 0..n {
                let Some(kj) = dist.weight(k, j) else { continue };
                let through = ik + kj;
                if !through.is_finite() {
                    continue;
                }
                if dist.weight(i, j).is_none_or(|current| through < current) {
                    next[(i, j)] = Some(through);
                }
            }
        }
        dist = next;
    }

    debug!(dimension = n, "floyd-warshall finished");
    Ok(FloydWarshallResult { distances: dist })
}
