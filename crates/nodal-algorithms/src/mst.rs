//! Minimum Spanning Tree algorithms: Prim and Kruskal.
//!
//! Both work on undirected graphs only. A disconnected graph is not an
//! error: Prim reports the vertices it could not reach, Kruskal returns a
//! spanning forest.

use std::collections::BinaryHeap;

use nodal_common::types::VertexKey;
use nodal_common::utils::error::{Error, Result};
use nodal_core::{EdgeRef, Graph};
use serde::Serialize;
use tracing::debug;

use crate::traits::MinScored;
use crate::union_find::UnionFind;

/// An edge selected for a spanning tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MstEdge {
    /// Index of one endpoint.
    pub source: usize,
    /// Index of the other endpoint.
    pub target: usize,
    /// Edge weight; `None` on unweighted graphs.
    pub weight: Option<f64>,
}

impl From<EdgeRef> for MstEdge {
    fn from(edge: EdgeRef) -> Self {
        Self {
            source: edge.source,
            target: edge.target,
            weight: edge.weight,
        }
    }
}

// ============================================================================
// Kruskal's Algorithm
// ============================================================================

/// Result of Kruskal's algorithm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstResult {
    /// Selected edges, in selection order.
    pub edges: Vec<MstEdge>,
    /// Sum of the selected weights; zero on unweighted graphs.
    pub total_weight: f64,
    /// Number of live vertices the forest spans.
    pub vertex_count: usize,
}

impl MstResult {
    /// Returns the number of trees in the forest.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.vertex_count - self.edges.len()
    }

    /// Returns true if the forest is a single tree.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.component_count() <= 1
    }
}

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// Edges are stable-sorted by weight, so equal weights keep the order in
/// which [`Graph::edges`] reports them. Unweighted edges all tie.
///
/// # Errors
///
/// Returns [`Error::DirectedGraphNotSupported`] if the graph is directed.
pub fn kruskal<V, G>(graph: &G) -> Result<MstResult>
where
    V: VertexKey,
    G: Graph<V> + ?Sized,
{
    if graph.is_directed() {
        return Err(Error::DirectedGraphNotSupported {
            algorithm: "kruskal",
        });
    }

    let vertex_count = graph.vertex_count();
    let mut candidates: Vec<EdgeRef> = graph
        .edges()
        .into_iter()
        .filter(|edge| edge.source != edge.target)
        .collect();
    candidates.sort_by(|a, b| match (a.weight, b.weight) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => std::cmp::Ordering::Equal,
    });

    let mut sets = UnionFind::new(graph.capacity());
    let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut total_weight = 0.0;

    for edge in candidates {
        if edges.len() + 1 >= vertex_count {
            break;
        }
        if sets.union(edge.source, edge.target) {
            total_weight += edge.weight.unwrap_or(0.0);
            edges.push(MstEdge::from(edge));
        }
    }

    debug!(edges = edges.len(), total_weight, "kruskal finished");
    Ok(MstResult {
        edges,
        total_weight,
        vertex_count,
    })
}

// ============================================================================
// Prim's Algorithm
// ============================================================================

/// Result of Prim's algorithm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimResult {
    /// Index of the root vertex.
    pub source: usize,
    /// Parent of each index in the tree. The root is its own parent;
    /// unreached vertices and free slots are `None`.
    pub parent: Vec<Option<usize>>,
    /// Weight of the edge connecting each index to its parent.
    pub key: Vec<Option<f64>>,
    /// Live vertex indices at the time of the run.
    pub vertices: Vec<usize>,
}

impl PrimResult {
    /// Returns the tree edges as `parent -> child`, in child index order.
    #[must_use]
    pub fn tree_edges(&self) -> Vec<MstEdge> {
        self.vertices
            .iter()
            .filter(|&&child| child != self.source)
            .filter_map(|&child| {
                self.parent[child].map(|parent| MstEdge {
                    source: parent,
                    target: child,
                    weight: self.key[child],
                })
            })
            .collect()
    }

    /// Returns the sum of the tree edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.tree_edges().iter().filter_map(|e| e.weight).sum()
    }

    /// Returns true if every live vertex was reached from the root.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.vertices.iter().all(|&i| self.parent[i].is_some())
    }
}

/// Grows a minimum spanning tree from `source` with Prim's algorithm.
///
/// Vertices in other components are left with no parent; check
/// [`PrimResult::is_spanning`].
///
/// # Errors
///
/// - [`Error::DirectedGraphNotSupported`] if the graph is directed
/// - [`Error::UnweightedGraph`] if the graph is unweighted
/// - [`Error::VertexNotFound`] if `source` is not in the graph
pub fn prim<V, G>(graph: &G, source: &V) -> Result<PrimResult>
where
    V: VertexKey,
    G: Graph<V> + ?Sized,
{
    if graph.is_directed() {
        return Err(Error::DirectedGraphNotSupported { algorithm: "prim" });
    }
    if !graph.is_weighted() {
        return Err(Error::UnweightedGraph { algorithm: "prim" });
    }
    let root = graph.index_of(source)?;

    let n = graph.capacity();
    let mut key: Vec<Option<f64>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut marked = vec![false; n];
    let mut heap = BinaryHeap::new();

    key[root] = Some(0.0);
    parent[root] = Some(root);
    heap.push(MinScored(0.0, root));

    while let Some(MinScored(_, u)) = heap.pop() {
        if marked[u] {
            continue;
        }
        marked[u] = true;

        for (v, weight) in graph.edges_from(u) {
            let Some(w) = weight else { continue };
            if !marked[v] && key[v].is_none_or(|current| w < current) {
                key[v] = Some(w);
                parent[v] = Some(u);
                heap.push(MinScored(w, v));
            }
        }
    }

    let result = PrimResult {
        source: root,
        parent,
        key,
        vertices: graph.vertex_indices(),
    };
    debug!(root, spanning = result.is_spanning(), "prim finished");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{both, directed_chain, undirected_chain};

    fn weights(edges: &[MstEdge]) -> Vec<Option<f64>> {
        edges.iter().map(|e| e.weight).collect()
    }

    #[test]
    fn test_kruskal_chain() {
        for g in undirected_chain() {
            let result = kruskal(&*g).unwrap();
            assert_eq!(
                result.edges,
                vec![
                    MstEdge {
                        source: 1,
                        target: 2,
                        weight: Some(-5.0)
                    },
                    MstEdge {
                        source: 3,
                        target: 4,
                        weight: Some(-3.0)
                    },
                    MstEdge {
                        source: 0,
                        target: 1,
                        weight: Some(0.0)
                    },
                    MstEdge {
                        source: 2,
                        target: 3,
                        weight: Some(7.0)
                    },
                ]
            );
            assert!((result.total_weight + 1.0).abs() < f64::EPSILON);
            assert_eq!(result.component_count(), 1);
        }
    }

    #[test]
    fn test_kruskal_skips_cycle_edges() {
        for mut g in both(false, true) {
            for id in ["a", "b", "c", "d"] {
                g.add_vertex(id).unwrap();
            }
            g.add_weighted_edge(&"a", &"b", 1.0).unwrap();
            g.add_weighted_edge(&"b", &"c", 2.0).unwrap();
            g.add_weighted_edge(&"a", &"c", 3.0).unwrap();
            g.add_weighted_edge(&"c", &"d", 4.0).unwrap();
            g.add_weighted_edge(&"d", &"d", -9.0).unwrap();

            let result = kruskal(&*g).unwrap();
            assert_eq!(weights(&result.edges), vec![Some(1.0), Some(2.0), Some(4.0)]);
            assert!((result.total_weight - 7.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_kruskal_forest() {
        for mut g in both(false, false) {
            for id in ["a", "b", "c", "d", "e"] {
                g.add_vertex(id).unwrap();
            }
            g.add_edge(&"a", &"b").unwrap();
            g.add_edge(&"c", &"d").unwrap();

            let result = kruskal(&*g).unwrap();
            assert_eq!(result.edges.len(), 2);
            assert_eq!(result.component_count(), 3);
            assert!(!result.is_spanning());
            assert!(result.total_weight.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_kruskal_empty_graph() {
        for g in both(false, true) {
            let result = kruskal(&*g).unwrap();
            assert!(result.edges.is_empty());
            assert_eq!(result.component_count(), 0);
        }
    }

    #[test]
    fn test_kruskal_rejects_directed() {
        for g in directed_chain() {
            assert_eq!(
                kruskal(&*g),
                Err(Error::DirectedGraphNotSupported {
                    algorithm: "kruskal"
                })
            );
        }
    }

    #[test]
    fn test_prim_chain() {
        for g in undirected_chain() {
            let result = prim(&*g, &"s").unwrap();
            assert_eq!(
                result.parent,
                vec![Some(1), Some(2), Some(2), Some(2), Some(3)]
            );
            assert_eq!(
                result.key,
                vec![Some(0.0), Some(-5.0), Some(0.0), Some(7.0), Some(-3.0)]
            );
            assert!(result.is_spanning());
            assert_eq!(result.tree_edges().len(), 4);
            assert!((result.total_weight() + 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_prim_and_kruskal_agree_on_weight() {
        for mut g in both(false, true) {
            for id in ["a", "b", "c", "d", "e"] {
                g.add_vertex(id).unwrap();
            }
            for (u, v, w) in [
                ("a", "b", 4.0),
                ("a", "c", 1.0),
                ("b", "c", 2.0),
                ("b", "d", 5.0),
                ("c", "d", 8.0),
                ("d", "e", 3.0),
                ("c", "e", 9.0),
            ] {
                g.add_weighted_edge(&u, &v, w).unwrap();
            }

            let tree = prim(&*g, &"e").unwrap();
            let forest = kruskal(&*g).unwrap();
            assert!((tree.total_weight() - 11.0).abs() < f64::EPSILON);
            assert!((forest.total_weight - 11.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_prim_disconnected() {
        for mut g in both(false, true) {
            for id in ["a", "b", "c"] {
                g.add_vertex(id).unwrap();
            }
            g.add_weighted_edge(&"a", &"b", 1.0).unwrap();

            let result = prim(&*g, &"a").unwrap();
            assert_eq!(result.parent, vec![Some(0), Some(0), None]);
            assert!(!result.is_spanning());
            assert_eq!(result.tree_edges().len(), 1);
        }
    }

    #[test]
    fn test_prim_ignores_free_slots() {
        for mut g in both(false, true) {
            for id in ["a", "b", "c"] {
                g.add_vertex(id).unwrap();
            }
            g.add_weighted_edge(&"a", &"c", 1.0).unwrap();
            g.remove_vertex(&"b").unwrap();

            let result = prim(&*g, &"a").unwrap();
            assert_eq!(result.parent, vec![Some(0), None, Some(0)]);
            assert!(result.is_spanning());
        }
    }

    #[test]
    fn test_prim_errors() {
        for g in directed_chain() {
            assert_eq!(
                prim(&*g, &"u"),
                Err(Error::DirectedGraphNotSupported { algorithm: "prim" })
            );
        }
        for mut g in both(false, false) {
            g.add_vertex("a").unwrap();
            assert_eq!(
                prim(&*g, &"a"),
                Err(Error::UnweightedGraph { algorithm: "prim" })
            );
        }
        for g in undirected_chain() {
            assert!(matches!(prim(&*g, &"zz"), Err(Error::VertexNotFound(_))));
        }
    }
}
