//! # nodal-algorithms
//!
//! Classical graph algorithms over the [`Graph`](nodal_core::Graph) contract.
//! Every algorithm borrows the graph immutably and works the same on
//! [`ListGraph`](nodal_core::ListGraph) and
//! [`MatrixGraph`](nodal_core::MatrixGraph).
//!
//! ## Algorithm Categories
//!
//! - [`traversal`] - BFS and DFS driven by a pluggable [`Frontier`]
//! - [`shortest_path`] - Dijkstra and Floyd-Warshall
//! - [`mst`] - Prim and Kruskal
//!
//! ## Usage
//!
//! ```
//! use nodal_algorithms::{bfs, dijkstra};
//! use nodal_core::{Graph, ListGraph};
//!
//! let mut graph = ListGraph::new(true, true);
//! graph.add_vertex("a").unwrap();
//! graph.add_vertex("b").unwrap();
//! graph.add_weighted_edge(&"a", &"b", 2.0).unwrap();
//!
//! assert_eq!(bfs(&graph, &"a").unwrap(), vec!["a", "b"]);
//! assert_eq!(dijkstra(&graph, &"a").unwrap().distance(1), Some(2.0));
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod fixtures;
pub mod mst;
pub mod shortest_path;
mod traits;
pub mod traversal;
mod union_find;

// Core traits
pub use traits::MinScored;
pub use traversal::{Fifo, Frontier, Lifo};

// Traversal algorithms
pub use traversal::{bfs, dfs, traverse, traverse_indices};

// Shortest path algorithms
pub use shortest_path::{DijkstraResult, FloydWarshallResult, dijkstra, floyd_warshall};

// Minimum Spanning Tree algorithms
pub use mst::{MstEdge, MstResult, PrimResult, kruskal, prim};

// Disjoint sets
pub use union_find::UnionFind;
