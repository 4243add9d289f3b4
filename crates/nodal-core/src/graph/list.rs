//! Adjacency-list graph storage.
//!
//! Each live vertex index owns one row of `(target, weight)` entries kept in
//! insertion order. Undirected edges are stored in both rows; a self-loop
//! is stored once.

use nodal_common::types::VertexKey;
use nodal_common::utils::error::Result;
use smallvec::SmallVec;
use tracing::trace;

use super::{Graph, check_edge};
use crate::config::GraphConfig;
use crate::index::VertexMap;

/// Adjacency entries leaving one vertex.
type AdjacencyRow = SmallVec<[(usize, Option<f64>); 4]>;

/// A graph stored as per-vertex adjacency lists.
#[derive(Debug, Clone)]
pub struct ListGraph<V> {
    config: GraphConfig,
    vertices: VertexMap<V>,
    /// Rows indexed by vertex index; rows of free slots are empty.
    rows: Vec<AdjacencyRow>,
    edge_count: usize,
}

impl<V: VertexKey> ListGraph<V> {
    /// Creates an empty graph with default sizing.
    #[must_use]
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self::with_config(GraphConfig::new(directed, weighted))
    }

    /// Creates an empty graph from a configuration.
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            vertices: VertexMap::with_capacity(config.initial_capacity),
            rows: Vec::with_capacity(config.initial_capacity),
            edge_count: 0,
            config,
        }
    }

    fn insert_edge(&mut self, u: &V, v: &V, weight: Option<f64>) -> Result<()> {
        check_edge(self.config.edge_kind(), weight)?;
        let (x, y) = self.vertices.resolve_pair(u, v)?;

        let created = self.set_arc(x, y, weight);
        if !self.config.directed && x != y {
            self.set_arc(y, x, weight);
        }
        if created {
            self.edge_count += 1;
        }
        trace!(source = x, target = y, ?weight, created, "list edge set");
        Ok(())
    }

    /// Sets the arc `x -> y`, returning true if it did not exist.
    fn set_arc(&mut self, x: usize, y: usize, weight: Option<f64>) -> bool {
        let row = &mut self.rows[x];
        match row.iter_mut().find(|(target, _)| *target == y) {
            Some(entry) => {
                if weight.is_some() {
                    entry.1 = weight;
                }
                false
            }
            None => {
                row.push((y, weight));
                true
            }
        }
    }

    /// Removes the arc `x -> y`, returning true if it existed.
    fn remove_arc(&mut self, x: usize, y: usize) -> bool {
        let row = &mut self.rows[x];
        let before = row.len();
        row.retain(|(target, _)| *target != y);
        row.len() != before
    }

    fn has_arc(&self, x: usize, y: usize) -> bool {
        self.rows[x].iter().any(|(target, _)| *target == y)
    }
}

impl<V: VertexKey> Graph<V> for ListGraph<V> {
    fn add_vertex(&mut self, id: V) -> Result<usize> {
        let index = self.vertices.insert(id)?;
        if index == self.rows.len() {
            self.rows.push(AdjacencyRow::new());
        } else {
            self.rows[index].clear();
        }
        trace!(index, "list vertex added");
        Ok(index)
    }

    fn add_edge(&mut self, u: &V, v: &V) -> Result<()> {
        self.insert_edge(u, v, None)
    }

    fn add_weighted_edge(&mut self, u: &V, v: &V, weight: f64) -> Result<()> {
        self.insert_edge(u, v, Some(weight))
    }

    fn remove_vertex(&mut self, u: &V) -> Result<()> {
        let index = self.vertices.remove(u)?;
        let outgoing = std::mem::take(&mut self.rows[index]);

        // Undirected rows mirror each other, so the removed row already
        // counts every incident edge once.
        let directed = self.config.directed;
        let mut removed = outgoing.len();
        for (other, row) in self.rows.iter_mut().enumerate() {
            if other == index {
                continue;
            }
            let before = row.len();
            row.retain(|(target, _)| *target != index);
            if directed {
                removed += before - row.len();
            }
        }
        self.edge_count -= removed;
        trace!(index, removed, "list vertex removed");
        Ok(())
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> Result<bool> {
        let (x, y) = self.vertices.resolve_pair(u, v)?;
        let removed = self.remove_arc(x, y);
        if !self.config.directed && x != y {
            self.remove_arc(y, x);
        }
        if removed {
            self.edge_count -= 1;
        }
        Ok(removed)
    }

    fn are_connected(&self, u: &V, v: &V) -> Result<bool> {
        let (x, y) = self.vertices.resolve_pair(u, v)?;
        Ok(self.has_arc(x, y))
    }

    fn neighbors(&self, u: &V) -> Result<Vec<V>> {
        let index = self.vertices.index_of(u)?;
        Ok(self.rows[index]
            .iter()
            .filter_map(|(target, _)| self.vertices.identity(*target).cloned())
            .collect())
    }

    fn index_of(&self, u: &V) -> Result<usize> {
        self.vertices.index_of(u)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn is_directed(&self) -> bool {
        self.config.directed
    }

    fn is_weighted(&self) -> bool {
        self.config.weighted
    }

    fn capacity(&self) -> usize {
        self.vertices.bound()
    }

    fn vertex(&self, index: usize) -> Option<&V> {
        self.vertices.identity(index)
    }

    fn vertex_indices(&self) -> Vec<usize> {
        self.vertices.live_indices()
    }

    fn edges_from(&self, index: usize) -> Vec<(usize, Option<f64>)> {
        self.rows
            .get(index)
            .map(|row| row.to_vec())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodal_common::types::EdgeKind;
    use nodal_common::utils::error::Error;

    /// u, v, s, v4, v5 as a weighted chain.
    fn chain(directed: bool) -> ListGraph<&'static str> {
        let mut g = ListGraph::new(directed, true);
        for id in ["u", "v", "s", "v4", "v5"] {
            g.add_vertex(id).unwrap();
        }
        g.add_weighted_edge(&"u", &"v", 0.0).unwrap();
        g.add_weighted_edge(&"v", &"s", -5.0).unwrap();
        g.add_weighted_edge(&"s", &"v4", 7.0).unwrap();
        g.add_weighted_edge(&"v4", &"v5", -3.0).unwrap();
        g
    }

    #[test]
    fn test_add_vertex() {
        let mut g = chain(false);
        assert_eq!(g.add_vertex("new").unwrap(), 5);
        assert_eq!(g.vertex_count(), 6);
        assert!(matches!(g.add_vertex("u"), Err(Error::DuplicateVertex(_))));
        assert_eq!(g.vertex_count(), 6);
    }

    #[test]
    fn test_add_edge_errors() {
        let mut g: ListGraph<&str> = ListGraph::new(false, false);
        g.add_vertex("u").unwrap();
        g.add_vertex("v").unwrap();

        assert!(matches!(g.add_edge(&"ghost", &"v"), Err(Error::VertexNotFound(_))));
        assert!(matches!(g.add_edge(&"u", &"ghost"), Err(Error::VertexNotFound(_))));
        assert_eq!(
            g.add_weighted_edge(&"u", &"v", 10.0),
            Err(Error::EdgeKindMismatch {
                expected: EdgeKind::Unweighted,
                found: EdgeKind::Weighted
            })
        );
        assert_eq!(g.edge_count(), 0);

        g.add_edge(&"u", &"v").unwrap();
        g.add_edge(&"u", &"u").unwrap();
        assert_eq!(g.edge_count(), 2);
        assert!(g.are_connected(&"u", &"u").unwrap());
    }

    #[test]
    fn test_readding_overwrites_weight() {
        let mut g = chain(false);
        g.add_weighted_edge(&"v", &"u", 4.0).unwrap();
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.edge_weight(&"u", &"v").unwrap(), Some(4.0));
        assert_eq!(g.edge_weight(&"v", &"u").unwrap(), Some(4.0));
        assert_eq!(g.neighbors(&"u").unwrap(), vec!["v"]);
    }

    #[test]
    fn test_remove_vertex_purges_edges() {
        let mut g = chain(true);
        g.remove_vertex(&"s").unwrap();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 2);
        assert!(g.neighbors(&"v").unwrap().is_empty());
        assert!(matches!(g.remove_vertex(&"s"), Err(Error::VertexNotFound(_))));

        // Freed index 2 is reused.
        assert_eq!(g.add_vertex("again").unwrap(), 2);
        assert!(g.edges_from(2).is_empty());
    }

    #[test]
    fn test_remove_vertex_undirected_counts() {
        let mut g = chain(false);
        g.add_weighted_edge(&"s", &"s", 1.0).unwrap();
        assert_eq!(g.edge_count(), 5);
        g.remove_vertex(&"s").unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(&"v4").unwrap(), vec!["v5"]);
    }

    #[test]
    fn test_remove_edge_idempotent() {
        let mut g = chain(false);
        assert!(!g.remove_edge(&"u", &"s").unwrap());
        assert!(g.remove_edge(&"v", &"u").unwrap());
        assert!(!g.remove_edge(&"u", &"v").unwrap());
        assert!(!g.are_connected(&"v", &"u").unwrap());
        assert_eq!(g.edge_count(), 3);
        assert!(matches!(g.remove_edge(&"ghost", &"v"), Err(Error::VertexNotFound(_))));
    }

    #[test]
    fn test_directed_connectivity() {
        let g = chain(true);
        assert!(g.are_connected(&"u", &"v").unwrap());
        assert!(!g.are_connected(&"v", &"u").unwrap());
        assert!(!g.are_connected(&"u", &"v5").unwrap());
    }

    #[test]
    fn test_neighbors_in_insertion_order() {
        let g = chain(false);
        assert_eq!(g.neighbors(&"v").unwrap(), vec!["u", "s"]);
        assert!(g.neighbors(&"ghost").is_err());
    }

    #[test]
    fn test_weight_matrix() {
        let g = chain(false);
        let w = g.weight_matrix();
        for i in 0..5 {
            assert_eq!(w.weight(i, i), Some(0.0));
        }
        assert_eq!(w.weight(0, 1), Some(0.0));
        assert_eq!(w.weight(1, 2), Some(-5.0));
        assert_eq!(w.weight(2, 1), Some(-5.0));
        assert_eq!(w.weight(3, 4), Some(-3.0));
        assert_eq!(w.weight(0, 2), None);
        assert_eq!(w.weight(4, 0), None);
    }

    #[test]
    fn test_index_of_and_flags() {
        let g = chain(true);
        assert_eq!(g.index_of(&"v4").unwrap(), 3);
        assert!(g.is_directed());
        assert!(g.is_weighted());
        assert_eq!(g.capacity(), 5);
        assert_eq!(g.vertex(4), Some(&"v5"));
        assert_eq!(g.vertex(9), None);
        assert!(g.edges_from(9).is_empty());
    }
}
