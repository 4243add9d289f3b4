//! Adjacency-matrix graph storage.
//!
//! Two square matrices share the vertex indices: `adjacency` records which
//! arcs exist and `weights` records their weights (`None` for unweighted
//! arcs and missing ones). Both are allocated `allocated × allocated` and
//! grow geometrically when a new index falls outside them. Newly exposed
//! cells start as "no edge", never as a zero-weight edge.

use nodal_common::types::{Matrix, VertexKey, WeightMatrix};
use nodal_common::utils::error::Result;
use tracing::{debug, trace};

use super::{Graph, check_edge};
use crate::config::GraphConfig;
use crate::index::VertexMap;

/// A graph stored as dense adjacency and weight matrices.
#[derive(Debug, Clone)]
pub struct MatrixGraph<V> {
    config: GraphConfig,
    vertices: VertexMap<V>,
    adjacency: Matrix<bool>,
    weights: WeightMatrix,
    edge_count: usize,
}

impl<V: VertexKey> MatrixGraph<V> {
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
            adjacency: Matrix::new(config.initial_capacity, false),
            weights: Matrix::new(config.initial_capacity, None),
            edge_count: 0,
            config,
        }
    }

    /// Returns the dimension of the backing matrices.
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.adjacency.dimension()
    }

    /// Grows the backing matrices until `index` fits.
    fn ensure_slot(&mut self, index: usize) {
        let current = self.allocated();
        if index < current {
            return;
        }
        let mut grown = self.config.grown_capacity(current);
        while grown <= index {
            grown = self.config.grown_capacity(grown);
        }
        debug!(from = current, to = grown, "growing adjacency matrix");
        self.adjacency = self.adjacency.resized(grown, false);
        self.weights = self.weights.resized(grown, None);
    }

    fn insert_edge(&mut self, u: &V, v: &V, weight: Option<f64>) -> Result<()> {
        check_edge(self.config.edge_kind(), weight)?;
        let (x, y) = self.vertices.resolve_pair(u, v)?;

        let created = !self.adjacency[(x, y)];
        self.adjacency[(x, y)] = true;
        self.weights[(x, y)] = weight;
        if !self.config.directed {
            self.adjacency[(y, x)] = true;
            self.weights[(y, x)] = weight;
        }
        if created {
            self.edge_count += 1;
        }
        trace!(source = x, target = y, ?weight, created, "matrix edge set");
        Ok(())
    }

    fn arcs_from(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let bound = if self.vertices.is_live(index) {
            self.vertices.bound()
        } else {
            0
        };
        (0..bound).filter(move |&target| self.adjacency[(index, target)])
    }
}

impl<V: VertexKey> Graph<V> for MatrixGraph<V> {
    fn add_vertex(&mut self, id: V) -> Result<usize> {
        let index = self.vertices.insert(id)?;
        self.ensure_slot(index);
        trace!(index, "matrix vertex added");
        Ok(index)
    }

    fn add_edge(&mut self, u: &V, v: &V) -> Result<()> {
        self.insert_edge(u, v, None)
    }

    fn add_weighted_edge(&mut self, u: &V, v: &V, weight: f64) -> Result<()> {
        self.insert_edge(u, v, Some(weight))
    }

    fn remove_vertex(&mut self, u: &V) -> Result<()> {
        let index = self.vertices.index_of(u)?;
        let bound = self.vertices.bound();

        let outgoing = (0..bound).filter(|&j| self.adjacency[(index, j)]).count();
        let removed = if self.config.directed {
            let incoming = (0..bound)
                .filter(|&i| i != index && self.adjacency[(i, index)])
                .count();
            outgoing + incoming
        } else {
            outgoing
        };

        self.vertices.remove(u)?;
        self.adjacency.fill_cross(index, false);
        self.weights.fill_cross(index, None);
        self.edge_count -= removed;
        trace!(index, removed, "matrix vertex removed");
        Ok(())
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> Result<bool> {
        let (x, y) = self.vertices.resolve_pair(u, v)?;
        if !self.adjacency[(x, y)] {
            return Ok(false);
        }
        self.adjacency[(x, y)] = false;
        self.weights[(x, y)] = None;
        if !self.config.directed {
            self.adjacency[(y, x)] = false;
            self.weights[(y, x)] = None;
        }
        self.edge_count -= 1;
        Ok(true)
    }

    fn are_connected(&self, u: &V, v: &V) -> Result<bool> {
        let (x, y) = self.vertices.resolve_pair(u, v)?;
        Ok(self.adjacency[(x, y)])
    }

    fn neighbors(&self, u: &V) -> Result<Vec<V>> {
        let index = self.vertices.index_of(u)?;
        Ok(self
            .arcs_from(index)
            .filter_map(|target| self.vertices.identity(target).cloned())
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
        self.arcs_from(index)
            .map(|target| (target, self.weights[(index, target)]))
            .collect()
    }

    fn weight_matrix(&self) -> WeightMatrix {
        let mut matrix = self.weights.resized(self.capacity(), None);
        for index in self.vertices.live_indices() {
            matrix[(index, index)] = Some(0.0);
        }
        matrix
    }
}
