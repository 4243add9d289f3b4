//! Construction-time configuration for graph storages.

use nodal_common::types::EdgeKind;
use serde::{Deserialize, Serialize};

/// Smallest accepted growth factor for backing storage.
pub const MIN_GROWTH_FACTOR: f64 = 1.5;

/// Default initial vertex capacity.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Configuration for a graph storage.
///
/// `directed` and `weighted` are fixed for the lifetime of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Whether edges are ordered pairs.
    pub directed: bool,
    /// Whether edges carry weights.
    pub weighted: bool,
    /// Number of vertex slots reserved up front.
    pub initial_capacity: usize,
    /// Multiplier applied to the capacity when storage is full.
    pub growth_factor: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            weighted: false,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_factor: MIN_GROWTH_FACTOR,
        }
    }
}

impl GraphConfig {
    /// Creates a configuration with the given edge semantics and default sizing.
    #[must_use]
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self {
            directed,
            weighted,
            ..Self::default()
        }
    }

    /// Sets the number of vertex slots reserved up front.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the growth factor. Values below [`MIN_GROWTH_FACTOR`] (and NaN)
    /// are raised to it.
    #[must_use]
    pub fn with_growth_factor(mut self, factor: f64) -> Self {
        self.growth_factor = if factor >= MIN_GROWTH_FACTOR {
            factor
        } else {
            MIN_GROWTH_FACTOR
        };
        self
    }

    /// Returns the edge kind this configuration accepts.
    #[must_use]
    pub fn edge_kind(&self) -> EdgeKind {
        EdgeKind::from_weighted(self.weighted)
    }

    /// Returns the capacity that follows `current` when storage is full.
    ///
    /// Always strictly greater than `current`.
    #[must_use]
    pub fn grown_capacity(&self, current: usize) -> usize {
        let factor = self.growth_factor.max(MIN_GROWTH_FACTOR);
        let scaled = (current as f64 * factor).ceil() as usize;
        scaled.max(current + 1)
    }
}
