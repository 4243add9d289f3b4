//! Graphs shared by the algorithm tests.

use nodal_core::{Graph, GraphConfig, ListGraph, MatrixGraph};

pub(crate) type BoxedGraph = Box<dyn Graph<&'static str>>;

/// Vertex names of the five-vertex chain, in index order.
pub(crate) const CHAIN: [&str; 5] = ["u", "v", "s", "v4", "v5"];

/// One empty graph per storage. The small initial capacity forces the
/// matrix to grow during the tests.
pub(crate) fn both(directed: bool, weighted: bool) -> Vec<BoxedGraph> {
    let config = GraphConfig::new(directed, weighted).with_initial_capacity(2);
    vec![
        Box::new(ListGraph::with_config(config)),
        Box::new(MatrixGraph::with_config(config)),
    ]
}

pub(crate) fn weighted_chain(directed: bool, weights: [f64; 4]) -> Vec<BoxedGraph> {
    let mut graphs = both(directed, true);
    for g in &mut graphs {
        for id in CHAIN {
            g.add_vertex(id).unwrap();
        }
        for (pair, w) in CHAIN.windows(2).zip(weights) {
            g.add_weighted_edge(&pair[0], &pair[1], w).unwrap();
        }
    }
    graphs
}

/// Directed chain u -0-> v -5-> s -7-> v4 -3-> v5.
pub(crate) fn directed_chain() -> Vec<BoxedGraph> {
    weighted_chain(true, [0.0, 5.0, 7.0, 3.0])
}

/// Undirected chain u -0- v -(-5)- s -7- v4 -(-3)- v5.
pub(crate) fn undirected_chain() -> Vec<BoxedGraph> {
    weighted_chain(false, [0.0, -5.0, 7.0, -3.0])
}
