//! CLI command implementations.

pub mod babel;
pub mod run;
pub mod separation;

use nodal_common::Result;
use nodal_core::Graph;

/// Adds `name` unless it is already present, returning its index.
fn ensure_vertex<G>(graph: &mut G, name: &str) -> Result<usize>
where
    G: Graph<String> + ?Sized,
{
    let name = name.to_string();
    match graph.index_of(&name) {
        Ok(index) => Ok(index),
        Err(_) => graph.add_vertex(name),
    }
}
