//! Graph traversal algorithms: BFS and DFS.
//!
//! Both are the same loop over a different [`Frontier`]: a FIFO queue
//! yields breadth-first order, a LIFO stack depth-first order. Vertices are
//! marked visited when they are popped, so a vertex may sit in the frontier
//! more than once; duplicates are dropped on pop.

use std::collections::VecDeque;

use nodal_common::types::VertexKey;
use nodal_common::utils::error::Result;
use nodal_core::Graph;
use tracing::debug;

// ============================================================================
// Frontier
// ============================================================================

/// Pending work for a traversal.
pub trait Frontier<T> {
    /// Adds an item.
    fn push(&mut self, item: T);

    /// Removes the next item, or returns `None` when empty.
    fn pop(&mut self) -> Option<T>;

    /// Returns true if no items are pending.
    fn is_empty(&self) -> bool;
}

/// First-in first-out frontier.
#[derive(Debug, Clone)]
pub struct Fifo<T>(VecDeque<T>);

impl<T> Fifo<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Fifo<T> {
    fn push(&mut self, item: T) {
        self.0.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Last-in first-out frontier.
#[derive(Debug, Clone)]
pub struct Lifo<T>(Vec<T>);

impl<T> Lifo<T> {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }
}

impl<T> Default for Lifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Lifo<T> {
    fn push(&mut self, item: T) {
        self.0.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Traversal
// ============================================================================

/// Visits every vertex reachable from `start` and returns their indices in
/// visitation order.
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`](nodal_common::Error::VertexNotFound)
/// if `start` is not in the graph.
pub fn traverse_indices<V, G, F>(graph: &G, start: &V, mut frontier: F) -> Result<Vec<usize>>
where
    V: VertexKey,
    G: Graph<V> + ?Sized,
    F: Frontier<usize>,
{
    let source = graph.index_of(start)?;
    let mut visited = vec![false; graph.capacity()];
    let mut order = Vec::new();

    frontier.push(source);
    while let Some(index) = frontier.pop() {
        if visited[index] {
            continue;
        }
        visited[index] = true;
        order.push(index);
        for (neighbor, _) in graph.edges_from(index) {
            frontier.push(neighbor);
        }
    }

    debug!(start = source, visited = order.len(), "traversal finished");
    Ok(order)
}

/// Visits every vertex reachable from `start` and returns their identities
/// in visitation order.
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`](nodal_common::Error::VertexNotFound)
/// if `start` is not in the graph.
pub fn traverse<V, G, F>(graph: &G, start: &V, frontier: F) -> Result<Vec<V>>
where
    V: VertexKey,
    G: Graph<V> + ?Sized,
    F: Frontier<usize>,
{
    let order = traverse_indices(graph, start, frontier)?;
    Ok(order
        .into_iter()
        .filter_map(|index| graph.vertex(index).cloned())
        .collect())
}

/// Performs breadth-first search from a starting vertex.
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`](nodal_common::Error::VertexNotFound)
/// if `start` is not in the graph.
pub fn bfs<V, G>(graph: &G, start: &V) -> Result<Vec<V>>
where
    V: VertexKey,
    G: Graph<V> + ?Sized,
{
    traverse(graph, start, Fifo::new())
}

/// Performs depth-first search from a starting vertex.
///
/// Neighbors are pushed in adjacency order, so the last neighbor pushed is
/// explored first.
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`](nodal_common::Error::VertexNotFound)
/// if `start` is not in the graph.
pub fn dfs<V, G>(graph: &G, start: &V) -> Result<Vec<V>>
where
    V: VertexKey,
    G: Graph<V> + ?Sized,
{
    traverse(graph, start, Lifo::new())
}
