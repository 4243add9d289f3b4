//! Vertex identity bound.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for caller-supplied vertex identities.
///
/// Identities are looked up by hash and rendered with `{:?}` in error
/// messages. Any `Eq + Hash + Clone + Debug` type qualifies, so strings,
/// integers and small tuples all work out of the box.
pub trait VertexKey: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> VertexKey for T {}
