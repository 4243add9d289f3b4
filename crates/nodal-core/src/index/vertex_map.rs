//! Bijection between vertex identities and vertex indices.

use indexmap::IndexMap;
use nodal_common::types::VertexKey;
use nodal_common::utils::error::{Error, Result};

use super::SlotAllocator;

/// Maps caller identities to stable indices and back.
///
/// Indices come from a [`SlotAllocator`], so a removed vertex's index is
/// reused by the next insertion.
#[derive(Debug, Clone)]
pub struct VertexMap<V> {
    /// Identity to index.
    indices: IndexMap<V, usize>,
    /// Index to identity; `None` marks a free slot.
    identities: Vec<Option<V>>,
    slots: SlotAllocator,
}

impl<V: VertexKey> VertexMap<V> {
    /// Creates an empty map with room for `capacity` identities.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: IndexMap::with_capacity(capacity),
            identities: Vec::with_capacity(capacity),
            slots: SlotAllocator::new(),
        }
    }

    /// Registers `id` and returns its index.
    pub fn insert(&mut self, id: V) -> Result<usize> {
        if self.indices.contains_key(&id) {
            return Err(Error::duplicate_vertex(&id));
        }
        let index = self.slots.allocate();
        if index == self.identities.len() {
            self.identities.push(Some(id.clone()));
        } else {
            self.identities[index] = Some(id.clone());
        }
        self.indices.insert(id, index);
        Ok(index)
    }

    /// Unregisters `id` and returns the index it held.
    pub fn remove(&mut self, id: &V) -> Result<usize> {
        let index = self
            .indices
            .swap_remove(id)
            .ok_or_else(|| Error::vertex_not_found(id))?;
        self.identities[index] = None;
        self.slots.release(index);
        Ok(index)
    }

    /// Returns the index of `id`.
    pub fn index_of(&self, id: &V) -> Result<usize> {
        self.indices
            .get(id)
            .copied()
            .ok_or_else(|| Error::vertex_not_found(id))
    }

    /// Resolves both endpoints of an edge.
    pub fn resolve_pair(&self, u: &V, v: &V) -> Result<(usize, usize)> {
        Ok((self.index_of(u)?, self.index_of(v)?))
    }

    /// Returns the identity stored at `index`.
    #[must_use]
    pub fn identity(&self, index: usize) -> Option<&V> {
        self.identities.get(index).and_then(Option::as_ref)
    }

    /// Returns true if `index` holds a vertex.
    #[must_use]
    pub fn is_live(&self, index: usize) -> bool {
        self.identity(index).is_some()
    }

    /// Returns all live indices in ascending order.
    #[must_use]
    pub fn live_indices(&self) -> Vec<usize> {
        self.identities
            .iter()
            .enumerate()
            .filter_map(|(index, id)| id.as_ref().map(|_| index))
            .collect()
    }

    /// Returns the number of live vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if no vertex is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns one past the highest index ever assigned.
    #[must_use]
    pub fn bound(&self) -> usize {
        self.slots.bound()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut map = VertexMap::with_capacity(4);
        assert_eq!(map.insert("a").unwrap(), 0);
        assert_eq!(map.insert("b").unwrap(), 1);
        assert_eq!(map.index_of(&"b").unwrap(), 1);
        assert_eq!(map.identity(0), Some(&"a"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut map = VertexMap::with_capacity(4);
        map.insert("a").unwrap();
        assert_eq!(
            map.insert("a"),
            Err(Error::DuplicateVertex("\"a\"".to_string()))
        );
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove_recycles_index() {
        let mut map = VertexMap::with_capacity(4);
        map.insert("a").unwrap();
        map.insert("b").unwrap();
        map.insert("c").unwrap();

        assert_eq!(map.remove(&"b").unwrap(), 1);
        assert!(!map.is_live(1));
        assert_eq!(map.live_indices(), vec![0, 2]);
        assert!(map.index_of(&"b").is_err());

        assert_eq!(map.insert("d").unwrap(), 1);
        assert_eq!(map.identity(1), Some(&"d"));
        assert_eq!(map.bound(), 3);
    }

    #[test]
    fn test_remove_missing() {
        let mut map: VertexMap<&str> = VertexMap::with_capacity(0);
        assert!(matches!(map.remove(&"x"), Err(Error::VertexNotFound(_))));
    }

    #[test]
    fn test_resolve_pair_reports_missing_endpoint() {
        let mut map = VertexMap::with_capacity(2);
        map.insert(1).unwrap();
        assert_eq!(map.resolve_pair(&1, &1).unwrap(), (0, 0));
        assert_eq!(
            map.resolve_pair(&1, &2),
            Err(Error::VertexNotFound("2".to_string()))
        );
    }
}
