//! Recycling allocator for vertex indices.
//!
//! Freed indices are handed out again lowest-first before any new index is
//! minted, which keeps the matrix storage from growing while holes exist.

use std::collections::BTreeSet;

/// Hands out vertex indices, reusing released ones.
#[derive(Debug, Clone, Default)]
pub struct SlotAllocator {
    /// Released indices below `bound`.
    free: BTreeSet<usize>,
    /// One past the highest index ever handed out.
    bound: usize,
}

impl SlotAllocator {
    /// Creates an empty allocator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lowest released index, or mints `bound` if none is free.
    pub fn allocate(&mut self) -> usize {
        if let Some(index) = self.free.pop_first() {
            return index;
        }
        let index = self.bound;
        self.bound += 1;
        index
    }

    /// Marks `index` as free for reuse.
    ///
    /// Returns false if the index was never handed out or is already free.
    pub fn release(&mut self, index: usize) -> bool {
        index < self.bound && self.free.insert(index)
    }

    /// Returns true if `index` is currently handed out.
    #[must_use]
    pub fn is_allocated(&self, index: usize) -> bool {
        index < self.bound && !self.free.contains(&index)
    }

    /// Returns one past the highest index ever handed out.
    #[must_use]
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Returns the number of indices currently handed out.
    #[must_use]
    pub fn in_use(&self) -> usize {
        self.bound - self.free.len()
    }
}
