//! Shared helpers for the priority-queue driven algorithms.

use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// A heap entry ordered so that [`std::collections::BinaryHeap`] pops the
/// smallest score first.
///
/// Only the score takes part in comparisons; entries with equal scores
/// pop in unspecified order.
#[derive(Debug, Clone, Copy)]
pub struct MinScored<T>(pub f64, pub T);

impl<T> PartialEq for MinScored<T> {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.0) == OrderedFloat(other.0)
    }
}

impl<T> Eq for MinScored<T> {}

impl<T> PartialOrd for MinScored<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for MinScored<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: smaller score = higher priority
        OrderedFloat(other.0).cmp(&OrderedFloat(self.0))
    }
}
