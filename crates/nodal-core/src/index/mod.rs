//! Index bookkeeping shared by both graph storages.
//!
//! - [`slots`] - Recycling allocator for vertex indices
//! - [`vertex_map`] - Bijection between vertex identities and indices

pub mod slots;
pub mod vertex_map;

pub use slots::SlotAllocator;
pub use vertex_map::VertexMap;
