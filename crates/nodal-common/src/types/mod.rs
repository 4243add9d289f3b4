//! Core type definitions for Nodal.
//!
//! This module contains the fundamental types shared by storages and algorithms:
//! - Vertex identity bound ([`VertexKey`])
//! - Edge classification ([`EdgeKind`])
//! - Dense square tables ([`Matrix`], [`WeightMatrix`])

mod edge_kind;
mod matrix;
mod vertex;

pub use edge_kind::EdgeKind;
pub use matrix::{Matrix, WeightMatrix};
pub use vertex::VertexKey;
