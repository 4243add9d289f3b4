//! # nodal-common
//!
//! Foundation layer for Nodal: shared types and the error taxonomy.
//!
//! This crate provides the building blocks used by all other Nodal crates.
//! It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (VertexKey, EdgeKind, Matrix, WeightMatrix)
//! - [`utils`] - Utility functions and helpers (errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{EdgeKind, Matrix, VertexKey, WeightMatrix};
pub use utils::error::{Error, Result};
