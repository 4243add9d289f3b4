//! # nodal-core
//!
//! Core layer for Nodal: the graph contract and its two storages.
//!
//! This crate provides the data structures algorithms run against. It
//! depends only on `nodal-common`.
//!
//! ## Modules
//!
//! - [`graph`] - The [`Graph`] contract and its implementations (list, matrix)
//! - [`index`] - Index bookkeeping (slot recycling, identity lookup)
//! - [`config`] - Construction-time configuration

pub mod config;
pub mod graph;
pub mod index;

// Re-export commonly used types
pub use config::GraphConfig;
pub use graph::{EdgeRef, Graph, ListGraph, MatrixGraph};
pub use index::{SlotAllocator, VertexMap};
