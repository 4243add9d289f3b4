//! Common utilities used throughout Nodal.
//!
//! - [`error`] - The error taxonomy shared by storages and algorithms

pub mod error;

pub use error::{Error, Result};
