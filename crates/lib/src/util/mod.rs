//! Shared utilities.
//!
//! Content hashing of manifests and test helpers.

pub mod hash;
