//! Manifest types.
//!
//! A manifest is the result of synthesis: an ordered, nested mapping from
//! keys to either further mappings or leaf values.

mod bury;
mod types;

pub use bury::bury;
pub use types::*;
