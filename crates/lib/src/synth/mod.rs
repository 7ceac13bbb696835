//! The synthesizer engine.
//!
//! This module provides:
//! - [`Vocabulary`]: the fixed set of keys allowed to open a nested block
//! - [`DeclarationPath`]: the immutable key path of the current nesting point
//! - [`Scope`]: the context object blocks write their calls against
//! - [`Call`]: recorded calls for front-ends that cannot pass closures
//! - [`Synthesizer`]: owns the vocabulary and the accumulated manifest

mod call;
mod dispatch;
mod engine;
mod error;
mod path;
mod scope;
mod session;
mod vocabulary;

pub use call::Call;
pub use dispatch::{Dispatch, classify};
pub use engine::{Synthesizer, create_synthesizer};
pub use error::SynthError;
pub use path::DeclarationPath;
pub use scope::{Block, Scope};
pub use session::Session;
pub use vocabulary::Vocabulary;
