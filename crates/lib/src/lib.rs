//! synth-lib: a vocabulary-checked DSL synthesizer.
//!
//! This crate turns blocks of nested calls into a hierarchical [`Manifest`]:
//! - `synth`: the engine (vocabulary, declaration paths, the catch-all dispatcher)
//! - `manifest`: the ordered nested mapping produced by synthesis, plus `bury`
//! - `lua`: a Lua front-end that records DSL source into call records
//! - `eval`: evaluation of DSL files on disk

pub mod consts;
pub mod eval;
pub mod lua;
pub mod manifest;
pub mod synth;
pub mod util;

pub use manifest::{Manifest, bury};
pub use synth::{Call, DeclarationPath, Scope, SynthError, Synthesizer, Vocabulary, create_synthesizer};
