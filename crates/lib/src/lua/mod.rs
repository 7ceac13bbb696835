//! Lua front-end for DSL source text.
//!
//! Source is evaluated in a sandboxed environment where every global name is a
//! DSL call:
//!
//! ```lua
//! server("web_server", "production", function()
//!   host "example.com"
//!   port(8080)
//!   ssl(true)
//! end)
//! ```
//!
//! A trailing function argument is the nested block; everything else is a
//! positional argument. The chunk is only recorded here: the resulting
//! [`Call`] tree is interpreted by the engine like any other.
//!
//! # Submodules
//!
//! - [`convert`] - Lua value to manifest value conversion
//! - [`recorder`] - Call recording with eager vocabulary checks
//! - [`runtime`] - The sandboxed DSL environment

pub mod convert;
pub mod recorder;
pub mod runtime;

use std::cell::RefCell;
use std::rc::Rc;

use mlua::prelude::*;
use tracing::debug;

use crate::synth::{Call, SynthError, Vocabulary};
use recorder::Recorder;

/// Evaluate `source` and return the calls it made, in order.
///
/// DSL violations raised while recording come back as their own
/// [`SynthError`] variant, and source nested past the parser's limit as
/// [`SynthError::SourceTooDeep`]. Other syntax and runtime faults are
/// [`SynthError::Lua`].
pub fn record_calls(vocabulary: &Vocabulary, source: &str, chunk_name: &str) -> Result<Vec<Call>, SynthError> {
  let recorder = Rc::new(RefCell::new(Recorder::new(vocabulary.clone())));

  {
    let lua = Lua::new();
    let env = runtime::create_dsl_environment(&lua, recorder.clone()).map_err(SynthError::Lua)?;
    let chunk =
      runtime::load_dsl(&lua, env, source, chunk_name).map_err(|err| SynthError::from_load(err, chunk_name))?;
    chunk.call::<()>(()).map_err(SynthError::from_lua)?;
  }

  let calls = recorder.borrow_mut().finish();
  debug!(chunk = chunk_name, calls = calls.len(), "recorded DSL chunk");
  Ok(calls)
}
