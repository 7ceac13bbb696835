//! DSL file evaluation.
//!
//! This module provides `evaluate_file`, which reads a Lua DSL file and
//! synthesizes it into a synthesizer's manifest.

use std::path::Path;

use tracing::info;

use crate::manifest::Manifest;
use crate::synth::{SynthError, Synthesizer};

/// Evaluate the DSL file at `path` into `synth`.
///
/// The file's contents go through the Lua front-end exactly like
/// [`Synthesizer::synthesize_source`]; the path names the chunk in error messages.
///
/// # Example
/// ```ignore
/// use std::path::Path;
/// use synth_lib::{Synthesizer, Vocabulary};
/// use synth_lib::eval::evaluate_file;
///
/// let mut synth = Synthesizer::with_vocabulary("infra", Vocabulary::terraform());
/// let manifest = evaluate_file(&mut synth, Path::new("main.lua"))?;
/// println!("{}", manifest.summary());
/// ```
pub fn evaluate_file<'s>(synth: &'s mut Synthesizer, path: &Path) -> Result<&'s Manifest, SynthError> {
  let source = std::fs::read_to_string(path).map_err(|e| SynthError::Io {
    path: path.display().to_string(),
    message: e.to_string(),
  })?;

  info!(path = %path.display(), bytes = source.len(), "evaluating DSL file");
  synth.synthesize_named_source(&source, &format!("@{}", path.display()))
}
