//! Errors raised while synthesizing a manifest.

use mlua::prelude::*;

/// Errors that can occur during synthesis.
///
/// Every variant is fatal to the `synthesize` call that produced it: the
/// session is discarded and the synthesizer's manifest is left as it was.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SynthError {
  /// A call with a nested block used a name outside the vocabulary.
  #[error("invalid synthesizer key '{key}' at {path}: only vocabulary keys may open a block")]
  InvalidSynthesizerKey { key: String, path: String },

  /// A field assignment received more than one value.
  #[error("too many values for field '{field}': expected at most 1, got {count}")]
  TooManyFieldValues { field: String, count: usize },

  /// The synthesizer was constructed without any vocabulary keys.
  #[error("vocabulary must contain at least one key")]
  EmptyVocabulary,

  /// `bury` was called without any path segments.
  #[error("cannot bury a value under an empty path")]
  EmptyPath,

  /// A vocabulary call received an argument that cannot name a manifest key.
  #[error("invalid identifier for '{key}': {segment} cannot be used as a path segment")]
  InvalidPathSegment { key: String, segment: String },

  /// DSL source text nests blocks deeper than the Lua parser accepts.
  ///
  /// Only literal nesting in the source is limited; blocks opened from a
  /// recursive Lua function may nest arbitrarily deep.
  #[error("'{chunk}' nests blocks deeper than the Lua parser accepts; open deeper blocks from a recursive function")]
  SourceTooDeep { chunk: String },

  /// The Lua front-end failed to load or run the source.
  #[error("lua error: {0}")]
  Lua(LuaError),

  /// A DSL source file could not be read.
  #[error("cannot read '{path}': {message}")]
  Io { path: String, message: String },
}

impl SynthError {
  /// Recover a `SynthError` that crossed a Lua callback boundary.
  ///
  /// Errors raised inside Rust callbacks are wrapped by mlua as
  /// `CallbackError { cause: ExternalError(..) }`, possibly several levels deep
  /// when blocks are nested. Anything that is not one of ours stays a `Lua` error.
  pub fn from_lua(err: LuaError) -> Self {
    fn find(err: &LuaError) -> Option<SynthError> {
      match err {
        LuaError::CallbackError { cause, .. } => find(cause),
        LuaError::WithContext { cause, .. } => find(cause),
        LuaError::ExternalError(inner) => inner.downcast_ref::<SynthError>().cloned(),
        _ => None,
      }
    }

    find(&err).unwrap_or(SynthError::Lua(err))
  }

  /// Classify a failure to compile the chunk named `chunk_name`.
  pub fn from_load(err: LuaError, chunk_name: &str) -> Self {
    if err.to_string().contains("C stack overflow") {
      SynthError::SourceTooDeep {
        chunk: chunk_name.trim_start_matches(['@', '=']).to_string(),
      }
    } else {
      SynthError::Lua(err)
    }
  }
}
