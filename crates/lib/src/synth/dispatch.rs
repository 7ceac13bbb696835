//! The catch-all dispatch rule.
//!
//! Every call reaching the engine is classified here, whichever front-end
//! produced it:
//! - block attached, name in vocabulary: open a nested declaration
//! - block attached, name outside vocabulary: `InvalidSynthesizerKey`
//! - no block: field assignment of at most one value

use serde_json::Value;

use super::{DeclarationPath, SynthError, Vocabulary};

/// What a call does once it passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
  /// Evaluate the nested block under this path.
  Nest(DeclarationPath),
  /// Bury the value at this (leaf) path.
  Assign(DeclarationPath, Value),
}

/// Classify a call made at `path`.
pub fn classify(
  vocabulary: &Vocabulary,
  path: &DeclarationPath,
  name: &str,
  args: Vec<Value>,
  has_block: bool,
) -> Result<Dispatch, SynthError> {
  if has_block {
    if !vocabulary.contains(name) {
      return Err(SynthError::InvalidSynthesizerKey {
        key: name.to_string(),
        path: path.to_string(),
      });
    }
    return Ok(Dispatch::Nest(path.extend(name, &args)?));
  }

  if args.len() > 1 {
    return Err(SynthError::TooManyFieldValues {
      field: name.to_string(),
      count: args.len(),
    });
  }

  let value = args.into_iter().next().unwrap_or(Value::Null);
  Ok(Dispatch::Assign(path.child(name), value))
}
