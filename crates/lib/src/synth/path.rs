//! Declaration paths.
//!
//! A declaration path is the sequence of manifest keys leading to the current
//! nesting point: the vocabulary key followed by each identifier argument of
//! every enclosing vocabulary call. Paths are immutable; each nested scope gets
//! its own extended copy.

use std::fmt;

use serde_json::Value;

use super::SynthError;
use crate::consts::{PATH_DISPLAY_SEPARATOR, ROOT_PATH_DISPLAY};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DeclarationPath {
  segments: Vec<String>,
}

impl DeclarationPath {
  /// The empty path at the manifest root.
  pub fn root() -> Self {
    Self::default()
  }

  pub fn segments(&self) -> &[String] {
    &self.segments
  }

  /// Path of a nested declaration: `self` + `key` + one segment per identifier.
  pub fn extend(&self, key: &str, identifiers: &[Value]) -> Result<Self, SynthError> {
    let mut segments = Vec::with_capacity(self.segments.len() + 1 + identifiers.len());
    segments.extend(self.segments.iter().cloned());
    segments.push(key.to_string());
    for identifier in identifiers {
      segments.push(segment_from_value(key, identifier)?);
    }
    Ok(Self { segments })
  }

  /// Path of a field assigned directly under this path.
  pub fn child(&self, field: &str) -> Self {
    let mut segments = self.segments.clone();
    segments.push(field.to_string());
    Self { segments }
  }
}

impl fmt::Display for DeclarationPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.segments.is_empty() {
      write!(f, "{}", ROOT_PATH_DISPLAY)
    } else {
      write!(f, "{}", self.segments.join(PATH_DISPLAY_SEPARATOR))
    }
  }
}

/// Turn an identifier argument into a manifest key.
///
/// Strings are used verbatim; numbers and booleans use their JSON rendering.
fn segment_from_value(key: &str, value: &Value) -> Result<String, SynthError> {
  match value {
    Value::String(s) => Ok(s.clone()),
    Value::Number(n) => Ok(n.to_string()),
    Value::Bool(b) => Ok(b.to_string()),
    Value::Null | Value::Array(_) | Value::Object(_) => Err(SynthError::InvalidPathSegment {
      key: key.to_string(),
      segment: value.to_string(),
    }),
  }
}
