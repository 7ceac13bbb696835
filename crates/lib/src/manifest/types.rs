//! Manifest types for synth.
//!
//! The manifest is the central data structure produced by synthesis. Every key
//! is either a vocabulary key or identifier opening a nesting level, or a field
//! name holding a leaf value.
//!
//! # Ordering
//!
//! Sibling keys keep their insertion order (`serde_json` is built with
//! `preserve_order`), so serializing the same synthesis twice yields
//! byte-identical output.
//!
//! # Example
//!
//! ```json
//! {
//!   "server": {
//!     "web_server": {
//!       "production": { "host": "example.com", "port": 8080, "ssl": true }
//!     }
//!   }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::util::hash::Hashable;

/// The nested mapping accumulated by a synthesizer.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
  entries: Map<String, Value>,
}

impl Hashable for Manifest {}

impl Manifest {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Number of top-level keys.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub(crate) fn entries_mut(&mut self) -> &mut Map<String, Value> {
    &mut self.entries
  }

  /// Look up the value stored under `path`.
  ///
  /// Returns `None` if any segment is missing or an intermediate value is not a mapping.
  pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Option<&Value> {
    let (last, parents) = path.split_last()?;
    let mut current = &self.entries;
    for segment in parents {
      current = current.get(segment.as_ref())?.as_object()?;
    }
    current.get(last.as_ref())
  }

  /// Pretty-printed JSON rendering.
  pub fn to_json_pretty(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }

  /// Get a summary of what's in the manifest
  pub fn summary(&self) -> ManifestSummary {
    let mut summary = ManifestSummary {
      top_level_keys: self.entries.len(),
      field_count: 0,
      depth: 0,
    };
    count_leaves(&self.entries, 1, &mut summary);
    summary
  }
}

impl From<Map<String, Value>> for Manifest {
  fn from(entries: Map<String, Value>) -> Self {
    Self { entries }
  }
}

fn count_leaves(map: &Map<String, Value>, level: usize, summary: &mut ManifestSummary) {
  for value in map.values() {
    match value {
      Value::Object(inner) if !inner.is_empty() => count_leaves(inner, level + 1, summary),
      _ => {
        summary.field_count += 1;
        summary.depth = summary.depth.max(level);
      }
    }
  }
}

/// Summary statistics for a manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestSummary {
  /// Distinct top-level keys (vocabulary keys in practice).
  pub top_level_keys: usize,
  /// Leaf values anywhere in the tree.
  pub field_count: usize,
  /// Length of the longest key path ending in a leaf.
  pub depth: usize,
}

impl fmt::Display for ManifestSummary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} top-level keys, {} fields, depth {}",
      self.top_level_keys, self.field_count, self.depth
    )
  }
}
