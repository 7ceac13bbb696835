//! Intermediate representation of DSL calls.
//!
//! Front-ends that cannot hand the engine a closure (the Lua source front-end,
//! or anything deserialized from disk) record each call as a [`Call`] and let
//! [`Synthesizer::synthesize_calls`](super::Synthesizer::synthesize_calls)
//! interpret the tree.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One recorded call: a name, its positional arguments and an optional nested block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
  pub name: String,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub args: Vec<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub block: Option<Vec<Call>>,
}

impl Call {
  /// A call without a nested block.
  pub fn field(name: impl Into<String>, args: Vec<Value>) -> Self {
    Self {
      name: name.into(),
      args,
      block: None,
    }
  }

  /// A call carrying a nested block.
  pub fn nested(name: impl Into<String>, args: Vec<Value>, block: Vec<Call>) -> Self {
    Self {
      name: name.into(),
      args,
      block: Some(block),
    }
  }
}
