//! The context object handed to synthesis blocks.

use serde_json::Value;
use tracing::trace;

use super::dispatch::{Dispatch, classify};
use super::{Call, DeclarationPath, SynthError, Vocabulary};
use crate::manifest::{Manifest, bury};

/// A nested block: evaluated once, against the scope of the declaration it belongs to.
pub type Block<'b> = Box<dyn FnOnce(&mut Scope<'_>) -> Result<(), SynthError> + 'b>;

/// A position inside one synthesis session.
///
/// Blocks write their calls against a `Scope`. Every call funnels through
/// [`Scope::invoke`], which validates it against the vocabulary and then either
/// recurses into a child scope bound to the extended path or buries a field
/// value in the session's manifest.
pub struct Scope<'s> {
  vocabulary: &'s Vocabulary,
  manifest: &'s mut Manifest,
  path: DeclarationPath,
}

impl<'s> Scope<'s> {
  pub(crate) fn root(vocabulary: &'s Vocabulary, manifest: &'s mut Manifest) -> Self {
    Self {
      vocabulary,
      manifest,
      path: DeclarationPath::root(),
    }
  }

  /// The declaration path this scope writes under.
  pub fn path(&self) -> &DeclarationPath {
    &self.path
  }

  pub fn vocabulary(&self) -> &Vocabulary {
    self.vocabulary
  }

  /// Dispatch one call.
  ///
  /// With a block, `name` must be a vocabulary key; the block then runs in a
  /// child scope whose path is this path plus `name` plus every argument.
  /// Without a block, the call assigns its single argument (null if none) to
  /// the field `name` under this path.
  pub fn invoke(&mut self, name: &str, args: Vec<Value>, block: Option<Block<'_>>) -> Result<(), SynthError> {
    match classify(self.vocabulary, &self.path, name, args, block.is_some())? {
      Dispatch::Nest(path) => {
        trace!(key = name, path = %path, "entering declaration");
        let mut child = Scope {
          vocabulary: self.vocabulary,
          manifest: &mut *self.manifest,
          path,
        };
        match block {
          Some(body) => body(&mut child),
          None => Ok(()),
        }
      }
      Dispatch::Assign(path, value) => {
        trace!(field = name, path = %path, "assigning field");
        bury(self.manifest.entries_mut(), path.segments(), value)
      }
    }
  }

  /// Declare a resource: `name` must be in the vocabulary, `identifiers` become path segments.
  pub fn resource<I, V, F>(&mut self, name: &str, identifiers: I, body: F) -> Result<(), SynthError>
  where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
    F: FnOnce(&mut Scope<'_>) -> Result<(), SynthError>,
  {
    let args = identifiers.into_iter().map(Into::into).collect();
    self.invoke(name, args, Some(Box::new(body)))
  }

  /// Assign a single value to a field under the current path.
  pub fn field(&mut self, name: &str, value: impl Into<Value>) -> Result<(), SynthError> {
    self.invoke(name, vec![value.into()], None)
  }

  /// Assign a field with an arbitrary argument list; more than one value is an error.
  pub fn field_values(&mut self, name: &str, values: Vec<Value>) -> Result<(), SynthError> {
    self.invoke(name, values, None)
  }

  /// Interpret a recorded call.
  pub fn apply(&mut self, call: &Call) -> Result<(), SynthError> {
    match &call.block {
      Some(children) => self.resource(&call.name, call.args.iter().cloned(), |scope| scope.apply_all(children)),
      None => self.invoke(&call.name, call.args.clone(), None),
    }
  }

  /// Interpret recorded calls in order, stopping at the first error.
  pub fn apply_all(&mut self, calls: &[Call]) -> Result<(), SynthError> {
    calls.iter().try_for_each(|call| self.apply(call))
  }
}
