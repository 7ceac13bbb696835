use tracing::debug;

use super::{Scope, Vocabulary};
use crate::manifest::Manifest;

/// Working state of one `synthesize` invocation.
///
/// The session writes into its own copy of the manifest. The synthesizer only
/// adopts it through [`Session::commit`] once the block finished without error;
/// a failed session is simply dropped, leaving no partial state behind.
pub struct Session<'v> {
  vocabulary: &'v Vocabulary,
  manifest: Manifest,
}

impl<'v> Session<'v> {
  pub fn begin(vocabulary: &'v Vocabulary, base: &Manifest) -> Self {
    debug!(keys = base.len(), "synthesis session started");
    Self {
      vocabulary,
      manifest: base.clone(),
    }
  }

  /// The root scope of this session.
  pub fn scope(&mut self) -> Scope<'_> {
    Scope::root(self.vocabulary, &mut self.manifest)
  }

  pub fn commit(self) -> Manifest {
    debug!(summary = %self.manifest.summary(), "synthesis session committed");
    self.manifest
  }
}
