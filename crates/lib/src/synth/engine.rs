//! The synthesizer engine.

use tracing::{debug, info};

use super::{Call, Scope, Session, SynthError, Vocabulary};
use crate::lua::record_calls;
use crate::manifest::Manifest;

/// Turns blocks of nested calls into a [`Manifest`].
///
/// A synthesizer owns its vocabulary and the manifest accumulated by every
/// successful `synthesize*` call. All mutating operations take `&mut self`, so
/// one instance is only ever driven from one place at a time; build separate
/// instances to synthesize in parallel.
///
/// # Example
///
/// ```ignore
/// use synth_lib::Synthesizer;
///
/// let mut synth = Synthesizer::new("infra", ["server"])?;
/// synth.synthesize(|s| {
///   s.resource("server", ["web", "production"], |s| s.field("host", "x"))
/// })?;
/// assert_eq!(
///   synth.synthesis().get(&["server", "web", "production", "host"]),
///   Some(&serde_json::json!("x"))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Synthesizer {
  name: String,
  vocabulary: Vocabulary,
  manifest: Manifest,
}

/// Create a synthesizer bound to `keys`; `name` is only used for diagnostics.
pub fn create_synthesizer<I, S>(name: impl Into<String>, keys: I) -> Result<Synthesizer, SynthError>
where
  I: IntoIterator<Item = S>,
  S: Into<String>,
{
  Synthesizer::new(name, keys)
}

impl Synthesizer {
  pub fn new<I, S>(name: impl Into<String>, keys: I) -> Result<Self, SynthError>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Ok(Self::with_vocabulary(name, Vocabulary::new(keys)?))
  }

  pub fn with_vocabulary(name: impl Into<String>, vocabulary: Vocabulary) -> Self {
    let name = name.into();
    debug!(synthesizer = %name, keys = vocabulary.len(), "synthesizer created");
    Self {
      name,
      vocabulary,
      manifest: Manifest::new(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn vocabulary(&self) -> &Vocabulary {
    &self.vocabulary
  }

  /// Evaluate a block against a fresh root scope.
  ///
  /// On success the block's assignments are merged into the accumulated
  /// manifest, which is returned. On the first error the session is discarded
  /// and the previous manifest is kept untouched.
  pub fn synthesize<F>(&mut self, block: F) -> Result<&Manifest, SynthError>
  where
    F: FnOnce(&mut Scope<'_>) -> Result<(), SynthError>,
  {
    let mut session = Session::begin(&self.vocabulary, &self.manifest);
    block(&mut session.scope())?;
    self.manifest = session.commit();
    Ok(&self.manifest)
  }

  /// Interpret recorded calls, with the same semantics as [`Synthesizer::synthesize`].
  pub fn synthesize_calls(&mut self, calls: &[Call]) -> Result<&Manifest, SynthError> {
    self.synthesize(|scope| scope.apply_all(calls))
  }

  /// Evaluate DSL source text through the Lua front-end.
  ///
  /// ```lua
  /// server("web_server", "production", function()
  ///   host "example.com"
  ///   port(8080)
  /// end)
  /// ```
  pub fn synthesize_source(&mut self, source: &str) -> Result<&Manifest, SynthError> {
    let chunk_name = format!("={}", self.name);
    self.synthesize_named_source(source, &chunk_name)
  }

  /// Like [`Synthesizer::synthesize_source`], with an explicit Lua chunk name
  /// (`@path` for files, `=label` for a literal label).
  pub fn synthesize_named_source(&mut self, source: &str, chunk_name: &str) -> Result<&Manifest, SynthError> {
    let calls = record_calls(&self.vocabulary, source, chunk_name)?;
    info!(synthesizer = %self.name, chunk = chunk_name, calls = calls.len(), "recorded DSL source");
    self.synthesize_calls(&calls)
  }

  /// The manifest accumulated so far.
  pub fn synthesis(&self) -> &Manifest {
    &self.manifest
  }

  pub fn into_synthesis(self) -> Manifest {
    self.manifest
  }
}
