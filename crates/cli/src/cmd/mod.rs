mod check;
mod info;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use synth_lib::{SynthError, Synthesizer, Vocabulary};

pub use check::cmd_check;
pub use info::cmd_info;
pub use render::cmd_render;

/// Built-in vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
  /// terraform, provider, resource, data, variable, output, locals, module
  Terraform,
}

impl Preset {
  pub fn vocabulary(self) -> Vocabulary {
    match self {
      Preset::Terraform => Vocabulary::terraform(),
    }
  }
}

/// Options selecting the vocabulary a DSL file is checked against.
#[derive(Args, Debug, Clone)]
pub struct VocabularyArgs {
  /// Comma-separated vocabulary keys (e.g. "server,database,user")
  #[arg(short, long, env = "SYNTH_KEYS", value_delimiter = ',')]
  pub keys: Vec<String>,

  /// Start from a built-in vocabulary; --keys are added to it
  #[arg(short, long, value_enum)]
  pub preset: Option<Preset>,
}

impl VocabularyArgs {
  pub fn vocabulary(&self) -> Result<Vocabulary> {
    let keys: Vec<&str> = self
      .keys
      .iter()
      .map(|key| key.trim())
      .filter(|key| !key.is_empty())
      .collect();

    let from_keys = if keys.is_empty() {
      None
    } else {
      Some(Vocabulary::new(keys).map_err(synth_err)?)
    };

    match (self.preset.map(Preset::vocabulary), from_keys) {
      (Some(preset), Some(keys)) => Ok(preset.union(&keys)),
      (Some(preset), None) => Ok(preset),
      (None, Some(keys)) => Ok(keys),
      (None, None) => bail!("No vocabulary given: pass --keys, set SYNTH_KEYS, or use --preset"),
    }
  }
}

/// Resolve the DSL file and a synthesizer named after it.
pub fn prepare(file: &Path, vocabulary: &VocabularyArgs) -> Result<(PathBuf, Synthesizer)> {
  let path = dunce::canonicalize(file).with_context(|| format!("DSL file not found: {}", file.display()))?;
  let name = path
    .file_stem()
    .map(|stem| stem.to_string_lossy().into_owned())
    .unwrap_or_else(|| "synth".to_string());
  Ok((path, Synthesizer::with_vocabulary(name, vocabulary.vocabulary()?)))
}

pub fn synth_err(err: SynthError) -> anyhow::Error {
  anyhow::anyhow!("{}", err)
}
