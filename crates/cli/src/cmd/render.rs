//! Implementation of the `synth render` command.
//!
//! Evaluates a Lua DSL file and prints the resulting manifest, or writes it to
//! a file with `--output`.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use synth_lib::eval::evaluate_file;

use super::{VocabularyArgs, prepare, synth_err};
use crate::output::{OutputFormat, print_success, truncate_duration};

pub fn cmd_render(file: &Path, vocabulary: &VocabularyArgs, format: OutputFormat, output: Option<&Path>) -> Result<()> {
  let start = Instant::now();
  let (path, mut synth) = prepare(file, vocabulary)?;

  let manifest = evaluate_file(&mut synth, &path).map_err(synth_err)?;
  let text = format.render(manifest)?;

  match output {
    Some(target) => {
      fs::write(target, &text).with_context(|| format!("Failed to write manifest: {}", target.display()))?;
      print_success(&format!(
        "Wrote {} to {} in {}",
        manifest.summary(),
        target.display(),
        humantime::format_duration(truncate_duration(start.elapsed()))
      ));
    }
    None => {
      print!("{}", text);
      if !text.ends_with('\n') {
        println!();
      }
    }
  }

  info!(synthesizer = synth.name(), file = %path.display(), ?format, "render complete");
  Ok(())
}
