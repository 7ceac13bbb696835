//! Implementation of the `synth check` command.
//!
//! Evaluates a DSL file without emitting the manifest, reporting its shape and
//! content hash. Two files that check to the same hash synthesize identically.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use synth_lib::eval::evaluate_file;
use synth_lib::util::hash::Hashable;

use super::{VocabularyArgs, prepare, synth_err};
use crate::output::{print_stat, print_success, truncate_duration};

pub fn cmd_check(file: &Path, vocabulary: &VocabularyArgs) -> Result<()> {
  let start = Instant::now();
  let (path, mut synth) = prepare(file, vocabulary)?;

  let manifest = evaluate_file(&mut synth, &path).map_err(synth_err)?;
  let hash = manifest.compute_hash().context("Failed to compute manifest hash")?;
  let summary = manifest.summary();

  print_success(&format!("{} is valid", file.display()));
  print_stat("Name", synth.name());
  print_stat("Vocabulary", &synth.vocabulary().iter().collect::<Vec<_>>().join(", "));
  print_stat("Top-level keys", &summary.top_level_keys.to_string());
  print_stat("Fields", &summary.field_count.to_string());
  print_stat("Depth", &summary.depth.to_string());
  print_stat("Hash", &hash.to_string());
  print_stat(
    "Elapsed",
    &humantime::format_duration(truncate_duration(start.elapsed())).to_string(),
  );

  Ok(())
}
