//! CLI output formatting utilities.
//!
//! Colored status messages and manifest serialization in the selected format.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};
use synth_lib::Manifest;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Json,
  Yaml,
}

impl OutputFormat {
  pub fn render(self, manifest: &Manifest) -> Result<String> {
    match self {
      OutputFormat::Json => manifest.to_json_pretty().context("Failed to serialize manifest to JSON"),
      OutputFormat::Yaml => serde_yaml::to_string(manifest).context("Failed to serialize manifest to YAML"),
    }
  }
}

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
}

pub fn truncate_duration(duration: Duration) -> Duration {
  Duration::from_millis(duration.as_millis() as u64)
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}
