use clap::ValueEnum;

use super::Preset;

pub fn cmd_info() {
  println!("synth {}", env!("CARGO_PKG_VERSION"));
  println!("Presets:");
  for preset in Preset::value_variants() {
    let name = preset
      .to_possible_value()
      .map(|value| value.get_name().to_string())
      .unwrap_or_default();
    println!("  {}: {}", name, preset.vocabulary().iter().collect::<Vec<_>>().join(", "));
  }
}
