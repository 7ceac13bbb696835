mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::{VocabularyArgs, cmd_check, cmd_info, cmd_render};
use output::{OutputFormat, print_error};

/// synth - Vocabulary-checked DSL to manifest synthesizer
#[derive(Parser)]
#[command(name = "synth")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Evaluate a DSL file and print the manifest
  Render {
    /// Path to the Lua DSL file
    file: PathBuf,

    #[command(flatten)]
    vocabulary: VocabularyArgs,

    /// Manifest format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Write the manifest to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
  },

  /// Evaluate a DSL file and report its shape and content hash
  Check {
    /// Path to the Lua DSL file
    file: PathBuf,

    #[command(flatten)]
    vocabulary: VocabularyArgs,
  },

  /// Show version and built-in vocabularies
  Info,
}

fn main() {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  if let Err(err) = run(cli.command) {
    print_error(&format!("{:#}", err));
    std::process::exit(1);
  }
}

fn run(command: Commands) -> Result<()> {
  match command {
    Commands::Render {
      file,
      vocabulary,
      format,
      output,
    } => cmd_render(&file, &vocabulary, format, output.as_deref()),
    Commands::Check { file, vocabulary } => cmd_check(&file, &vocabulary),
    Commands::Info => {
      cmd_info();
      Ok(())
    }
  }
}
