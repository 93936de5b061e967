//! Entry point for dcmpeek's CLI tool.

mod args;
mod commands;
mod input_source;

use std::io::IsTerminal;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
  capture_command, dictionary_command, inspect_command, reconstruct_command,
};

#[derive(Parser)]
#[command(
  name = "dcmpeek",
  bin_name = "dcmpeek",
  version = env!("CARGO_PKG_VERSION"),
  about = "dcmpeek is a CLI tool for inspecting DICOM data captured as arrays \
    of signed 32-bit integers",
  max_term_width = 80
)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  #[arg(
    long,
    global = true,
    help = "The level of diagnostic logging written to stderr, e.g. 'debug', \
      or a full filter directive such as 'dcmpeek_inspect=trace'. Defaults to \
      the value of RUST_LOG if it is set, and 'warn' otherwise."
  )]
  log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
  #[command(about = inspect_command::ABOUT)]
  Inspect(inspect_command::InspectArgs),

  #[command(about = reconstruct_command::ABOUT)]
  Reconstruct(reconstruct_command::ReconstructArgs),

  #[command(about = capture_command::ABOUT)]
  Capture(capture_command::CaptureArgs),

  #[command(about = dictionary_command::ABOUT)]
  Dictionary(dictionary_command::DictionaryArgs),
}

fn main() -> Result<(), ()> {
  let cli = Cli::parse();

  init_tracing(cli.log_level.as_deref());

  match cli.command {
    Commands::Inspect(args) => inspect_command::run(&args),
    Commands::Reconstruct(args) => reconstruct_command::run(&args),
    Commands::Capture(args) => capture_command::run(&args),
    Commands::Dictionary(args) => dictionary_command::run(&args),
  }
}

/// Installs the global tracing subscriber. Diagnostics always go to stderr so
/// that they never mix with command output on stdout.
///
fn init_tracing(log_level: Option<&str>) {
  let filter = match log_level {
    Some(log_level) => EnvFilter::new(log_level),
    None => EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new("warn")),
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_ansi(std::io::stderr().is_terminal())
    .with_target(true)
    .with_writer(std::io::stderr)
    .init();
}
