use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use dcmpeek::core::DcmpeekError;
use dcmpeek::inspect::{reconstruct, samples};
use dcmpeek::p10::P10Error;

use crate::input_source::InputSource;

pub const ABOUT: &str = "Rebuilds the binary DICOM data carried by a JSON \
  array of signed 32-bit integers and writes it to a file";

#[derive(Args)]
pub struct ReconstructArgs {
  #[arg(
    help = "The name of the JSON file containing the samples to reconstruct. \
      Specify '-' to read from stdin."
  )]
  input_filename: String,

  #[arg(
    long,
    short,
    help_heading = "Output",
    help = "The name of the file to write the reconstructed bytes to. Specify \
      '-' to write to stdout."
  )]
  output_filename: PathBuf,

  #[arg(
    long,
    help_heading = "Output",
    help = "Overwrite the output file if it already exists",
    default_value_t = false
  )]
  overwrite: bool,
}

enum ReconstructError {
  P10Error(P10Error),
  SamplesError(samples::SamplesError),
}

pub fn run(args: &ReconstructArgs) -> Result<(), ()> {
  let input_source = InputSource::from_filename(&args.input_filename);

  match perform_reconstruct(&input_source, args) {
    Ok(()) => Ok(()),

    Err(e) => {
      let task_description = format!("reconstructing \"{}\"", input_source);

      match e {
        ReconstructError::P10Error(e) => e.print(&task_description),
        ReconstructError::SamplesError(e) => e.print(&task_description),
      }

      Err(())
    }
  }
}

fn perform_reconstruct(
  input_source: &InputSource,
  args: &ReconstructArgs,
) -> Result<(), ReconstructError> {
  let text = input_source
    .read_to_string()
    .map_err(ReconstructError::P10Error)?;

  let samples =
    samples::parse_json(&text).map_err(ReconstructError::SamplesError)?;

  let bytes = reconstruct(&samples);

  info!(
    sample_count = samples.len(),
    byte_count = bytes.len(),
    "Reconstructed bytes"
  );

  write_output(&args.output_filename, &bytes, args.overwrite)
    .map_err(ReconstructError::P10Error)
}

/// Writes bytes to the given output filename, or to stdout if it is "-".
///
fn write_output(
  output_filename: &Path,
  bytes: &[u8],
  overwrite: bool,
) -> Result<(), P10Error> {
  if output_filename.as_os_str() == "-" {
    let mut stdout = std::io::stdout().lock();

    return stdout
      .write_all(bytes)
      .and_then(|_| stdout.flush())
      .map_err(|e| P10Error::FileError {
        when: "Writing to stdout".to_string(),
        details: e.to_string(),
      });
  }

  if !overwrite && output_filename.exists() {
    eprintln!(
      "Error: Output file \"{}\" already exists.\n\nHint: Specify \
       --overwrite to automatically overwrite existing files",
      output_filename.display()
    );
    std::process::exit(1);
  }

  println!("Writing \"{}\" …", output_filename.display());

  std::fs::write(output_filename, bytes).map_err(|e| P10Error::FileError {
    when: "Writing output file".to_string(),
    details: e.to_string(),
  })
}
