use clap::Args;
use tracing::info;

use dcmpeek::core::DcmpeekError;
use dcmpeek::inspect::deconstruct;
use dcmpeek::p10::{self, P10Error};

use crate::input_source::InputSource;

pub const ABOUT: &str = "Captures a DICOM P10 file as a JSON array of signed \
  32-bit integers that can be passed to the inspect command";

#[derive(Args)]
pub struct CaptureArgs {
  #[arg(
    help = "The name of the DICOM P10 file to capture. Specify '-' to read \
      from stdin."
  )]
  input_filename: String,

  #[arg(
    long = "pretty",
    help_heading = "Output",
    help = "Whether to format the JSON for readability with newlines and \
      indentation",
    default_value_t = false
  )]
  pretty_print: bool,

  #[arg(
    long,
    help_heading = "Input",
    help = "Capture the input even if it isn't recognized as DICOM P10 data",
    default_value_t = false
  )]
  force: bool,
}

pub fn run(args: &CaptureArgs) -> Result<(), ()> {
  let input_source = InputSource::from_filename(&args.input_filename);

  match perform_capture(&input_source, args) {
    Ok(()) => Ok(()),

    Err(e) => {
      e.print(&format!("capturing \"{}\"", input_source));
      Err(())
    }
  }
}

fn perform_capture(
  input_source: &InputSource,
  args: &CaptureArgs,
) -> Result<(), P10Error> {
  let bytes = input_source.read_bytes()?;

  if !args.force && !p10::is_valid_bytes(&bytes) {
    return Err(P10Error::DicmPrefixNotPresent);
  }

  let samples = deconstruct(&bytes);

  info!(
    byte_count = bytes.len(),
    sample_count = samples.len(),
    "Captured samples"
  );

  let json = if args.pretty_print {
    serde_json::to_string_pretty(&samples)
  } else {
    serde_json::to_string(&samples)
  };

  let json = json.map_err(|e| P10Error::FileError {
    when: "Serializing samples".to_string(),
    details: e.to_string(),
  })?;

  println!("{}", json);

  Ok(())
}
