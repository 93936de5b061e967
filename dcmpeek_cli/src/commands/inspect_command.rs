use std::io::Write;

use clap::{Args, ValueEnum};
use owo_colors::{OwoColorize, Stream::Stderr};
use tracing::{debug, info};

use dcmpeek::core::{DcmpeekError, TagDictionary, TransferSyntax, utils};
use dcmpeek::inspect::{DisplayRecord, project, samples};
use dcmpeek::p10::{P10Decoder, P10Error};

use crate::args::default_transfer_syntax_arg;
use crate::input_source::InputSource;

pub const ABOUT: &str = "Inspects the DICOM data carried by a JSON array of \
  signed 32-bit integers, printing the tag, name, and value of each data \
  element";

#[derive(Args)]
pub struct InspectArgs {
  #[arg(
    help = "The name of the JSON file containing the samples to inspect. \
      Specify '-' to read from stdin.",
    required_unless_present = "sample",
    conflicts_with = "sample"
  )]
  input_filename: Option<String>,

  #[arg(
    long,
    help = "Inspect the sample bundled with this tool instead of reading an \
      input file",
    default_value_t = false
  )]
  sample: bool,

  #[arg(
    long,
    short,
    help_heading = "Output",
    help = "The format used to print the inspected data elements.",
    default_value_t = Format::Table
  )]
  format: Format,

  #[arg(
    long,
    help_heading = "Output",
    help = "The maximum number of characters of each value to print. Longer \
      values are truncated and end with an ellipsis.",
    value_parser = clap::value_parser!(u32).range(1..100000),
  )]
  max_value_width: Option<u32>,

  #[arg(
    long,
    help_heading = "Input",
    help = default_transfer_syntax_arg::HELP,
    value_parser = default_transfer_syntax_arg::validate,
  )]
  default_transfer_syntax: Option<&'static TransferSyntax>,

  #[arg(
    long,
    help_heading = "Input",
    help = "Reject data that doesn't start with the 128-byte File Preamble and \
      'DICM' prefix",
    default_value_t = false
  )]
  require_dicm_prefix: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum Format {
  /// Output the data elements as a table.
  Table,

  /// Output the data elements as a JSON array.
  Json,

  /// Output each data element as a single line of JSON.
  JsonLines,
}

impl core::fmt::Display for Format {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Table => write!(f, "table"),
      Self::Json => write!(f, "json"),
      Self::JsonLines => write!(f, "json-lines"),
    }
  }
}

enum InspectCommandError {
  P10Error(P10Error),
  SamplesError(samples::SamplesError),
  InspectError(dcmpeek::inspect::InspectError),
}

impl InspectCommandError {
  fn print(&self, task_description: &str) {
    match self {
      Self::P10Error(e) => e.print(task_description),
      Self::SamplesError(e) => e.print(task_description),
      Self::InspectError(e) => e.print(task_description),
    }
  }
}

pub fn run(args: &InspectArgs) -> Result<(), ()> {
  let input_source = match &args.input_filename {
    Some(input_filename) if !args.sample => {
      InputSource::from_filename(input_filename)
    }
    _ => InputSource::Sample,
  };

  match perform_inspect(&input_source, args) {
    Ok(()) => Ok(()),

    Err(e) => {
      e.print(&format!("inspecting \"{}\"", input_source));
      Err(())
    }
  }
}

fn perform_inspect(
  input_source: &InputSource,
  args: &InspectArgs,
) -> Result<(), InspectCommandError> {
  let text = input_source
    .read_to_string()
    .map_err(InspectCommandError::P10Error)?;

  let samples =
    samples::parse_json(&text).map_err(InspectCommandError::SamplesError)?;

  info!(
    input = %input_source,
    sample_count = samples.len(),
    "Inspecting samples"
  );

  let config =
    default_transfer_syntax_arg::get_read_config(args.default_transfer_syntax)
      .require_dicm_prefix(args.require_dicm_prefix);

  let projection = project(
    Some(&samples),
    &P10Decoder::new(config),
    TagDictionary::standard(),
  )
  .map_err(InspectCommandError::InspectError)?;

  if let Some(warning) = projection.warning {
    debug!(warning = ?warning, "Projection produced no records");

    eprintln!(
      "{}",
      format!("Warning: {}", warning)
        .if_supports_color(Stderr, |text| text.yellow())
    );

    return Ok(());
  }

  let records: Vec<DisplayRecord> = projection
    .records
    .into_iter()
    .map(|record| truncate_value(record, args.max_value_width))
    .collect();

  write_records(&records, args.format).map_err(|e| {
    InspectCommandError::P10Error(P10Error::FileError {
      when: "Writing to stdout".to_string(),
      details: e.to_string(),
    })
  })
}

fn truncate_value(
  mut record: DisplayRecord,
  max_value_width: Option<u32>,
) -> DisplayRecord {
  if let Some(max_value_width) = max_value_width {
    record.value =
      utils::truncate_graphemes(&record.value, max_value_width as usize);
  }

  record
}

fn write_records(
  records: &[DisplayRecord],
  format: Format,
) -> Result<(), std::io::Error> {
  let mut stdout = std::io::stdout().lock();

  match format {
    Format::Table => writeln!(stdout, "{}", records_table(records))?,

    Format::Json => {
      serde_json::to_writer_pretty(&mut stdout, records)?;
      writeln!(stdout)?;
    }

    Format::JsonLines => {
      for record in records {
        serde_json::to_writer(&mut stdout, record)?;
        writeln!(stdout)?;
      }
    }
  }

  stdout.flush()
}

fn records_table(records: &[DisplayRecord]) -> comfy_table::Table {
  use comfy_table::{Attribute, Cell, Table, presets::UTF8_FULL};

  let mut table = Table::new();
  table.load_preset(UTF8_FULL);

  table.set_header(
    ["Tag", "Name", "Value"]
      .iter()
      .map(|text| Cell::new(text).add_attribute(Attribute::Bold))
      .collect::<Vec<_>>(),
  );

  for record in records {
    table.add_row(vec![&record.tag, &record.name, &record.value]);
  }

  table
}
