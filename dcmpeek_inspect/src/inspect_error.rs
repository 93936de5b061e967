//! Errors that abort a whole projection.

use dcmpeek_core::DcmpeekError;

/// An error that stops a decoded data set from being projected into display
/// records. Failing to read a single data element's value is not an error,
/// and is instead shown as a placeholder value.
///
#[derive(Clone, Debug, PartialEq)]
pub enum InspectError {
  /// No samples have been loaded.
  NoInput,

  /// The decoder rejected the bytes.
  DecoderFailure { message: String },

  /// The decoder succeeded but produced no data set.
  EmptyDataset,
}

impl core::fmt::Display for InspectError {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    match self {
      Self::NoInput => write!(f, "No input data available"),
      Self::DecoderFailure { message } => {
        write!(f, "Failed to parse DICOM data: {}", message)
      }
      Self::EmptyDataset => {
        write!(f, "DICOM parser returned undefined dataset")
      }
    }
  }
}

impl DcmpeekError for InspectError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    vec![
      format!("DICOM inspection error {}", task_description),
      "".to_string(),
      format!("  Error: {}", self),
    ]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn to_string_test() {
    assert_eq!(InspectError::NoInput.to_string(), "No input data available");

    assert_eq!(
      InspectError::DecoderFailure {
        message: "Unknown error".to_string()
      }
      .to_string(),
      "Failed to parse DICOM data: Unknown error"
    );
  }

  #[test]
  fn to_lines_test() {
    assert_eq!(
      InspectError::EmptyDataset.to_lines("parsing sample"),
      vec![
        "DICOM inspection error parsing sample".to_string(),
        "".to_string(),
        "  Error: DICOM parser returned undefined dataset".to_string(),
      ]
    );
  }
}
