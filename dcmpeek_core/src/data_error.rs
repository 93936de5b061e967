//! Errors that occur when reading the value of a decoded data element.

use crate::{DcmpeekError, ValueRepresentation};

/// An error that occurred when retrieving the value of a data element.
///
#[derive(Clone, Debug, PartialEq)]
pub enum DataError {
  /// The data element's value can't be represented as a string, e.g. because
  /// it holds raw binary data.
  ValueNotString { vr: ValueRepresentation },

  /// The data element is a sequence, so its value is a list of items rather
  /// than a single value.
  IsSequence,

  /// The data element's value bytes are invalid for its VR.
  ValueInvalid { details: String },
}

impl DataError {
  pub fn new_value_invalid(details: String) -> Self {
    Self::ValueInvalid { details }
  }
}

impl core::fmt::Display for DataError {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    match self {
      Self::ValueNotString { vr } => {
        write!(f, "Value with VR {} is not a string", vr)
      }
      Self::IsSequence => write!(f, "Value is a sequence"),
      Self::ValueInvalid { details } => {
        write!(f, "Value is invalid: {}", details)
      }
    }
  }
}

impl DcmpeekError for DataError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    vec![
      format!("DICOM data error {}", task_description),
      "".to_string(),
      format!("  Error: {}", self),
    ]
  }
}
