//! Errors that can occur when reading DICOM P10 data.

use dcmpeek_core::{DataSetPath, DcmpeekError};

/// An error that occurred when reading DICOM P10 data.
///
#[derive(Clone, Debug, PartialEq)]
pub enum P10Error {
  /// The 'DICM' prefix at bytes 128-132 was not present, and the read config
  /// requires it.
  DicmPrefixNotPresent,

  /// The File Meta Information specifies a transfer syntax that isn't
  /// recognized.
  TransferSyntaxNotSupported { transfer_syntax_uid: String },

  /// The data being read is invalid and can't be parsed as DICOM P10.
  DataInvalid {
    when: String,
    details: String,
    path: DataSetPath,
    offset: u64,
  },

  /// The end of the data was reached part way through a data element header
  /// or value.
  DataEndedUnexpectedly {
    when: String,
    path: DataSetPath,
    offset: u64,
  },

  /// A limit set in the read config was exceeded.
  MaximumExceeded {
    details: String,
    path: DataSetPath,
    offset: u64,
  },

  /// An error occurred reading DICOM P10 data from a file.
  FileError { when: String, details: String },
}

impl core::fmt::Display for P10Error {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    match self {
      Self::DicmPrefixNotPresent => {
        write!(f, "'DICM' prefix is not present")
      }

      Self::TransferSyntaxNotSupported {
        transfer_syntax_uid,
      } => write!(f, "Transfer syntax not supported: {}", transfer_syntax_uid),

      Self::DataInvalid {
        when,
        details,
        offset,
        ..
      } => write!(f, "{}: {} (offset {})", when, details, offset),

      Self::DataEndedUnexpectedly { when, offset, .. } => {
        write!(f, "{}: data ended unexpectedly (offset {})", when, offset)
      }

      Self::MaximumExceeded {
        details, offset, ..
      } => write!(f, "Maximum exceeded: {} (offset {})", details, offset),

      Self::FileError { when, details } => write!(f, "{}: {}", when, details),
    }
  }
}

impl DcmpeekError for P10Error {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    let mut lines = vec![
      format!("DICOM P10 error {}", task_description),
      "".to_string(),
    ];

    match self {
      Self::DicmPrefixNotPresent => {
        lines.push("  Error: 'DICM' prefix is not present".to_string());
      }

      Self::TransferSyntaxNotSupported {
        transfer_syntax_uid,
      } => {
        lines.push("  Error: Transfer syntax not supported".to_string());
        lines.push(format!("  Transfer syntax UID: {}", transfer_syntax_uid));
      }

      Self::DataInvalid {
        when,
        details,
        path,
        offset,
      } => {
        lines.push("  Error: Data invalid".to_string());
        lines.push(format!("  When: {}", when));
        lines.push(format!("  Details: {}", details));
        push_location_lines(&mut lines, path, *offset);
      }

      Self::DataEndedUnexpectedly { when, path, offset } => {
        lines.push("  Error: Data ended unexpectedly".to_string());
        lines.push(format!("  When: {}", when));
        push_location_lines(&mut lines, path, *offset);
      }

      Self::MaximumExceeded {
        details,
        path,
        offset,
      } => {
        lines.push("  Error: Maximum exceeded".to_string());
        lines.push(format!("  Details: {}", details));
        push_location_lines(&mut lines, path, *offset);
      }

      Self::FileError { when, details } => {
        lines.push("  Error: File I/O failure".to_string());
        lines.push(format!("  When: {}", when));
        lines.push(format!("  Details: {}", details));
      }
    }

    lines
  }
}

fn push_location_lines(
  lines: &mut Vec<String>,
  path: &DataSetPath,
  offset: u64,
) {
  if path.len() > 0 {
    lines.push(format!("  Path: {}", path.to_detailed_string()));
  }

  lines.push(format!("  Offset: 0x{:X}", offset));
}

#[cfg(test)]
mod tests {
  use super::*;

  use dcmpeek_core::dictionary;

  #[test]
  fn to_string_test() {
    assert_eq!(
      P10Error::TransferSyntaxNotSupported {
        transfer_syntax_uid: "1.2.3".to_string()
      }
      .to_string(),
      "Transfer syntax not supported: 1.2.3"
    );

    assert_eq!(
      P10Error::DataEndedUnexpectedly {
        when: "Reading data element header".to_string(),
        path: DataSetPath::new(),
        offset: 140,
      }
      .to_string(),
      "Reading data element header: data ended unexpectedly (offset 140)"
    );
  }

  #[test]
  fn to_lines_test() {
    let error = P10Error::DataInvalid {
      when: "Reading data element VR".to_string(),
      details: "Unrecognized VR".to_string(),
      path: DataSetPath::new_with_data_element(dictionary::PATIENT_ID.tag),
      offset: 0x90,
    };

    assert_eq!(
      error.to_lines("reading input"),
      vec![
        "DICOM P10 error reading input".to_string(),
        "".to_string(),
        "  Error: Data invalid".to_string(),
        "  When: Reading data element VR".to_string(),
        "  Details: Unrecognized VR".to_string(),
        "  Path: (0010,0020) Patient ID".to_string(),
        "  Offset: 0x90".to_string(),
      ]
    );
  }
}
