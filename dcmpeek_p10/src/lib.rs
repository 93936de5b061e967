//! Reads the DICOM Part 10 (P10) binary format used to store and transmit
//! DICOM-based medical imaging information into an in-memory data set.

pub mod p10_data_set;
pub mod p10_decoder;
pub mod p10_error;
pub mod p10_read;
pub mod p10_read_config;

mod internal;

use std::path::Path;

pub use internal::value_length::ValueLength;
pub use p10_data_set::{P10DataSet, P10Element, P10Value, element_key};
pub use p10_decoder::P10Decoder;
pub use p10_error::P10Error;
pub use p10_read::P10ReadContext;
pub use p10_read_config::P10ReadConfig;

/// Returns whether the given bytes contain DICOM P10 data by checking for the
/// presence of the 'DICM' prefix at offset 128.
///
pub fn is_valid_bytes(bytes: &[u8]) -> bool {
  bytes.len() >= 132 && bytes[128..132] == *b"DICM".as_slice()
}

/// Reads DICOM P10 data from a file into an in-memory data set.
///
pub fn read_file<P: AsRef<Path>>(
  filename: P,
  config: Option<P10ReadConfig>,
) -> Result<P10DataSet, P10Error> {
  match std::fs::read(filename) {
    Ok(bytes) => read_bytes(&bytes, config),
    Err(e) => Err(P10Error::FileError {
      when: "Opening file".to_string(),
      details: e.to_string(),
    }),
  }
}

/// Reads DICOM P10 data from a slice of bytes into a data set.
///
pub fn read_bytes(
  bytes: &[u8],
  config: Option<P10ReadConfig>,
) -> Result<P10DataSet, P10Error> {
  P10ReadContext::new(bytes, config).read()
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::io::Write;

  /// An implicit VR little endian Modality data element with the value "MR",
  /// preceded by a File Preamble and 'DICM' prefix.
  ///
  fn modality_p10() -> Vec<u8> {
    let mut bytes = vec![0u8; 128];
    bytes.extend_from_slice(b"DICM");
    bytes.extend_from_slice(&[0x08, 0x00, 0x60, 0x00, 0x02, 0x00, 0x00, 0x00]);
    bytes.extend_from_slice(b"MR");
    bytes
  }

  #[test]
  fn is_valid_bytes_test() {
    assert!(is_valid_bytes(&modality_p10()));
    assert!(!is_valid_bytes(&modality_p10()[0..131]));
    assert!(!is_valid_bytes(&[0u8; 140]));
  }

  #[test]
  fn read_file_test() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&modality_p10()).unwrap();

    let data_set = read_file(file.path(), None).unwrap();

    assert_eq!(data_set.keys().collect::<Vec<_>>(), vec!["x00080060"]);
    assert_eq!(data_set.string("x00080060"), Ok(Some("MR".to_string())));
  }

  #[test]
  fn read_missing_file_test() {
    assert!(matches!(
      read_file("does-not-exist.dcm", None),
      Err(P10Error::FileError { when, .. }) if when == "Opening file"
    ));
  }
}
