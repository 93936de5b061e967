use std::io::Read;
use std::path::PathBuf;

use dcmpeek::p10::P10Error;

/// The samples bundled with the CLI for use by `inspect --sample`.
pub const SAMPLE_JSON: &str = include_str!("../assets/sample.json");

/// Defines a single input into a CLI command, which can be the `stdin` stream,
/// a file on the local file system, or the bundled sample.
///
#[derive(Clone, Debug, PartialEq)]
pub enum InputSource {
  Stdin,
  LocalFile { path: PathBuf },
  Sample,
}

impl core::fmt::Display for InputSource {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    match self {
      InputSource::Stdin => write!(f, "<stdin>"),
      InputSource::LocalFile { path } => write!(f, "{}", path.display()),
      InputSource::Sample => write!(f, "<sample>"),
    }
  }
}

impl InputSource {
  /// Converts an input filename passed to a CLI command into an input source,
  /// recognizing "-" as meaning stdin.
  ///
  pub fn from_filename(input_filename: &str) -> Self {
    match input_filename {
      "-" => InputSource::Stdin,
      _ => InputSource::LocalFile {
        path: PathBuf::from(input_filename),
      },
    }
  }

  /// Reads the whole of the input source.
  ///
  pub fn read_bytes(&self) -> Result<Vec<u8>, P10Error> {
    match self {
      InputSource::Stdin => {
        let mut bytes = vec![];

        std::io::stdin().read_to_end(&mut bytes).map_err(|e| {
          P10Error::FileError {
            when: "Reading stdin".to_string(),
            details: e.to_string(),
          }
        })?;

        Ok(bytes)
      }

      InputSource::LocalFile { path } => {
        std::fs::read(path).map_err(|e| P10Error::FileError {
          when: "Opening file".to_string(),
          details: e.to_string(),
        })
      }

      InputSource::Sample => Ok(SAMPLE_JSON.as_bytes().to_vec()),
    }
  }

  /// Reads the whole of the input source as UTF-8 text.
  ///
  pub fn read_to_string(&self) -> Result<String, P10Error> {
    String::from_utf8(self.read_bytes()?).map_err(|e| P10Error::FileError {
      when: format!("Reading \"{}\"", self),
      details: e.to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_filename_test() {
    assert_eq!(InputSource::from_filename("-"), InputSource::Stdin);
    assert_eq!(
      InputSource::from_filename("capture.json"),
      InputSource::LocalFile {
        path: PathBuf::from("capture.json")
      }
    );
  }

  #[test]
  fn sample_test() {
    let text = InputSource::Sample.read_to_string().unwrap();

    assert!(text.starts_with('['));
    assert_eq!(InputSource::Sample.to_string(), "<sample>");
  }
}
