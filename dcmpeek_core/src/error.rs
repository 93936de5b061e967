//! The error reporting trait shared by the dcmpeek crates, and the stderr
//! writer the CLI uses to show a failure.

use std::io::Write;

use owo_colors::{OwoColorize, Stream::Stderr};

/// Common surface of the dcmpeek error enums. An error renders itself as
/// plain text lines, prefixed by what was being attempted when it occurred.
///
pub trait DcmpeekError {
  /// Describes the error as lines of text. `task_description` names the
  /// failed task, e.g. `inspecting "capture.json"`.
  ///
  fn to_lines(&self, task_description: &str) -> Vec<String>;

  /// Writes the output of [`DcmpeekError::to_lines()`] to stderr.
  ///
  fn print(&self, task_description: &str) {
    print_error_lines(&self.to_lines(task_description));
  }
}

/// Frames error lines for display: a blank line, a `-----` rule, the lines
/// themselves, then a trailing blank line.
///
fn framed_error_lines(lines: &[String]) -> Vec<String> {
  let mut framed = Vec::with_capacity(lines.len() + 3);

  framed.push(String::new());
  framed.push("-----".to_string());
  framed.extend(lines.iter().cloned());
  framed.push(String::new());

  framed
}

/// Writes framed error lines to stderr, in red when the terminal allows it.
/// Pending stdout output is flushed first so the two streams don't interleave.
///
pub fn print_error_lines(lines: &[String]) {
  let _ = std::io::stdout().flush();
  let _ = std::io::stderr().flush();

  for line in framed_error_lines(lines) {
    if line.is_empty() {
      eprintln!();
    } else {
      eprintln!("{}", line.if_supports_color(Stderr, |text| text.red()));
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct TruncatedError;

  impl DcmpeekError for TruncatedError {
    fn to_lines(&self, task_description: &str) -> Vec<String> {
      vec![
        format!("DICOM P10 error {}", task_description),
        "".to_string(),
        "  Details: Data ended unexpectedly".to_string(),
      ]
    }
  }

  #[test]
  fn framed_error_lines_test() {
    let lines = TruncatedError.to_lines("inspecting \"capture.json\"");

    assert_eq!(
      framed_error_lines(&lines),
      vec![
        "".to_string(),
        "-----".to_string(),
        "DICOM P10 error inspecting \"capture.json\"".to_string(),
        "".to_string(),
        "  Details: Data ended unexpectedly".to_string(),
        "".to_string(),
      ]
    );
  }

  #[test]
  fn framed_error_lines_empty_test() {
    assert_eq!(
      framed_error_lines(&[]),
      vec!["".to_string(), "-----".to_string(), "".to_string()]
    );
  }
}
