use std::path::PathBuf;

use assert_cmd::{
  cargo::cargo_bin_cmd,
  {Command, assert::Assert},
};
use tempfile::TempDir;

#[allow(dead_code)]
pub fn dcmpeek_cli() -> Command {
  let mut cmd = cargo_bin_cmd!("dcmpeek_cli");

  // Keep diagnostics out of stderr unless a test asks for them
  cmd.env_remove("RUST_LOG");

  cmd
}

/// The samples bundled with the CLI.
///
#[allow(dead_code)]
pub fn sample_json() -> String {
  std::fs::read_to_string("assets/sample.json").unwrap()
}

fn temp_dir() -> PathBuf {
  if let Ok(t) = std::env::var("RUNNER_TEMP") {
    PathBuf::from(t)
  } else {
    std::env::temp_dir()
  }
}

#[allow(dead_code)]
pub fn create_temp_dir() -> TempDir {
  TempDir::new_in(temp_dir()).unwrap()
}

#[allow(dead_code)]
pub fn get_stdout(assert: Assert) -> String {
  String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[allow(dead_code)]
pub fn get_stderr(assert: Assert) -> String {
  String::from_utf8(assert.get_output().stderr.clone()).unwrap()
}
