mod utils;

use predicates::prelude::*;
use utils::{create_temp_dir, dcmpeek_cli, sample_json};

#[test]
fn with_output_filename() {
  let temp_dir = create_temp_dir();
  let output_path = temp_dir.path().join("sample.dcm");

  dcmpeek_cli()
    .arg("reconstruct")
    .arg("assets/sample.json")
    .arg("--output-filename")
    .arg(&output_path)
    .assert()
    .success()
    .stdout(format!("Writing \"{}\" …\n", output_path.display()));

  let bytes = std::fs::read(&output_path).unwrap();

  assert_eq!(bytes.len(), 348);
  assert_eq!(&bytes[0..128], &[0u8; 128]);
  assert_eq!(&bytes[128..132], b"DICM");
}

#[test]
fn with_stdout_output() {
  dcmpeek_cli()
    .arg("reconstruct")
    .arg("-")
    .arg("--output-filename")
    .arg("-")
    .write_stdin("[6291464, 2, 21069, -1]")
    .assert()
    .success()
    .stdout(vec![
      0x08, 0x00, 0x60, 0x00, 0x02, 0x00, 0x00, 0x00, 0x4D, 0x52, 0x00, 0x00,
      0xFF, 0xFF, 0xFF, 0xFF,
    ]);
}

#[test]
fn with_existing_output_file() {
  let temp_dir = create_temp_dir();
  let output_path = temp_dir.path().join("sample.dcm");
  std::fs::write(&output_path, b"existing").unwrap();

  dcmpeek_cli()
    .arg("reconstruct")
    .arg("assets/sample.json")
    .arg("--output-filename")
    .arg(&output_path)
    .assert()
    .failure()
    .stderr(predicate::str::contains("already exists"));

  assert_eq!(std::fs::read(&output_path).unwrap(), b"existing");

  dcmpeek_cli()
    .arg("reconstruct")
    .arg("-")
    .arg("--output-filename")
    .arg(&output_path)
    .arg("--overwrite")
    .write_stdin(sample_json())
    .assert()
    .success();

  assert_eq!(std::fs::read(&output_path).unwrap().len(), 348);
}

#[test]
fn with_invalid_json() {
  dcmpeek_cli()
    .arg("reconstruct")
    .arg("-")
    .arg("--output-filename")
    .arg("-")
    .write_stdin("{\"a\": 1}")
    .assert()
    .failure()
    .stderr(predicate::str::contains(
      "Object key \"a\" is not an array index",
    ));
}
