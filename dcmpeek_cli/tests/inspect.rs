mod utils;

use insta::assert_snapshot;
use predicates::prelude::*;
use utils::{create_temp_dir, dcmpeek_cli, get_stdout, sample_json};

/// An implicit VR little endian Modality data element with the value "MR".
const IMPLICIT_MODALITY: &str = "[6291464, 2, 21069]";

/// An explicit VR little endian Modality data element with the value "MR".
const EXPLICIT_MODALITY: &str = "[6291464, 152387, 21069]";

#[test]
fn with_sample_as_json_lines() {
  let assert = dcmpeek_cli()
    .arg("inspect")
    .arg("--sample")
    .arg("--format")
    .arg("json-lines")
    .assert()
    .success();

  assert_snapshot!(get_stdout(assert), @r#"
  {"tag":"00020000","name":"File Meta Information Group Length","value":"112"}
  {"tag":"00020002","name":"Media Storage SOP Class UID","value":"1.2.840.10008.5.1.4.1.1.4"}
  {"tag":"00020003","name":"Media Storage SOP Instance UID","value":"1.2.826.0.1.3680043.8.498.1042"}
  {"tag":"00020010","name":"Transfer Syntax UID","value":"1.2.840.10008.1.2.1"}
  {"tag":"00080060","name":"Modality","value":"MR"}
  {"tag":"0008103E","name":"Series Description","value":"AX T1 BRAIN"}
  {"tag":"00100010","name":"Patient's Name","value":"Doe^Jane"}
  {"tag":"00100020","name":"Patient ID","value":"PN-1042"}
  {"tag":"00100040","name":"Patient's Sex","value":"F"}
  {"tag":"00180087","name":"Magnetic Field Strength","value":"3"}
  {"tag":"00280010","name":"Rows","value":"256"}
  {"tag":"00280011","name":"Columns","value":"256"}
  "#);
}

#[test]
fn with_sample_as_table() {
  dcmpeek_cli()
    .arg("inspect")
    .arg("--sample")
    .assert()
    .success()
    .stdout(
      predicate::str::contains("Tag")
        .and(predicate::str::contains("Name"))
        .and(predicate::str::contains("Value"))
        .and(predicate::str::contains("0008103E"))
        .and(predicate::str::contains("Series Description"))
        .and(predicate::str::contains("AX T1 BRAIN")),
    );
}

#[test]
fn with_input_file_as_object() {
  // Typed arrays passed through JSON.stringify become objects keyed by index
  let samples: Vec<i32> = serde_json::from_str(&sample_json()).unwrap();
  let object: serde_json::Map<String, serde_json::Value> = samples
    .iter()
    .enumerate()
    .rev()
    .map(|(i, sample)| (i.to_string(), serde_json::Value::from(*sample)))
    .collect();

  let temp_dir = create_temp_dir();
  let input_path = temp_dir.path().join("capture.json");
  std::fs::write(&input_path, serde_json::to_string(&object).unwrap())
    .unwrap();

  let assert = dcmpeek_cli()
    .arg("inspect")
    .arg(&input_path)
    .arg("--format")
    .arg("json")
    .assert()
    .success();

  let records: Vec<serde_json::Value> =
    serde_json::from_str(&get_stdout(assert)).unwrap();

  assert_eq!(records.len(), 12);
  assert_eq!(
    records[4],
    serde_json::json!({"tag": "00080060", "name": "Modality", "value": "MR"})
  );
}

#[test]
fn with_stdin() {
  dcmpeek_cli()
    .arg("inspect")
    .arg("-")
    .arg("--format")
    .arg("json-lines")
    .write_stdin(IMPLICIT_MODALITY)
    .assert()
    .success()
    .stdout("{\"tag\":\"00080060\",\"name\":\"Modality\",\"value\":\"MR\"}\n");
}

#[test]
fn with_max_value_width() {
  dcmpeek_cli()
    .arg("inspect")
    .arg("--sample")
    .arg("--format")
    .arg("json-lines")
    .arg("--max-value-width")
    .arg("5")
    .assert()
    .success()
    .stdout(
      predicate::str::contains("\"value\":\"AX T…\"")
        .and(predicate::str::contains("\"value\":\"MR\"")),
    );
}

#[test]
fn with_default_transfer_syntax() {
  dcmpeek_cli()
    .arg("inspect")
    .arg("-")
    .arg("--format")
    .arg("json-lines")
    .arg("--default-transfer-syntax")
    .arg("1.2.840.10008.1.2.1")
    .write_stdin(EXPLICIT_MODALITY)
    .assert()
    .success()
    .stdout("{\"tag\":\"00080060\",\"name\":\"Modality\",\"value\":\"MR\"}\n");
}

#[test]
fn with_unrecognized_default_transfer_syntax() {
  dcmpeek_cli()
    .arg("inspect")
    .arg("--sample")
    .arg("--default-transfer-syntax")
    .arg("1.2.3.4")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Unrecognized transfer syntax UID"));
}

#[test]
fn with_require_dicm_prefix() {
  dcmpeek_cli()
    .arg("inspect")
    .arg("-")
    .arg("--require-dicm-prefix")
    .write_stdin(IMPLICIT_MODALITY)
    .assert()
    .failure()
    .stderr(
      predicate::str::contains("DICOM inspection error inspecting \"<stdin>\"")
        .and(predicate::str::contains("'DICM' prefix is not present")),
    );
}

#[test]
fn with_header_only_data() {
  dcmpeek_cli()
    .arg("inspect")
    .arg("-")
    .write_stdin("[]")
    .assert()
    .success()
    .stdout("")
    .stderr(predicate::str::contains(
      "Warning: The DICOM data contains only header information. No DICOM \
       tags are available.",
    ));
}

#[test]
fn with_truncated_data() {
  // A Modality data element that claims a 100 byte value
  dcmpeek_cli()
    .arg("inspect")
    .arg("-")
    .write_stdin("[6291464, 100]")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to parse DICOM data: "));
}

#[test]
fn with_invalid_json() {
  dcmpeek_cli()
    .arg("inspect")
    .arg("-")
    .write_stdin("[1, 2,")
    .assert()
    .failure()
    .stderr(
      predicate::str::contains("JSON samples error inspecting \"<stdin>\"")
        .and(predicate::str::contains("Invalid JSON")),
    );
}

#[test]
fn with_out_of_range_sample() {
  dcmpeek_cli()
    .arg("inspect")
    .arg("-")
    .write_stdin("[2147483648]")
    .assert()
    .failure()
    .stderr(predicate::str::contains(
      "Value at index 0 is outside the signed 32-bit range",
    ));
}

#[test]
fn with_missing_input_file() {
  dcmpeek_cli()
    .arg("inspect")
    .arg("does-not-exist.json")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Opening file"));
}

#[test]
fn with_input_file_and_sample() {
  dcmpeek_cli()
    .arg("inspect")
    .arg("capture.json")
    .arg("--sample")
    .assert()
    .failure();
}

#[test]
fn with_debug_log_level() {
  dcmpeek_cli()
    .arg("--log-level")
    .arg("debug")
    .arg("inspect")
    .arg("--sample")
    .assert()
    .success()
    .stderr(predicate::str::contains("Parsing samples"));
}
