mod utils;

use predicates::prelude::*;
use utils::dcmpeek_cli;

#[test]
fn with_all_entries() {
  dcmpeek_cli()
    .arg("dictionary")
    .assert()
    .success()
    .stdout(
      predicate::str::contains("(0010,0010)")
        .and(predicate::str::contains("Patient's Name"))
        .and(predicate::str::contains("(0025,1011)"))
        .and(predicate::str::contains("Prenuvo Clinic Name")),
    );
}

#[test]
fn with_filter() {
  dcmpeek_cli()
    .arg("dictionary")
    .arg("--filter")
    .arg("PATIENT'S NAME")
    .assert()
    .success()
    .stdout(
      predicate::str::contains("Patient's Name")
        .and(predicate::str::contains("PN"))
        .and(predicate::str::contains("Modality").not()),
    );
}
