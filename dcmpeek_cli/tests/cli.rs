mod utils;

use predicates::prelude::*;
use utils::dcmpeek_cli;

#[test]
fn with_help() {
  dcmpeek_cli().arg("--help").assert().success().stdout(
    predicate::str::contains("inspect")
      .and(predicate::str::contains("reconstruct"))
      .and(predicate::str::contains("capture"))
      .and(predicate::str::contains("dictionary"))
      .and(predicate::str::contains("--log-level")),
  );
}

#[test]
fn with_no_command() {
  dcmpeek_cli().assert().failure();
}
