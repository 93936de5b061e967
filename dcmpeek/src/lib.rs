//! Inspects DICOM data captured as an array of signed 32-bit integers.
//!
//! The integers are rebuilt into a byte buffer, read as DICOM P10 data, and
//! each data element is projected into a record of its tag, name, and value.

pub use dcmpeek_core as core;
pub use dcmpeek_inspect as inspect;
pub use dcmpeek_p10 as p10;

use dcmpeek_core::TagDictionary;
use dcmpeek_inspect::{InspectionState, Session};
use dcmpeek_p10::{P10Decoder, P10ReadConfig};

mod integration_tests;

/// Loads samples from JSON text and parses them as DICOM P10 data, with names
/// taken from the standard tag dictionary. Failures are reported through the
/// returned state's `error`.
///
pub fn inspect_json(text: &str, config: &P10ReadConfig) -> InspectionState {
  let mut session = Session::new();

  if session.load_json(text).is_err() {
    return session.state().clone();
  }

  session
    .parse(&P10Decoder::new(*config), TagDictionary::standard())
    .clone()
}
