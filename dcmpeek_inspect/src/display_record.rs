use serde::Serialize;

/// The value shown for a data element that holds a sequence.
pub const SEQUENCE_VALUE: &str = "Sequence";

/// The value shown when a data element has no value to show.
pub const NOT_AVAILABLE_VALUE: &str = "N/A";

/// The value shown when reading a data element's value failed.
pub const UNREADABLE_VALUE: &str = "Unable to read value";

/// A single row of output: a data element's tag as eight uppercase hexadecimal
/// digits, its name from the tag dictionary, and its value rendered as a
/// string or one of the placeholder values above.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayRecord {
  pub tag: String,
  pub name: String,
  pub value: String,
}

impl DisplayRecord {
  pub fn new(tag: String, name: String, value: String) -> Self {
    Self { tag, name, value }
  }
}
