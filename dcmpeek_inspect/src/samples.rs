//! Parsing of captured samples from JSON text.
//!
//! Samples are given either as a JSON array of integers, or as a JSON object
//! whose keys are array indices, which is how a typed integer array is
//! serialized when it is passed through `JSON.stringify`. Object values are
//! taken in ascending numeric order of their keys.

use serde_json::Value;

use dcmpeek_core::DcmpeekError;

/// An error that occurred when parsing samples from JSON text.
///
#[derive(Clone, Debug, PartialEq)]
pub enum SamplesError {
  /// The text is not valid JSON.
  InvalidJson { details: String },

  /// The JSON is valid but is neither an array nor an object.
  UnsupportedShape { found: &'static str },

  /// An object key is not an array index.
  InvalidKey { key: String },

  /// A value is not an integer in the signed 32-bit range.
  InvalidValue { position: String, details: String },
}

impl core::fmt::Display for SamplesError {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    match self {
      Self::InvalidJson { details } => write!(f, "Invalid JSON: {}", details),
      Self::UnsupportedShape { found } => write!(
        f,
        "Expected a JSON array or object of integers, found {}",
        found
      ),
      Self::InvalidKey { key } => {
        write!(f, "Object key \"{}\" is not an array index", key)
      }
      Self::InvalidValue { position, details } => {
        write!(f, "Value at {} {}", position, details)
      }
    }
  }
}

impl DcmpeekError for SamplesError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    vec![
      format!("JSON samples error {}", task_description),
      "".to_string(),
      format!("  Error: {}", self),
    ]
  }
}

/// Parses samples from JSON text.
///
pub fn parse_json(text: &str) -> Result<Vec<i32>, SamplesError> {
  let value: Value =
    serde_json::from_str(text).map_err(|e| SamplesError::InvalidJson {
      details: e.to_string(),
    })?;

  match value {
    Value::Array(values) => values
      .iter()
      .enumerate()
      .map(|(i, value)| to_sample(value, || format!("index {}", i)))
      .collect(),

    Value::Object(map) => {
      let mut entries = map
        .iter()
        .map(|(key, value)| parse_index(key).map(|index| (index, key, value)))
        .collect::<Result<Vec<_>, SamplesError>>()?;

      entries.sort_by_key(|(index, _, _)| *index);

      entries
        .into_iter()
        .map(|(_, key, value)| to_sample(value, || format!("key \"{}\"", key)))
        .collect()
    }

    Value::Null => {
      Err(SamplesError::UnsupportedShape { found: "null" })
    }
    Value::Bool(_) => {
      Err(SamplesError::UnsupportedShape { found: "a boolean" })
    }
    Value::Number(_) => {
      Err(SamplesError::UnsupportedShape { found: "a number" })
    }
    Value::String(_) => {
      Err(SamplesError::UnsupportedShape { found: "a string" })
    }
  }
}

/// Parses an object key as an array index. Only the canonical decimal form is
/// accepted, so keys such as `"01"` are rejected.
///
fn parse_index(key: &str) -> Result<u32, SamplesError> {
  match key.parse::<u32>() {
    Ok(index) if index != u32::MAX && index.to_string() == key => Ok(index),
    _ => Err(SamplesError::InvalidKey {
      key: key.to_string(),
    }),
  }
}

fn to_sample(
  value: &Value,
  position: impl Fn() -> String,
) -> Result<i32, SamplesError> {
  let invalid = |details: &str| SamplesError::InvalidValue {
    position: position(),
    details: details.to_string(),
  };

  match value {
    Value::Number(number) => match number.as_i64() {
      Some(i) => i32::try_from(i)
        .map_err(|_| invalid("is outside the signed 32-bit range")),
      None if number.is_u64() => {
        Err(invalid("is outside the signed 32-bit range"))
      }
      None => Err(invalid("is not an integer")),
    },

    _ => Err(invalid("is not an integer")),
  }
}
