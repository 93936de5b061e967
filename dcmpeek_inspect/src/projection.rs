//! Projection of a decoded data set into display records.
//!
//! The samples are rebuilt into bytes, handed to a decoder, and each entry of
//! the resulting data set becomes one [`DisplayRecord`], in the decoder's
//! iteration order. A value that fails to be read is replaced by a placeholder
//! and never aborts the projection.

use tracing::debug;

use dcmpeek_core::{
  DataSetDecoder, DecodedDataSet, TagDictionary, ValueRepresentation,
  dictionary,
};

use crate::display_record::{
  self, DisplayRecord, NOT_AVAILABLE_VALUE, UNREADABLE_VALUE,
};
use crate::{InspectError, reconstruct};

/// The number of leading samples that are logged before decoding.
const LOGGED_SAMPLE_COUNT: usize = 16;

/// A condition that leaves a successful projection without any records.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProjectionWarning {
  /// The decoded data set has no entries.
  HeaderOnly,

  /// The decoded data set has entries but none of them yielded a record.
  NoRecognizableTags,
}

impl core::fmt::Display for ProjectionWarning {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    match self {
      Self::HeaderOnly => write!(
        f,
        "The DICOM data contains only header information. No DICOM tags are \
         available."
      ),
      Self::NoRecognizableTags => write!(
        f,
        "No recognizable DICOM tags were found in the parsed data."
      ),
    }
  }
}

/// The result of a successful projection. When `records` is empty, `warning`
/// says why.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Projection {
  pub records: Vec<DisplayRecord>,
  pub warning: Option<ProjectionWarning>,
}

/// Rebuilds the bytes carried by the samples, decodes them, and projects the
/// decoded data set into display records. Names are looked up in the given
/// dictionary.
///
pub fn project<D: DataSetDecoder>(
  samples: Option<&[i32]>,
  decoder: &D,
  dictionary: &TagDictionary,
) -> Result<Projection, InspectError> {
  let samples = samples.ok_or(InspectError::NoInput)?;

  debug!(
    sample_count = samples.len(),
    first_samples = ?&samples[..samples.len().min(LOGGED_SAMPLE_COUNT)],
    "Parsing samples"
  );

  let bytes = reconstruct(samples);

  let data_set = decoder
    .decode(&bytes)
    .map_err(|e| {
      let message = e.to_string();

      InspectError::DecoderFailure {
        message: if message.is_empty() {
          "Unknown error".to_string()
        } else {
          message
        },
      }
    })?
    .ok_or(InspectError::EmptyDataset)?;

  if data_set.is_empty() {
    return Ok(Projection {
      records: vec![],
      warning: Some(ProjectionWarning::HeaderOnly),
    });
  }

  let records: Vec<DisplayRecord> = data_set
    .keys()
    .into_iter()
    .filter_map(|key| project_element(&data_set, key, dictionary))
    .collect();

  debug!(record_count = records.len(), "Projected data elements");

  if records.is_empty() {
    return Ok(Projection {
      records,
      warning: Some(ProjectionWarning::NoRecognizableTags),
    });
  }

  Ok(Projection {
    records,
    warning: None,
  })
}

/// Projects a single entry of a decoded data set. Entries that hold no element
/// are skipped.
///
fn project_element<S: DecodedDataSet>(
  data_set: &S,
  key: &str,
  dictionary: &TagDictionary,
) -> Option<DisplayRecord> {
  let element = data_set.element(key)?;

  let tag = display_tag(key);
  debug!(tag = %tag, "Formatted tag");

  let value = if element.vr == Some(ValueRepresentation::Sequence) {
    display_record::SEQUENCE_VALUE.to_string()
  } else {
    match data_set.string(key) {
      Ok(Some(value)) if !value.is_empty() => value,
      Ok(_) => NOT_AVAILABLE_VALUE.to_string(),
      Err(e) => {
        debug!(tag = %tag, error = %e, "Unable to read data element value");
        UNREADABLE_VALUE.to_string()
      }
    }
  };

  let name = dictionary
    .find_hex(&tag)
    .map_or(dictionary::UNKNOWN_NAME, |item| item.name)
    .to_string();

  Some(DisplayRecord::new(tag, name, value))
}

/// Converts a decoder key into a display tag by removing its single leading
/// marker character and uppercasing the rest, e.g. `x0020000d` becomes
/// `0020000D`.
///
pub fn display_tag(key: &str) -> String {
  let mut chars = key.chars();
  chars.next();

  chars.as_str().to_uppercase()
}
