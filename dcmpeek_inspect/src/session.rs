//! The state of an interactive inspection: loaded samples plus the outcome of
//! the last parse.

use serde::Serialize;
use tracing::debug;

use dcmpeek_core::{DataSetDecoder, TagDictionary};

use crate::samples::{self, SamplesError};
use crate::{DisplayRecord, project};

/// The message shown when JSON text can't be loaded as samples.
pub const INVALID_JSON_MESSAGE: &str =
  "Failed to parse JSON input. Please ensure you have entered valid JSON data.";

/// The outcome of the last parse. At most one of `records`, `warning`, and
/// `error` is populated.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct InspectionState {
  pub records: Vec<DisplayRecord>,
  pub warning: Option<String>,
  pub error: Option<String>,
}

impl InspectionState {
  /// Returns whether nothing is populated, as is the case before any parse.
  ///
  pub fn is_empty(&self) -> bool {
    self.records.is_empty() && self.warning.is_none() && self.error.is_none()
  }
}

/// Holds loaded samples and the state produced by parsing them.
///
#[derive(Clone, Debug, Default)]
pub struct Session {
  samples: Option<Vec<i32>>,
  state: InspectionState,
}

impl Session {
  pub fn new() -> Self {
    Self::default()
  }

  /// Loads samples from JSON text, replacing any that were loaded before. On
  /// failure the previously loaded samples are kept and the state holds only
  /// the error.
  ///
  pub fn load_json(&mut self, text: &str) -> Result<usize, SamplesError> {
    match samples::parse_json(text) {
      Ok(samples) => {
        debug!(sample_count = samples.len(), "Loaded samples from JSON");

        let count = samples.len();
        self.samples = Some(samples);

        Ok(count)
      }

      Err(e) => {
        debug!(error = %e, "Failed to load samples from JSON");

        self.state = InspectionState {
          error: Some(INVALID_JSON_MESSAGE.to_string()),
          ..InspectionState::default()
        };

        Err(e)
      }
    }
  }

  /// Loads samples directly, replacing any that were loaded before.
  ///
  pub fn load_samples(&mut self, samples: Vec<i32>) {
    self.samples = Some(samples);
  }

  pub fn samples(&self) -> Option<&[i32]> {
    self.samples.as_deref()
  }

  /// Parses the loaded samples with the given decoder. The previous state is
  /// reset before the new outcome is recorded.
  ///
  pub fn parse<D: DataSetDecoder>(
    &mut self,
    decoder: &D,
    dictionary: &TagDictionary,
  ) -> &InspectionState {
    self.state = InspectionState::default();

    match project(self.samples.as_deref(), decoder, dictionary) {
      Ok(projection) => match projection.warning {
        Some(warning) => self.state.warning = Some(warning.to_string()),
        None => self.state.records = projection.records,
      },

      Err(e) => {
        self.state.error = Some(format!("Error parsing DICOM data: {}", e));
      }
    }

    &self.state
  }

  /// Discards the loaded samples and the state of the last parse.
  ///
  pub fn clear(&mut self) {
    self.samples = None;
    self.state = InspectionState::default();
  }

  pub fn state(&self) -> &InspectionState {
    &self.state
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use dcmpeek_core::{DecodedDataSet, DecodedElement, ValueRepresentation};

  /// A decoded data set holding a single Modality data element.
  ///
  struct ModalityDataSet;

  impl DecodedDataSet for ModalityDataSet {
    type Error = String;

    fn keys(&self) -> Vec<&str> {
      vec!["x00080060"]
    }

    fn element(&self, _key: &str) -> Option<DecodedElement> {
      Some(DecodedElement {
        vr: Some(ValueRepresentation::CodeString),
        length: Some(2),
      })
    }

    fn string(&self, _key: &str) -> Result<Option<String>, String> {
      Ok(Some("CT".to_string()))
    }
  }

  /// Decodes any non-empty bytes as [`ModalityDataSet`] and fails on empty
  /// bytes.
  ///
  struct ModalityDecoder;

  impl DataSetDecoder for ModalityDecoder {
    type DataSet = ModalityDataSet;
    type Error = String;

    fn decode(&self, bytes: &[u8]) -> Result<Option<ModalityDataSet>, String> {
      if bytes.is_empty() {
        Err("No data".to_string())
      } else {
        Ok(Some(ModalityDataSet))
      }
    }
  }

  #[test]
  fn parse_without_input_test() {
    let mut session = Session::new();
    assert!(session.state().is_empty());

    let state = session.parse(&ModalityDecoder, TagDictionary::standard());

    assert_eq!(
      state,
      &InspectionState {
        records: vec![],
        warning: None,
        error: Some("Error parsing DICOM data: No input data available".into()),
      }
    );
  }

  #[test]
  fn parse_records_test() {
    let mut session = Session::new();
    assert_eq!(session.load_json("[1, 2]"), Ok(2));
    assert_eq!(session.samples(), Some([1, 2].as_slice()));

    let state = session.parse(&ModalityDecoder, TagDictionary::standard());

    assert_eq!(
      state.records,
      vec![DisplayRecord::new(
        "00080060".to_string(),
        "Modality".to_string(),
        "CT".to_string()
      )]
    );
    assert_eq!(state.warning, None);
    assert_eq!(state.error, None);
  }

  #[test]
  fn parse_resets_state_test() {
    let mut session = Session::new();
    session.load_samples(vec![1]);
    session.parse(&ModalityDecoder, TagDictionary::standard());
    assert_eq!(session.state().records.len(), 1);

    session.load_samples(vec![]);
    let state = session.parse(&ModalityDecoder, TagDictionary::standard());

    assert_eq!(
      state,
      &InspectionState {
        records: vec![],
        warning: None,
        error: Some(
          "Error parsing DICOM data: Failed to parse DICOM data: No data"
            .into()
        ),
      }
    );
  }

  #[test]
  fn load_invalid_json_test() {
    let mut session = Session::new();
    session.load_samples(vec![5]);

    assert!(session.load_json("not json").is_err());
    assert_eq!(session.samples(), Some([5].as_slice()));
    assert_eq!(
      session.state().error,
      Some(INVALID_JSON_MESSAGE.to_string())
    );
  }

  #[test]
  fn load_invalid_json_after_parse_test() {
    let mut session = Session::new();
    session.load_samples(vec![1]);
    session.parse(&ModalityDecoder, TagDictionary::standard());
    assert_eq!(session.state().records.len(), 1);

    assert!(session.load_json("[1,").is_err());

    assert_eq!(
      session.state(),
      &InspectionState {
        records: vec![],
        warning: None,
        error: Some(INVALID_JSON_MESSAGE.to_string()),
      }
    );
  }

  #[test]
  fn clear_test() {
    let mut session = Session::new();
    session.load_samples(vec![1]);
    session.parse(&ModalityDecoder, TagDictionary::standard());

    session.clear();

    assert_eq!(session.samples(), None);
    assert!(session.state().is_empty());
  }
}
