//! Traits that describe a binary DICOM decoder and the data set it produces.
//!
//! Consumers of decoded data, such as the tag projection in `dcmpeek_inspect`,
//! are written against these traits so that any decoder can be plugged in,
//! including fakes that produce controlled element maps in tests.

use crate::ValueRepresentation;

/// A decoder that turns raw bytes into a decoded data set.
///
pub trait DataSetDecoder {
  type DataSet: DecodedDataSet;
  type Error: core::fmt::Display;

  /// Decodes the given bytes. `Ok(None)` means the decoder ran without error
  /// but produced no data set.
  ///
  fn decode(&self, bytes: &[u8]) -> Result<Option<Self::DataSet>, Self::Error>;
}

/// Details of a single entry in a decoded data set.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecodedElement {
  /// The element's value representation, if the decoder knows it.
  pub vr: Option<ValueRepresentation>,

  /// The element's value length in bytes, or `None` if it was encoded with an
  /// undefined length.
  pub length: Option<u32>,
}

/// The result of decoding: an ordered mapping from element keys to elements,
/// plus per-element string extraction.
///
/// Keys are in the decoder's native key format. Iteration order is the order
/// in which the decoder's element map holds its entries.
///
pub trait DecodedDataSet {
  type Error: core::fmt::Display;

  /// Returns the keys of all entries, in iteration order.
  ///
  fn keys(&self) -> Vec<&str>;

  /// Returns details of the element stored under a key. An entry that exists
  /// in [`Self::keys()`] but has no element is empty and is skipped by
  /// consumers.
  ///
  fn element(&self, key: &str) -> Option<DecodedElement>;

  /// Extracts the value of the element stored under a key as a string.
  /// `Ok(None)` means there is no value to show.
  ///
  fn string(&self, key: &str) -> Result<Option<String>, Self::Error>;

  /// Returns the number of entries.
  ///
  fn len(&self) -> usize {
    self.keys().len()
  }

  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
