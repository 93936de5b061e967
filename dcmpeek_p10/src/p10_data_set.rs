//! The in-memory data set produced by reading DICOM P10 data.
//!
//! Data elements are keyed by an `x` followed by the eight lowercase
//! hexadecimal digits of their tag, e.g. `x00100010`, and iterate in the order
//! they were read.

use byteorder::{ByteOrder, LittleEndian};
use indexmap::IndexMap;

use dcmpeek_core::{
  DataElementTag, DataError, DecodedDataSet, DecodedElement, TransferSyntax,
  ValueRepresentation, dictionary,
};

use crate::internal::value_length::ValueLength;

/// The value of a data element read from DICOM P10 data.
///
#[derive(Clone, Debug, PartialEq)]
pub enum P10Value {
  /// Value bytes, always stored in little endian byte order.
  Bytes(Vec<u8>),

  /// The items of a sequence.
  Sequence(Vec<P10DataSet>),

  /// The fragments of encapsulated pixel data. The first fragment is the basic
  /// offset table.
  EncapsulatedPixelData(Vec<Vec<u8>>),
}

/// A single data element read from DICOM P10 data.
///
#[derive(Clone, Debug, PartialEq)]
pub struct P10Element {
  pub tag: DataElementTag,
  pub vr: ValueRepresentation,
  pub length: ValueLength,

  /// The offset of the data element's header in the data that was read.
  pub offset: u64,

  pub value: P10Value,
}

/// A data set read from DICOM P10 data.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct P10DataSet {
  entries: IndexMap<String, P10Element>,
}

/// Returns the key used for a data element tag in a [`P10DataSet`].
///
pub fn element_key(tag: DataElementTag) -> String {
  format!("x{:04x}{:04x}", tag.group, tag.element)
}

impl P10DataSet {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Inserts a data element. If the data set already holds a data element
  /// with the same tag then its value is replaced and its position kept.
  ///
  pub fn insert(&mut self, element: P10Element) {
    self.entries.insert(element_key(element.tag), element);
  }

  pub fn get(&self, key: &str) -> Option<&P10Element> {
    self.entries.get(key)
  }

  pub fn get_tag(&self, tag: DataElementTag) -> Option<&P10Element> {
    self.get(&element_key(tag))
  }

  /// Returns the keys of the data elements in the order they were read.
  ///
  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.entries.keys().map(String::as_str)
  }

  /// Returns the data elements in the order they were read.
  ///
  pub fn elements(&self) -> impl Iterator<Item = &P10Element> {
    self.entries.values()
  }

  /// Returns the value of a data element rendered as a string. `None` is
  /// returned when the data element isn't present or its value is empty.
  ///
  pub fn string(&self, key: &str) -> Result<Option<String>, DataError> {
    match self.get(key) {
      Some(element) => element_to_string(element),
      None => Ok(None),
    }
  }

  /// Returns the transfer syntax named in the *'(0002,0010) Transfer Syntax
  /// UID'* data element, if present and recognized.
  ///
  pub fn transfer_syntax(&self) -> Option<&'static TransferSyntax> {
    self
      .string(&element_key(dictionary::TRANSFER_SYNTAX_UID.tag))
      .ok()
      .flatten()
      .and_then(|uid| TransferSyntax::from_uid(&uid).ok())
  }
}

impl DecodedDataSet for P10DataSet {
  type Error = DataError;

  fn keys(&self) -> Vec<&str> {
    P10DataSet::keys(self).collect()
  }

  fn element(&self, key: &str) -> Option<DecodedElement> {
    self.get(key).map(|element| DecodedElement {
      vr: Some(element.vr),
      length: element.length.defined(),
    })
  }

  fn string(&self, key: &str) -> Result<Option<String>, DataError> {
    P10DataSet::string(self, key)
  }

  fn len(&self) -> usize {
    self.entries.len()
  }
}

/// Renders a data element's value as a string.
///
/// String VRs are decoded up to their first NUL byte and trimmed. Numeric VRs
/// are rendered as their decimal values joined by a backslash, and attribute
/// tags as eight hexadecimal digits. Binary VRs and sequences have no string
/// form.
///
pub fn element_to_string(
  element: &P10Element,
) -> Result<Option<String>, DataError> {
  let bytes = match &element.value {
    P10Value::Bytes(bytes) => bytes,
    P10Value::Sequence(_) => return Err(DataError::IsSequence),
    P10Value::EncapsulatedPixelData(_) => {
      return Err(DataError::ValueNotString { vr: element.vr });
    }
  };

  if bytes.is_empty() {
    return Ok(None);
  }

  let vr = element.vr;

  let s = if vr.is_string() {
    decode_text(bytes)
  } else {
    match vr {
      ValueRepresentation::UnsignedShort => {
        join_values(bytes, 2, vr, LittleEndian::read_u16)?
      }
      ValueRepresentation::SignedShort => {
        join_values(bytes, 2, vr, LittleEndian::read_i16)?
      }
      ValueRepresentation::UnsignedLong => {
        join_values(bytes, 4, vr, LittleEndian::read_u32)?
      }
      ValueRepresentation::SignedLong => {
        join_values(bytes, 4, vr, LittleEndian::read_i32)?
      }
      ValueRepresentation::FloatingPointSingle => {
        join_values(bytes, 4, vr, LittleEndian::read_f32)?
      }
      ValueRepresentation::FloatingPointDouble => {
        join_values(bytes, 8, vr, LittleEndian::read_f64)?
      }
      ValueRepresentation::SignedVeryLong => {
        join_values(bytes, 8, vr, LittleEndian::read_i64)?
      }
      ValueRepresentation::UnsignedVeryLong => {
        join_values(bytes, 8, vr, LittleEndian::read_u64)?
      }
      ValueRepresentation::AttributeTag => join_values(bytes, 4, vr, |b| {
        DataElementTag::new(
          LittleEndian::read_u16(&b[0..2]),
          LittleEndian::read_u16(&b[2..4]),
        )
        .to_hex_string()
      })?,
      ValueRepresentation::Unknown => unknown_to_text(bytes)?,
      ValueRepresentation::Sequence => return Err(DataError::IsSequence),
      _ => return Err(DataError::ValueNotString { vr }),
    }
  };

  if s.is_empty() { Ok(None) } else { Ok(Some(s)) }
}

/// Decodes string bytes up to the first NUL. Bytes that aren't valid UTF-8 are
/// decoded as ISO 8859-1, which the DICOM default character repertoire is a
/// subset of.
///
fn decode_text(bytes: &[u8]) -> String {
  let bytes = match bytes.iter().position(|b| *b == 0) {
    Some(i) => &bytes[..i],
    None => bytes,
  };

  let s = match std::str::from_utf8(bytes) {
    Ok(s) => s.to_string(),
    Err(_) => bytes.iter().map(|b| char::from(*b)).collect(),
  };

  s.trim().to_string()
}

fn join_values<T: ToString>(
  bytes: &[u8],
  item_size: usize,
  vr: ValueRepresentation,
  read: impl Fn(&[u8]) -> T,
) -> Result<String, DataError> {
  if bytes.len() % item_size != 0 {
    return Err(DataError::new_value_invalid(format!(
      "{} value length {} is not a multiple of {}",
      vr,
      bytes.len(),
      item_size
    )));
  }

  Ok(
    bytes
      .chunks_exact(item_size)
      .map(|chunk| read(chunk).to_string())
      .collect::<Vec<_>>()
      .join("\\"),
  )
}

/// Values with a VR of UN are rendered as text only when they hold printable
/// text, optionally padded with trailing spaces or NULs.
///
fn unknown_to_text(bytes: &[u8]) -> Result<String, DataError> {
  let end = bytes
    .iter()
    .rposition(|b| *b != 0 && *b != b' ')
    .map_or(0, |i| i + 1);

  let bytes = &bytes[..end];

  let is_printable = bytes.iter().all(|b| {
    (*b >= 0x20 && *b != 0x7F) || matches!(*b, b'\t' | b'\n' | b'\r')
  });

  if !is_printable {
    return Err(DataError::ValueNotString {
      vr: ValueRepresentation::Unknown,
    });
  }

  Ok(decode_text(bytes))
}
