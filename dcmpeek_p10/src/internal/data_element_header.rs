use dcmpeek_core::{DataElementTag, ValueRepresentation, dictionary};

use crate::internal::value_length::ValueLength;

/// The header of a single data element: its tag, VR, and value length. The VR
/// is `None` for the item and delimitation tags, which never have one.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataElementHeader {
  pub tag: DataElementTag,
  pub vr: Option<ValueRepresentation>,
  pub length: ValueLength,
}

impl core::fmt::Display for DataElementHeader {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    let vr = match self.vr {
      Some(vr) => vr.to_str(),
      None => "  ",
    };

    write!(
      f,
      "{} {} {}, length: {}",
      self.tag,
      vr,
      dictionary::tag_name(self.tag),
      self.length
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn to_string_test() {
    assert_eq!(
      DataElementHeader {
        tag: dictionary::ROWS.tag,
        vr: Some(ValueRepresentation::UnsignedShort),
        length: ValueLength::new(2),
      }
      .to_string(),
      "(0028,0010) US Rows, length: 2 bytes"
    );

    assert_eq!(
      DataElementHeader {
        tag: dictionary::ITEM.tag,
        vr: None,
        length: ValueLength::Undefined,
      }
      .to_string(),
      "(FFFE,E000)    Item, length: UNDEFINED"
    );
  }
}
