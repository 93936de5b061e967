//! The DICOM value representations (VRs) that describe the data type and format
//! of a data element's value.
//!
//! Ref: PS3.5 6.2.

/// All DICOM value representations (VRs).
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueRepresentation {
  ApplicationEntity,
  AgeString,
  AttributeTag,
  CodeString,
  Date,
  DecimalString,
  DateTime,
  FloatingPointDouble,
  FloatingPointSingle,
  IntegerString,
  LongString,
  LongText,
  OtherByteString,
  OtherDoubleString,
  OtherFloatString,
  OtherLongString,
  OtherVeryLongString,
  OtherWordString,
  PersonName,
  Sequence,
  ShortString,
  SignedLong,
  SignedShort,
  ShortText,
  SignedVeryLong,
  Time,
  UnlimitedCharacters,
  UniqueIdentifier,
  UnsignedLong,
  Unknown,
  UniversalResourceIdentifier,
  UnsignedShort,
  UnlimitedText,
  UnsignedVeryLong,
}

/// The size of the value length field that follows an explicit VR.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueLengthSize {
  U16,
  U32,
}

impl ValueLengthSize {
  /// The largest value length that can be stored in a length field of this
  /// size.
  ///
  pub fn max_length(&self) -> usize {
    match self {
      Self::U16 => 0xFFFF,
      Self::U32 => 0xFFFF_FFFE,
    }
  }
}

const ALL: [ValueRepresentation; 34] = [
  ValueRepresentation::ApplicationEntity,
  ValueRepresentation::AgeString,
  ValueRepresentation::AttributeTag,
  ValueRepresentation::CodeString,
  ValueRepresentation::Date,
  ValueRepresentation::DecimalString,
  ValueRepresentation::DateTime,
  ValueRepresentation::FloatingPointDouble,
  ValueRepresentation::FloatingPointSingle,
  ValueRepresentation::IntegerString,
  ValueRepresentation::LongString,
  ValueRepresentation::LongText,
  ValueRepresentation::OtherByteString,
  ValueRepresentation::OtherDoubleString,
  ValueRepresentation::OtherFloatString,
  ValueRepresentation::OtherLongString,
  ValueRepresentation::OtherVeryLongString,
  ValueRepresentation::OtherWordString,
  ValueRepresentation::PersonName,
  ValueRepresentation::Sequence,
  ValueRepresentation::ShortString,
  ValueRepresentation::SignedLong,
  ValueRepresentation::SignedShort,
  ValueRepresentation::ShortText,
  ValueRepresentation::SignedVeryLong,
  ValueRepresentation::Time,
  ValueRepresentation::UnlimitedCharacters,
  ValueRepresentation::UniqueIdentifier,
  ValueRepresentation::UnsignedLong,
  ValueRepresentation::Unknown,
  ValueRepresentation::UniversalResourceIdentifier,
  ValueRepresentation::UnsignedShort,
  ValueRepresentation::UnlimitedText,
  ValueRepresentation::UnsignedVeryLong,
];

impl ValueRepresentation {
  /// Returns the two-character code for a VR, e.g. `"SQ"`.
  ///
  pub fn to_str(&self) -> &'static str {
    match self {
      Self::ApplicationEntity => "AE",
      Self::AgeString => "AS",
      Self::AttributeTag => "AT",
      Self::CodeString => "CS",
      Self::Date => "DA",
      Self::DecimalString => "DS",
      Self::DateTime => "DT",
      Self::FloatingPointDouble => "FD",
      Self::FloatingPointSingle => "FL",
      Self::IntegerString => "IS",
      Self::LongString => "LO",
      Self::LongText => "LT",
      Self::OtherByteString => "OB",
      Self::OtherDoubleString => "OD",
      Self::OtherFloatString => "OF",
      Self::OtherLongString => "OL",
      Self::OtherVeryLongString => "OV",
      Self::OtherWordString => "OW",
      Self::PersonName => "PN",
      Self::Sequence => "SQ",
      Self::ShortString => "SH",
      Self::SignedLong => "SL",
      Self::SignedShort => "SS",
      Self::ShortText => "ST",
      Self::SignedVeryLong => "SV",
      Self::Time => "TM",
      Self::UnlimitedCharacters => "UC",
      Self::UniqueIdentifier => "UI",
      Self::UnsignedLong => "UL",
      Self::Unknown => "UN",
      Self::UniversalResourceIdentifier => "UR",
      Self::UnsignedShort => "US",
      Self::UnlimitedText => "UT",
      Self::UnsignedVeryLong => "UV",
    }
  }

  /// Parses a two-character VR code, e.g. `b"SQ"`. Returns an error if the
  /// bytes are not a recognized VR.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn from_bytes(bytes: &[u8]) -> Result<Self, ()> {
    ALL
      .iter()
      .find(|vr| vr.to_str().as_bytes() == bytes)
      .copied()
      .ok_or(())
  }

  /// Returns whether a VR stores its value as text.
  ///
  pub fn is_string(&self) -> bool {
    matches!(
      self,
      Self::ApplicationEntity
        | Self::AgeString
        | Self::CodeString
        | Self::Date
        | Self::DecimalString
        | Self::DateTime
        | Self::IntegerString
        | Self::LongString
        | Self::LongText
        | Self::PersonName
        | Self::ShortString
        | Self::ShortText
        | Self::Time
        | Self::UnlimitedCharacters
        | Self::UniqueIdentifier
        | Self::UniversalResourceIdentifier
        | Self::UnlimitedText
    )
  }

  /// Returns the size of the value length field that follows this VR when it
  /// is serialized explicitly.
  ///
  /// Ref: PS3.5 7.1.2.
  ///
  pub fn value_length_size(&self) -> ValueLengthSize {
    match self {
      Self::OtherByteString
      | Self::OtherDoubleString
      | Self::OtherFloatString
      | Self::OtherLongString
      | Self::OtherVeryLongString
      | Self::OtherWordString
      | Self::Sequence
      | Self::SignedVeryLong
      | Self::UnlimitedCharacters
      | Self::Unknown
      | Self::UniversalResourceIdentifier
      | Self::UnlimitedText
      | Self::UnsignedVeryLong => ValueLengthSize::U32,

      _ => ValueLengthSize::U16,
    }
  }

  /// Returns the size in bytes of each item in a value of this VR when it holds
  /// fixed-size binary numbers. This is the unit that has its byte order
  /// swapped when converting between endiannesses. Returns `None` for VRs that
  /// don't hold fixed-size numbers.
  ///
  pub fn item_size(&self) -> Option<usize> {
    match self {
      Self::AttributeTag
      | Self::OtherWordString
      | Self::SignedShort
      | Self::UnsignedShort => Some(2),

      Self::FloatingPointSingle
      | Self::OtherFloatString
      | Self::OtherLongString
      | Self::SignedLong
      | Self::UnsignedLong => Some(4),

      Self::FloatingPointDouble
      | Self::OtherDoubleString
      | Self::OtherVeryLongString
      | Self::SignedVeryLong
      | Self::UnsignedVeryLong => Some(8),

      _ => None,
    }
  }
}

impl core::fmt::Display for ValueRepresentation {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    f.write_str(self.to_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_bytes_test() {
    for vr in ALL {
      assert_eq!(
        ValueRepresentation::from_bytes(vr.to_str().as_bytes()),
        Ok(vr)
      );
    }

    assert_eq!(ValueRepresentation::from_bytes(b"XY"), Err(()));
    assert_eq!(ValueRepresentation::from_bytes(b"sq"), Err(()));
    assert_eq!(ValueRepresentation::from_bytes(b"S"), Err(()));
  }

  #[test]
  fn value_length_size_test() {
    assert_eq!(
      ValueRepresentation::Sequence.value_length_size(),
      ValueLengthSize::U32
    );
    assert_eq!(
      ValueRepresentation::UnsignedShort.value_length_size(),
      ValueLengthSize::U16
    );
    assert_eq!(ValueLengthSize::U16.max_length(), 0xFFFF);
  }

  #[test]
  fn is_string_test() {
    assert!(ValueRepresentation::PersonName.is_string());
    assert!(!ValueRepresentation::UnsignedShort.is_string());
    assert!(!ValueRepresentation::Unknown.is_string());
  }
}
