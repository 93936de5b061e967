//! A data element tag, defined as a 16-bit `group` value and a 16-bit `element`
//! value.

/// A data element tag that is defined by `group` and `element` values, each of
/// which is a 16-bit unsigned integer.
///
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DataElementTag {
  pub group: u16,
  pub element: u16,
}

impl DataElementTag {
  /// The zero data element tag, i.e. `(0000,0000)`.
  ///
  pub const ZERO: Self = Self::new(0, 0);

  /// Creates a new data element tag from a group and element.
  ///
  pub const fn new(group: u16, element: u16) -> Self {
    Self { group, element }
  }

  /// Returns whether the tag is for a group length data element, i.e. it has
  /// an element of 0x0000.
  ///
  pub fn is_group_length(&self) -> bool {
    self.element == 0x0000
  }

  /// Creates a tag from a 32-bit integer where the group is in the high 16
  /// bits and the element is in the low 16 bits.
  ///
  pub fn from_int(value: u32) -> Self {
    Self::new((value >> 16) as u16, (value & 0xFFFF) as u16)
  }

  /// Formats a tag as an 8-character uppercase hexadecimal string, e.g.
  /// `"0010ABCD"`.
  ///
  pub fn to_hex_string(&self) -> String {
    format!("{:04X}{:04X}", self.group, self.element)
  }

  /// Parses an 8-character hexadecimal string into a tag. The string may
  /// optionally be in the `(GGGG,EEEE)` form, and is not case sensitive.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn from_hex_string(s: &str) -> Result<Self, ()> {
    let s = s
      .strip_prefix('(')
      .and_then(|s| s.strip_suffix(')'))
      .map(|s| s.replacen(',', "", 1))
      .unwrap_or_else(|| s.to_string());

    if s.len() != 8 || !s.bytes().all(|c| c.is_ascii_hexdigit()) {
      return Err(());
    }

    u32::from_str_radix(&s, 16)
      .map(Self::from_int)
      .map_err(|_| ())
  }
}

impl core::fmt::Display for DataElementTag {
  /// Formats a tag in the conventional `(GGGG,EEEE)` form.
  ///
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    write!(f, "({:04X},{:04X})", self.group, self.element)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn to_hex_string_test() {
    assert_eq!(DataElementTag::new(0x0010, 0xABCD).to_hex_string(), "0010ABCD");
    assert_eq!(DataElementTag::ZERO.to_hex_string(), "00000000");
  }

  #[test]
  fn from_hex_string_test() {
    assert_eq!(
      DataElementTag::from_hex_string("0010abcd"),
      Ok(DataElementTag::new(0x0010, 0xABCD))
    );

    assert_eq!(
      DataElementTag::from_hex_string("(7FE0,0010)"),
      Ok(DataElementTag::new(0x7FE0, 0x0010))
    );

    assert_eq!(DataElementTag::from_hex_string("0010ABC"), Err(()));
    assert_eq!(DataElementTag::from_hex_string("+010ABCD"), Err(()));
    assert_eq!(DataElementTag::from_hex_string("x0010ABCD"), Err(()));
  }

  #[test]
  fn is_group_length_test() {
    assert!(DataElementTag::new(0x0002, 0x0000).is_group_length());
    assert!(!DataElementTag::new(0x0002, 0x0010).is_group_length());
  }

  #[test]
  fn display_test() {
    assert_eq!(
      DataElementTag::new(0x0008, 0x103E).to_string(),
      "(0008,103E)"
    );
  }

  #[test]
  fn ordering_test() {
    assert!(DataElementTag::new(1, 0xFFFF) < DataElementTag::new(2, 0));
    assert!(DataElementTag::new(2, 1) > DataElementTag::new(2, 0));
  }
}
