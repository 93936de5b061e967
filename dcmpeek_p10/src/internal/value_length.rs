/// The value length of a data element, which is either a defined number of
/// bytes or undefined. An undefined length is encoded as `0xFFFFFFFF` and is
/// used by sequences, sequence items, and encapsulated pixel data.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueLength {
  Defined { length: u32 },
  Undefined,
}

impl ValueLength {
  pub const ZERO: ValueLength = ValueLength::Defined { length: 0 };

  /// Creates a value length from its serialized 32-bit value.
  ///
  pub fn new(length: u32) -> Self {
    if length == 0xFFFF_FFFF {
      Self::Undefined
    } else {
      Self::Defined { length }
    }
  }

  /// Returns the defined length, or `None` if the length is undefined.
  ///
  pub fn defined(&self) -> Option<u32> {
    match self {
      Self::Defined { length } => Some(*length),
      Self::Undefined => None,
    }
  }
}

impl core::fmt::Display for ValueLength {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    match self {
      Self::Defined { length } => write!(f, "{} bytes", length),
      Self::Undefined => write!(f, "UNDEFINED"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_test() {
    assert_eq!(ValueLength::new(0), ValueLength::ZERO);
    assert_eq!(ValueLength::new(0xFFFF_FFFF), ValueLength::Undefined);
    assert_eq!(ValueLength::new(12).defined(), Some(12));
    assert_eq!(ValueLength::Undefined.defined(), None);
  }
}
