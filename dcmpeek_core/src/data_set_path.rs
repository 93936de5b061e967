//! Locations of data elements and sequence items inside a decoded data set,
//! used to give context to read errors.

use crate::{DataElementTag, dictionary};

/// The location of a data element or sequence item, made up of alternating
/// data element and sequence item entries starting at the root data set.
///
/// As a string the entries are separated by forward slashes, e.g.
/// `"0040A730/[1]/0040A043"` is the *'(0040,A043) Concept Name Code Sequence'*
/// in the second item of the *'(0040,A730) Content Sequence'*. The empty path
/// is the root data set.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSetPath(Vec<PathEntry>);

#[derive(Clone, Copy, Debug, PartialEq)]
enum PathEntry {
  DataElement { tag: DataElementTag },
  SequenceItem { index: usize },
}

impl DataSetPath {
  pub fn new() -> Self {
    Self(vec![])
  }

  /// Constructs a path to a data element in the root data set.
  ///
  pub fn new_with_data_element(tag: DataElementTag) -> Self {
    Self(vec![PathEntry::DataElement { tag }])
  }

  #[allow(clippy::len_without_is_empty)]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Returns how many sequence items deep the path is nested.
  ///
  pub fn sequence_item_count(&self) -> usize {
    self
      .0
      .iter()
      .filter(|entry| matches!(entry, PathEntry::SequenceItem { .. }))
      .count()
  }

  /// Appends a data element. The path must be empty or end in a sequence
  /// item.
  ///
  pub fn add_data_element(
    &mut self,
    tag: DataElementTag,
  ) -> Result<(), String> {
    match self.0.last() {
      None | Some(PathEntry::SequenceItem { .. }) => {
        self.0.push(PathEntry::DataElement { tag });
        Ok(())
      }

      Some(PathEntry::DataElement { .. }) => Err(format!(
        "Data element {} can't follow another data element",
        tag.to_hex_string()
      )),
    }
  }

  /// Appends a sequence item. The path must end in a data element.
  ///
  pub fn add_sequence_item(&mut self, index: usize) -> Result<(), String> {
    match self.0.last() {
      Some(PathEntry::DataElement { .. }) => {
        self.0.push(PathEntry::SequenceItem { index });
        Ok(())
      }

      _ => Err(format!("Sequence item [{}] must follow a data element", index)),
    }
  }

  pub fn pop(&mut self) -> Result<(), String> {
    self
      .0
      .pop()
      .map(|_| ())
      .ok_or_else(|| "Data set path is empty".to_string())
  }

  /// Formats the path for error output, naming each data element, e.g.
  /// `"(0040,A730) Content Sequence / Item 0"`.
  ///
  pub fn to_detailed_string(&self) -> String {
    self
      .0
      .iter()
      .map(|entry| match entry {
        PathEntry::DataElement { tag } => dictionary::tag_with_name(*tag),
        PathEntry::SequenceItem { index } => format!("Item {}", index),
      })
      .collect::<Vec<_>>()
      .join(" / ")
  }
}

impl core::fmt::Display for DataSetPath {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    for (i, entry) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str("/")?;
      }

      match entry {
        PathEntry::DataElement { tag } => f.write_str(&tag.to_hex_string())?,
        PathEntry::SequenceItem { index } => write!(f, "[{}]", index)?,
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const CONTENT_SEQUENCE: DataElementTag = DataElementTag::new(0x0040, 0xA730);
  const CONCEPT_NAME_CODE_SEQUENCE: DataElementTag =
    DataElementTag::new(0x0040, 0xA043);

  #[test]
  fn nested_path_test() {
    let mut path = DataSetPath::new();
    assert_eq!(path.to_string(), "");

    path.add_data_element(CONTENT_SEQUENCE).unwrap();
    path.add_sequence_item(1).unwrap();
    path.add_data_element(CONCEPT_NAME_CODE_SEQUENCE).unwrap();

    assert_eq!(path.to_string(), "0040A730/[1]/0040A043");
    assert_eq!(path.len(), 3);
    assert_eq!(path.sequence_item_count(), 1);

    path.pop().unwrap();
    path.pop().unwrap();
    assert_eq!(path, DataSetPath::new_with_data_element(CONTENT_SEQUENCE));
  }

  #[test]
  fn invalid_entry_test() {
    let mut path = DataSetPath::new();

    assert_eq!(
      path.add_sequence_item(0),
      Err("Sequence item [0] must follow a data element".to_string())
    );

    path.add_data_element(CONTENT_SEQUENCE).unwrap();

    assert_eq!(
      path.add_data_element(CONCEPT_NAME_CODE_SEQUENCE),
      Err("Data element 0040A043 can't follow another data element".to_string())
    );
  }

  #[test]
  fn to_detailed_string_test() {
    let mut path = DataSetPath::new_with_data_element(CONTENT_SEQUENCE);
    path.add_sequence_item(0).unwrap();

    assert_eq!(
      path.to_detailed_string(),
      "(0040,A730) Content Sequence / Item 0"
    );
  }

  #[test]
  fn pop_test() {
    let mut path = DataSetPath::new_with_data_element(DataElementTag::ZERO);

    assert_eq!(path.pop(), Ok(()));
    assert_eq!(path.pop(), Err("Data set path is empty".to_string()));
  }
}
