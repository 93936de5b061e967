#[cfg(test)]
mod tests {
  use std::io::Write;

  use dcmpeek_core::{
    DataElementTag, ValueRepresentation, dictionary, transfer_syntax,
    value_representation::ValueLengthSize,
  };
  use dcmpeek_inspect::{DisplayRecord, InspectionState, deconstruct};
  use dcmpeek_p10::P10ReadConfig;

  use crate::inspect_json;

  /// Builds DICOM P10 bytes one data element at a time using explicit VR
  /// little endian encoding.
  ///
  #[derive(Default)]
  struct P10Builder {
    bytes: Vec<u8>,
  }

  impl P10Builder {
    fn header(mut self) -> Self {
      self.bytes.extend([0u8; 128]);
      self.bytes.extend(b"DICM");
      self
    }

    fn element(
      mut self,
      tag: DataElementTag,
      vr: ValueRepresentation,
      value: &[u8],
    ) -> Self {
      let mut value = value.to_vec();
      if value.len() % 2 == 1 {
        value.push(if vr == ValueRepresentation::UniqueIdentifier {
          0
        } else {
          b' '
        });
      }

      self.bytes.extend(tag.group.to_le_bytes());
      self.bytes.extend(tag.element.to_le_bytes());
      self.bytes.extend(vr.to_str().as_bytes());

      match vr.value_length_size() {
        ValueLengthSize::U16 => {
          self.bytes.extend((value.len() as u16).to_le_bytes())
        }
        ValueLengthSize::U32 => {
          self.bytes.extend([0, 0]);
          self.bytes.extend((value.len() as u32).to_le_bytes());
        }
      }

      self.bytes.extend(value);
      self
    }

    fn raw(mut self, bytes: &[u8]) -> Self {
      self.bytes.extend(bytes);
      self
    }

    fn file_meta_information(self, transfer_syntax_uid: &str) -> Self {
      let fmi = P10Builder::default().element(
        dictionary::TRANSFER_SYNTAX_UID.tag,
        ValueRepresentation::UniqueIdentifier,
        transfer_syntax_uid.as_bytes(),
      );

      self
        .element(
          dictionary::FILE_META_INFORMATION_GROUP_LENGTH.tag,
          ValueRepresentation::UnsignedLong,
          &(fmi.bytes.len() as u32).to_le_bytes(),
        )
        .raw(&fmi.bytes)
    }

    fn to_json(&self) -> String {
      serde_json::to_string(&deconstruct(&self.bytes)).unwrap()
    }
  }

  fn record(tag: &str, name: &str, value: &str) -> DisplayRecord {
    DisplayRecord::new(tag.to_string(), name.to_string(), value.to_string())
  }

  fn sequence_bytes() -> Vec<u8> {
    let mut bytes = vec![];

    // Undefined length sequence holding one undefined length item
    bytes.extend([0x40, 0x00, 0x30, 0xA7, b'S', b'Q', 0, 0]);
    bytes.extend([0xFF; 4]);
    bytes.extend([0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF]);
    bytes.extend(
      P10Builder::default()
        .element(
          DataElementTag::new(0x0040, 0xA040),
          ValueRepresentation::CodeString,
          b"TEXT",
        )
        .bytes,
    );
    bytes.extend([0xFE, 0xFF, 0x0D, 0xE0, 0, 0, 0, 0]);
    bytes.extend([0xFE, 0xFF, 0xDD, 0xE0, 0, 0, 0, 0]);

    bytes
  }

  fn sample_p10() -> P10Builder {
    P10Builder::default()
      .header()
      .file_meta_information(transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN.uid)
      .element(
        dictionary::MODALITY.tag,
        ValueRepresentation::CodeString,
        b"MR",
      )
      .element(
        dictionary::PATIENTS_NAME.tag,
        ValueRepresentation::PersonName,
        b"Doe^Jane",
      )
      .element(
        dictionary::PATIENT_ID.tag,
        ValueRepresentation::LongString,
        b"",
      )
      .element(
        DataElementTag::new(0x0025, 0x1011),
        ValueRepresentation::LongString,
        b"Downtown",
      )
      .element(
        DataElementTag::new(0x0029, 0x1001),
        ValueRepresentation::OtherByteString,
        &[1, 2, 3, 4],
      )
      .element(
        dictionary::ROWS.tag,
        ValueRepresentation::UnsignedShort,
        &256u16.to_le_bytes(),
      )
      .raw(&sequence_bytes())
  }

  #[test]
  fn inspect_explicit_vr_little_endian_test() {
    let state =
      inspect_json(&sample_p10().to_json(), &P10ReadConfig::default());

    assert_eq!(state.warning, None);
    assert_eq!(state.error, None);
    assert_eq!(
      state.records,
      vec![
        record("00020000", "File Meta Information Group Length", "28"),
        record("00020010", "Transfer Syntax UID", "1.2.840.10008.1.2.1"),
        record("00080060", "Modality", "MR"),
        record("00100010", "Patient's Name", "Doe^Jane"),
        record("00100020", "Patient ID", "N/A"),
        record("00251011", "Prenuvo Clinic Name", "Downtown"),
        record("00291001", "Unknown", "Unable to read value"),
        record("00280010", "Rows", "256"),
        record("0040A730", "Content Sequence", "Sequence"),
      ]
    );
  }

  #[test]
  fn inspect_object_json_test() {
    let samples = deconstruct(&sample_p10().bytes);

    let object: serde_json::Map<String, serde_json::Value> = samples
      .iter()
      .enumerate()
      .rev()
      .map(|(i, sample)| (i.to_string(), serde_json::Value::from(*sample)))
      .collect();

    let text = serde_json::to_string(&object).unwrap();

    assert_eq!(
      inspect_json(&text, &P10ReadConfig::default()),
      inspect_json(&sample_p10().to_json(), &P10ReadConfig::default())
    );
  }

  #[test]
  fn inspect_implicit_vr_without_header_test() {
    let mut bytes = vec![];
    bytes.extend([0x10, 0x00, 0x20, 0x00, 4, 0, 0, 0]);
    bytes.extend(b"1234");
    bytes.extend([0x28, 0x00, 0x11, 0x00, 2, 0, 0, 0, 0x00, 0x02]);

    let text = serde_json::to_string(&deconstruct(&bytes)).unwrap();

    let state = inspect_json(&text, &P10ReadConfig::default());

    assert_eq!(
      state.records,
      vec![
        record("00100020", "Patient ID", "1234"),
        record("00280011", "Columns", "512"),
      ]
    );
  }

  #[test]
  fn inspect_deflated_test() {
    let data_set = P10Builder::default()
      .element(
        dictionary::PATIENTS_SEX.tag,
        ValueRepresentation::CodeString,
        b"F",
      )
      .bytes;

    let mut encoder = flate2::write::DeflateEncoder::new(
      Vec::new(),
      flate2::Compression::default(),
    );
    encoder.write_all(&data_set).unwrap();

    let p10 = P10Builder::default()
      .header()
      .file_meta_information(
        transfer_syntax::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN.uid,
      )
      .raw(&encoder.finish().unwrap());

    let state = inspect_json(&p10.to_json(), &P10ReadConfig::default());

    assert_eq!(
      state.records.last(),
      Some(&record("00100040", "Patient's Sex", "F"))
    );
  }

  #[test]
  fn inspect_empty_samples_test() {
    assert_eq!(
      inspect_json("[]", &P10ReadConfig::default()),
      InspectionState {
        records: vec![],
        warning: Some(
          "The DICOM data contains only header information. No DICOM tags \
           are available."
            .to_string()
        ),
        error: None,
      }
    );
  }

  #[test]
  fn inspect_invalid_json_test() {
    assert_eq!(
      inspect_json("[1, 2", &P10ReadConfig::default()).error,
      Some(
        "Failed to parse JSON input. Please ensure you have entered valid \
         JSON data."
          .to_string()
      )
    );
  }

  #[test]
  fn inspect_truncated_data_test() {
    // Cut the data part way through the value of Patient's Name
    let mut bytes = sample_p10().bytes;
    bytes.truncate(194);

    let text = serde_json::to_string(&deconstruct(&bytes)).unwrap();
    let state = inspect_json(&text, &P10ReadConfig::default());

    assert!(state.records.is_empty());
    assert!(
      state
        .error
        .unwrap()
        .starts_with("Error parsing DICOM data: Failed to parse DICOM data: ")
    );
  }

  #[test]
  fn inspect_require_dicm_prefix_test() {
    let text = serde_json::to_string(&[0x00200010, 2, 0x3131]).unwrap();

    let config = P10ReadConfig::default().require_dicm_prefix(true);

    assert_eq!(
      inspect_json(&text, &config).error,
      Some(
        "Error parsing DICOM data: Failed to parse DICOM data: 'DICM' prefix \
         is not present"
          .to_string()
      )
    );
  }

  #[test]
  fn inspect_many_data_elements_test() {
    const ELEMENT_COUNT: u32 = 40_000;

    // Zero-length implicit VR private data elements, each one a tag sample
    // followed by a length sample
    let samples: Vec<i32> = (0..ELEMENT_COUNT)
      .flat_map(|i| [(((0x1000 + i) << 16) | 0x0009) as i32, 0])
      .collect();

    let started_at = std::time::Instant::now();

    let text = serde_json::to_string(&samples).unwrap();
    let state = inspect_json(&text, &P10ReadConfig::default());

    let elapsed = started_at.elapsed();

    assert_eq!(state.error, None);
    assert_eq!(state.records.len(), ELEMENT_COUNT as usize);
    assert_eq!(
      state.records.last(),
      Some(&DisplayRecord::new(
        "0009AC3F".to_string(),
        dictionary::UNKNOWN_NAME.to_string(),
        "N/A".to_string(),
      ))
    );
    assert!(
      elapsed < std::time::Duration::from_secs(10),
      "Inspecting {} data elements took {:?}",
      ELEMENT_COUNT,
      elapsed
    );
  }
}
