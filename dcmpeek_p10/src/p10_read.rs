//! Reads a complete in-memory buffer of DICOM P10 data into a
//! [`P10DataSet`].
//!
//! The File Preamble and 'DICM' prefix are optional, as is the File Meta
//! Information. When there is no File Meta Information the data set is read
//! using the transfer syntax set in the [`P10ReadConfig`].
//!
//! Sequences and sequence items of both defined and undefined length are read
//! recursively, and encapsulated pixel data is read as a list of fragments.
//! Data that is truncated on a data element boundary is read without error.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use dcmpeek_core::{
  DataElementTag, DataSetPath, TagDictionary, TransferSyntax,
  ValueRepresentation, dictionary,
  transfer_syntax::{self, Endianness, VrSerialization},
  utils,
  value_representation::ValueLengthSize,
};

use crate::internal::byte_stream::{ByteStream, ByteStreamError};
use crate::internal::data_element_header::DataElementHeader;
use crate::internal::value_length::ValueLength;
use crate::{P10DataSet, P10Element, P10Error, P10ReadConfig, P10Value};

/// A read context holds the state of an in-progress read of DICOM P10 data.
///
#[derive(Debug)]
pub struct P10ReadContext<'a> {
  config: P10ReadConfig,
  stream: ByteStream<'a>,
  transfer_syntax: &'static TransferSyntax,
  path: DataSetPath,
}

/// Specifies where the data set currently being read ends.
///
#[derive(Clone, Copy, Debug, PartialEq)]
enum DataSetEnd {
  /// The root data set ends at the end of the data.
  Root,

  /// A sequence item of defined length ends at this offset.
  Offset(u64),

  /// A sequence item of undefined length ends at an item delimitation item.
  ItemDelimiter,
}

impl<'a> P10ReadContext<'a> {
  /// Creates a new read context for reading the given DICOM P10 data.
  ///
  pub fn new(bytes: &'a [u8], config: Option<P10ReadConfig>) -> Self {
    let config = config.unwrap_or_default();

    Self {
      config,
      stream: ByteStream::new(bytes),
      transfer_syntax: config.default_transfer_syntax,
      path: DataSetPath::new(),
    }
  }

  /// Returns the transfer syntax for a read context. This is the default
  /// transfer syntax from the read config until one is read from the File
  /// Meta Information.
  ///
  pub fn transfer_syntax(&self) -> &'static TransferSyntax {
    self.transfer_syntax
  }

  /// Reads the DICOM P10 data into a data set. Data elements from the File
  /// Meta Information come first, followed by those in the main data set.
  ///
  pub fn read(&mut self) -> Result<P10DataSet, P10Error> {
    let mut data_set = P10DataSet::new();

    self.read_file_preamble_and_dicm_prefix()?;
    self.read_file_meta_information(&mut data_set)?;

    // If the transfer syntax is deflated then all data following the File
    // Meta Information needs to be passed through zlib inflate
    if self.transfer_syntax.is_deflated {
      self
        .stream
        .start_zlib_inflate(self.config.max_inflated_size)
        .map_err(|e| {
          self.map_byte_stream_error(
            e,
            "Starting zlib decompression for deflated transfer syntax",
          )
        })?;
    }

    self.read_data_set(&mut data_set, DataSetEnd::Root, false)?;

    Ok(data_set)
  }

  /// Skips over the 128-byte File Preamble and the 'DICM' prefix that follows
  /// it. If the 'DICM' prefix isn't present then the data is assumed to start
  /// directly with the File Meta Information or the main data set.
  ///
  fn read_file_preamble_and_dicm_prefix(&mut self) -> Result<(), P10Error> {
    let has_dicm_prefix = matches!(
      self.stream.peek(132),
      Ok(data) if data[128..132] == *b"DICM"
    );

    if has_dicm_prefix {
      self
        .stream
        .read(132)
        .map_err(|e| self.map_byte_stream_error(e, "Reading file header"))?;
    } else if self.config.require_dicm_prefix {
      return Err(P10Error::DicmPrefixNotPresent);
    }

    Ok(())
  }

  /// Reads the File Meta Information into the data set. If there is a
  /// *'(0002,0000) File Meta Information Group Length'* data element present
  /// then it is used to specify where the File Meta Information ends. If it is
  /// not present then data elements are read until one with a group other
  /// than 0x0002 is encountered.
  ///
  /// The File Meta Information is always encoded as explicit VR little endian.
  ///
  fn read_file_meta_information(
    &mut self,
    data_set: &mut P10DataSet,
  ) -> Result<(), P10Error> {
    let starts_at = self.stream.bytes_read();
    let mut ends_at: Option<u64> = None;

    loop {
      match ends_at {
        Some(ends_at) => {
          if self.stream.bytes_read() >= ends_at {
            break;
          }
        }

        None => {
          if self.stream.is_fully_consumed()
            || (self.config.ignore_trailing_padding
              && self.stream.is_trailing_padding())
          {
            break;
          }
        }
      }

      let offset = self.stream.bytes_read();

      // Peek the next 8 bytes that contain the group, element, VR, and two
      // bytes that contain the value length if the VR has a 16-bit length
      // field
      let data = self.stream.peek(8).map_err(|e| {
        self.map_byte_stream_error(e, "Reading File Meta Information")
      })?;

      let tag = DataElementTag::new(
        LittleEndian::read_u16(&data[0..2]),
        LittleEndian::read_u16(&data[2..4]),
      );
      let vr_bytes = [data[4], data[5]];
      let short_length = LittleEndian::read_u16(&data[6..8]);

      if tag.group != 0x0002 {
        // If the FMI length isn't known then this is the end of the File Meta
        // Information
        if ends_at.is_none() {
          break;
        }

        return Err(P10Error::DataInvalid {
          when: "Reading File Meta Information".to_string(),
          details: "Data element in File Meta Information does not have the \
            group 0x0002"
            .to_string(),
          path: DataSetPath::new_with_data_element(tag),
          offset,
        });
      }

      let vr = ValueRepresentation::from_bytes(&vr_bytes).map_err(|_| {
        P10Error::DataInvalid {
          when: "Reading File Meta Information".to_string(),
          details: "Data element has invalid VR".to_string(),
          path: DataSetPath::new_with_data_element(tag),
          offset,
        }
      })?;

      if vr == ValueRepresentation::Sequence {
        return Err(P10Error::DataInvalid {
          when: "Reading File Meta Information".to_string(),
          details: "Data element in File Meta Information is a sequence"
            .to_string(),
          path: DataSetPath::new_with_data_element(tag),
          offset,
        });
      }

      let (header_size, length) = match vr.value_length_size() {
        ValueLengthSize::U16 => (8, u32::from(short_length)),
        ValueLengthSize::U32 => {
          let data = self.stream.peek(12).map_err(|e| {
            self.map_byte_stream_error(e, "Reading File Meta Information")
          })?;

          (12, LittleEndian::read_u32(&data[8..12]))
        }
      };

      let data = self
        .stream
        .read(header_size + length as usize)
        .map_err(|e| {
          self.map_byte_stream_error(
            e,
            "Reading File Meta Information data element value",
          )
        })?;

      let value = data[header_size..].to_vec();

      if tag == dictionary::FILE_META_INFORMATION_GROUP_LENGTH.tag
        && ends_at.is_none()
        && data_set.is_empty()
      {
        if value.len() != 4 {
          return Err(P10Error::DataInvalid {
            when: "Reading File Meta Information".to_string(),
            details: format!(
              "Group length is invalid: {}",
              utils::inspect_u8_slice(&value, 8)
            ),
            path: DataSetPath::new_with_data_element(tag),
            offset,
          });
        }

        ends_at =
          Some(starts_at + 12 + u64::from(LittleEndian::read_u32(&value)));
      }

      if tag == dictionary::TRANSFER_SYNTAX_UID.tag {
        let uid = String::from_utf8_lossy(&value)
          .trim_end_matches(['\0', ' '])
          .to_string();

        if !uid.is_empty() {
          self.transfer_syntax = TransferSyntax::from_uid(&uid).map_err(
            |_| P10Error::TransferSyntaxNotSupported {
              transfer_syntax_uid: uid.clone(),
            },
          )?;
        }
      }

      data_set.insert(P10Element {
        tag,
        vr,
        length: ValueLength::new(length),
        offset,
        value: P10Value::Bytes(value),
      });
    }

    Ok(())
  }

  /// Reads data elements into a data set until the given end is reached, or
  /// the data is exhausted.
  ///
  fn read_data_set(
    &mut self,
    data_set: &mut P10DataSet,
    end: DataSetEnd,
    implicit_vr_forced: bool,
  ) -> Result<(), P10Error> {
    let mut previous_tag: Option<DataElementTag> = None;

    loop {
      if let DataSetEnd::Offset(ends_at) = end {
        let bytes_read = self.stream.bytes_read();

        if bytes_read == ends_at {
          return Ok(());
        }

        if bytes_read > ends_at {
          return Err(self.data_invalid(
            "Reading sequence item",
            "Data element overruns the end of its item".to_string(),
          ));
        }
      }

      if self.stream.is_fully_consumed() {
        return Ok(());
      }

      if end == DataSetEnd::Root
        && self.config.ignore_trailing_padding
        && self.stream.is_trailing_padding()
      {
        return Ok(());
      }

      let offset = self.stream.bytes_read();
      let header = self.read_data_element_header(implicit_vr_forced)?;

      if header.tag == dictionary::ITEM_DELIMITATION_ITEM.tag {
        if end == DataSetEnd::ItemDelimiter {
          return Ok(());
        }

        return Err(self.data_invalid(
          "Reading data element header",
          "Item delimitation item found outside of an item of undefined length"
            .to_string(),
        ));
      }

      if header.tag == dictionary::SEQUENCE_DELIMITATION_ITEM.tag {
        // Sequence delimiters in the root data set aren't attached to any
        // sequence and are ignored
        if end == DataSetEnd::Root {
          continue;
        }

        return Err(self.data_invalid(
          "Reading data element header",
          "Sequence delimitation item found inside an item".to_string(),
        ));
      }

      if header.tag == dictionary::ITEM.tag {
        return Err(self.data_invalid(
          "Reading data element header",
          "Item found outside of a sequence".to_string(),
        ));
      }

      if self.config.require_ordered_data_elements
        && previous_tag.is_some_and(|previous| header.tag <= previous)
      {
        return Err(self.data_invalid(
          "Reading data element header",
          format!("Data element '{}' is not in ascending order", header),
        ));
      }

      previous_tag = Some(header.tag);

      let element =
        self.read_data_element(header, offset, implicit_vr_forced)?;

      data_set.insert(element);
    }
  }

  /// Reads the value of a data element following its header.
  ///
  fn read_data_element(
    &mut self,
    header: DataElementHeader,
    offset: u64,
    implicit_vr_forced: bool,
  ) -> Result<P10Element, P10Error> {
    self
      .path
      .add_data_element(header.tag)
      .map_err(|details| self.data_invalid("Reading data element", details))?;

    // If the VR is UN (Unknown) then attempt to infer it
    let vr = match header.vr {
      Some(ValueRepresentation::Unknown) | None => {
        self.infer_vr(header.tag, header.length)
      }
      Some(vr) => vr,
    };

    let value = if vr == ValueRepresentation::Sequence {
      // The content of a sequence with an explicit VR of UN is always encoded
      // as implicit VR little endian. Ref: DICOM Correction Proposal CP-246.
      let implicit_vr_forced = implicit_vr_forced
        || header.vr == Some(ValueRepresentation::Unknown);

      P10Value::Sequence(self.read_sequence(header.length, implicit_vr_forced)?)
    } else if header.tag == dictionary::PIXEL_DATA.tag
      && header.length == ValueLength::Undefined
    {
      P10Value::EncapsulatedPixelData(
        self.read_encapsulated_pixel_data(implicit_vr_forced)?,
      )
    } else {
      let length = header.length.defined().ok_or_else(|| {
        self.data_invalid(
          "Reading data element value",
          format!("Data element '{}' has an undefined length", header),
        )
      })?;

      let mut bytes = self.stream.read(length as usize).map_err(|e| {
        self.map_byte_stream_error(e, "Reading data element value")
      })?;

      if self.active_transfer_syntax(implicit_vr_forced).endianness.is_big() {
        swap_endianness(vr, &mut bytes);
      }

      P10Value::Bytes(bytes)
    };

    self
      .path
      .pop()
      .map_err(|details| self.data_invalid("Reading data element", details))?;

    Ok(P10Element {
      tag: header.tag,
      vr,
      length: header.length,
      offset,
      value,
    })
  }

  /// Reads the items of a sequence. A sequence of defined length ends when
  /// its length has been read, and one of undefined length ends at a sequence
  /// delimitation item.
  ///
  fn read_sequence(
    &mut self,
    length: ValueLength,
    implicit_vr_forced: bool,
  ) -> Result<Vec<P10DataSet>, P10Error> {
    if self.path.sequence_item_count() >= self.config.max_sequence_depth {
      return Err(P10Error::MaximumExceeded {
        details: format!(
          "Maximum allowed sequence depth of {} was exceeded",
          self.config.max_sequence_depth
        ),
        path: self.path.clone(),
        offset: self.stream.bytes_read(),
      });
    }

    let ends_at = length
      .defined()
      .map(|length| self.stream.bytes_read() + u64::from(length));

    let mut items = vec![];

    loop {
      if let Some(ends_at) = ends_at {
        let bytes_read = self.stream.bytes_read();

        if bytes_read == ends_at {
          break;
        }

        if bytes_read > ends_at {
          return Err(self.data_invalid(
            "Reading sequence",
            "Sequence item overruns the end of its sequence".to_string(),
          ));
        }
      }

      if self.stream.is_fully_consumed() {
        break;
      }

      let header = self.read_data_element_header(implicit_vr_forced)?;

      if header.tag == dictionary::ITEM.tag {
        self
          .path
          .add_sequence_item(items.len())
          .map_err(|details| self.data_invalid("Reading sequence", details))?;

        let end = match header.length.defined() {
          Some(length) => {
            DataSetEnd::Offset(self.stream.bytes_read() + u64::from(length))
          }
          None => DataSetEnd::ItemDelimiter,
        };

        let mut item = P10DataSet::new();
        self.read_data_set(&mut item, end, implicit_vr_forced)?;

        self
          .path
          .pop()
          .map_err(|details| self.data_invalid("Reading sequence", details))?;

        items.push(item);
      } else if header.tag == dictionary::SEQUENCE_DELIMITATION_ITEM.tag {
        break;
      } else {
        return Err(self.data_invalid(
          "Reading sequence",
          format!("Invalid data element '{}' in sequence", header),
        ));
      }
    }

    Ok(items)
  }

  /// Reads the fragments of encapsulated pixel data, which are stored as
  /// items and end at a sequence delimitation item.
  ///
  fn read_encapsulated_pixel_data(
    &mut self,
    implicit_vr_forced: bool,
  ) -> Result<Vec<Vec<u8>>, P10Error> {
    let mut fragments = vec![];

    loop {
      if self.stream.is_fully_consumed() {
        break;
      }

      let header = self.read_data_element_header(implicit_vr_forced)?;

      match (header.tag, header.length) {
        (tag, ValueLength::Defined { length })
          if tag == dictionary::ITEM.tag =>
        {
          let fragment = self.stream.read(length as usize).map_err(|e| {
            self.map_byte_stream_error(e, "Reading encapsulated pixel data")
          })?;

          fragments.push(fragment);
        }

        (tag, _) if tag == dictionary::SEQUENCE_DELIMITATION_ITEM.tag => break,

        _ => {
          return Err(self.data_invalid(
            "Reading encapsulated pixel data",
            format!("Invalid data element '{}' in pixel data", header),
          ));
        }
      }
    }

    Ok(fragments)
  }

  /// Reads a data element header. Depending on the transfer syntax and the
  /// specific VR (for explicit VR transfer syntaxes), this reads either 8 or 12
  /// bytes in total.
  ///
  fn read_data_element_header(
    &mut self,
    implicit_vr_forced: bool,
  ) -> Result<DataElementHeader, P10Error> {
    let transfer_syntax = self.active_transfer_syntax(implicit_vr_forced);
    let endianness = transfer_syntax.endianness;

    let data = self.stream.peek(4).map_err(|e| {
      self.map_byte_stream_error(e, "Reading data element header")
    })?;

    let tag = DataElementTag::new(
      read_u16(&data[0..2], endianness),
      read_u16(&data[2..4], endianness),
    );

    // File Meta Information data elements aren't allowed in the root of the
    // main data set
    if tag.group == 0x0002 && self.path.len() == 0 {
      return Err(P10Error::DataInvalid {
        when: "Reading data element header".to_string(),
        details: format!(
          "File Meta Information data element '{}' found in the main data set",
          tag
        ),
        path: DataSetPath::new_with_data_element(tag),
        offset: self.stream.bytes_read(),
      });
    }

    // The item and delimitation tags always use implicit VRs
    let is_item_tag = tag == dictionary::ITEM.tag
      || tag == dictionary::ITEM_DELIMITATION_ITEM.tag
      || tag == dictionary::SEQUENCE_DELIMITATION_ITEM.tag;

    if is_item_tag
      || transfer_syntax.vr_serialization == VrSerialization::VrImplicit
    {
      let data = self.stream.read(8).map_err(|e| {
        self.map_byte_stream_error(e, "Reading data element header")
      })?;

      // All tags other than the item and delimitation tags are returned as UN
      // (Unknown) and will have their VR inferred in due course
      let vr = if is_item_tag {
        None
      } else {
        Some(ValueRepresentation::Unknown)
      };

      return Ok(DataElementHeader {
        tag,
        vr,
        length: ValueLength::new(read_u32(&data[4..8], endianness)),
      });
    }

    let data = self.stream.peek(6).map_err(|e| {
      self.map_byte_stream_error(e, "Reading explicit VR data element header")
    })?;

    let vr_bytes = [data[4], data[5]];

    let vr = match ValueRepresentation::from_bytes(&vr_bytes) {
      Ok(vr) => vr,

      // If the VR is two spaces or two NULL characters then treat it as UN,
      // and there will be an attempt to infer it in due course
      Err(()) => match vr_bytes {
        [0x00, 0x00] | [0x20, 0x20] => ValueRepresentation::Unknown,

        _ => {
          return Err(self.data_invalid(
            "Reading data element VR",
            format!(
              "Unrecognized VR {:?} for tag '{}'",
              vr_bytes,
              dictionary::tag_with_name(tag)
            ),
          ));
        }
      },
    };

    // The total size of the header in bytes varies by VR
    let header_size = match vr.value_length_size() {
      ValueLengthSize::U32 => 12,
      ValueLengthSize::U16 => 8,
    };

    let data = self.stream.read(header_size).map_err(|e| {
      self.map_byte_stream_error(e, "Reading explicit VR data element header")
    })?;

    let length = match header_size {
      12 => read_u32(&data[8..12], endianness),
      _ => u32::from(read_u16(&data[6..8], endianness)),
    };

    Ok(DataElementHeader {
      tag,
      vr: Some(vr),
      length: ValueLength::new(length),
    })
  }

  /// Infers the VR of a data element that has an implicit VR, or an explicit
  /// VR of UN. Known tags take their VR from the dictionary, and values that
  /// have an undefined length or start with an item tag are read as
  /// sequences.
  ///
  fn infer_vr(
    &self,
    tag: DataElementTag,
    length: ValueLength,
  ) -> ValueRepresentation {
    if tag == dictionary::PIXEL_DATA.tag {
      return dictionary::PIXEL_DATA.vr;
    }

    if length == ValueLength::Undefined {
      return ValueRepresentation::Sequence;
    }

    if let Some(item) = TagDictionary::standard().find(tag) {
      return item.vr;
    }

    if tag.is_group_length() {
      return ValueRepresentation::UnsignedLong;
    }

    let starts_with_item = matches!(
      self.stream.peek(4),
      Ok(data) if data == [0xFE, 0xFF, 0x00, 0xE0]
    );

    if starts_with_item {
      ValueRepresentation::Sequence
    } else {
      ValueRepresentation::Unknown
    }
  }

  /// Returns the transfer syntax that should be used to decode the current
  /// data. This will always be the transfer syntax specified in the File Meta
  /// Information, except in the case of 'Implicit VR Little Endian' being
  /// forced by an explicit VR of UN (Unknown) that holds a sequence.
  ///
  fn active_transfer_syntax(
    &self,
    implicit_vr_forced: bool,
  ) -> &'static TransferSyntax {
    if implicit_vr_forced {
      &transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN
    } else {
      self.transfer_syntax
    }
  }

  fn data_invalid(&self, when: &str, details: String) -> P10Error {
    P10Error::DataInvalid {
      when: when.to_string(),
      details,
      path: self.path.clone(),
      offset: self.stream.bytes_read(),
    }
  }

  /// Takes an error from the byte stream and maps it through to a P10 error.
  ///
  fn map_byte_stream_error(
    &self,
    error: ByteStreamError,
    when: &str,
  ) -> P10Error {
    let offset = self.stream.bytes_read();

    match error {
      ByteStreamError::DataEnd => P10Error::DataEndedUnexpectedly {
        when: when.to_string(),
        path: self.path.clone(),
        offset,
      },

      ByteStreamError::ZlibDataError => P10Error::DataInvalid {
        when: when.to_string(),
        details: "Zlib data is invalid".to_string(),
        path: self.path.clone(),
        offset,
      },

      ByteStreamError::InflateLimitExceeded => P10Error::MaximumExceeded {
        details: format!(
          "Inflated data exceeds the maximum size of {} bytes",
          self.config.max_inflated_size
        ),
        path: self.path.clone(),
        offset,
      },
    }
  }
}

fn read_u16(bytes: &[u8], endianness: Endianness) -> u16 {
  match endianness {
    Endianness::LittleEndian => LittleEndian::read_u16(bytes),
    Endianness::BigEndian => BigEndian::read_u16(bytes),
  }
}

fn read_u32(bytes: &[u8], endianness: Endianness) -> u32 {
  match endianness {
    Endianness::LittleEndian => LittleEndian::read_u32(bytes),
    Endianness::BigEndian => BigEndian::read_u32(bytes),
  }
}

/// Converts big endian value bytes to little endian in place.
///
fn swap_endianness(vr: ValueRepresentation, bytes: &mut [u8]) {
  if let Some(item_size) = vr.item_size() {
    for item in bytes.chunks_exact_mut(item_size) {
      item.reverse();
    }
  }
}
