use std::borrow::Cow;

/// A byte stream over a complete in-memory buffer that allows its data to be
/// read and peeked in order.
///
/// The unread bytes can optionally be passed through zlib inflate, after which
/// reads are served from the inflated data.
///
#[derive(Debug)]
pub struct ByteStream<'a> {
  data: Cow<'a, [u8]>,
  position: usize,
  base_offset: u64,
}

#[derive(Debug, PartialEq)]
pub enum ByteStreamError {
  /// Data was not read because it would go past the end of the byte stream.
  DataEnd,

  /// The bytes passed to zlib inflate were not valid zlib data.
  ZlibDataError,

  /// Zlib inflate produced more data than the configured maximum.
  InflateLimitExceeded,
}

/// Zlib data is inflated in chunks of this size, and the inflated size limit is
/// checked after each chunk.
///
const ZLIB_INFLATE_CHUNK_SIZE: usize = 64 * 1024;

impl<'a> ByteStream<'a> {
  /// Creates a new byte stream that reads the given bytes.
  ///
  pub fn new(data: &'a [u8]) -> Self {
    Self {
      data: Cow::Borrowed(data),
      position: 0,
      base_offset: 0,
    }
  }

  /// Returns the total number of bytes that have been read out of the byte
  /// stream. Once zlib inflate is active this counts the compressed bytes that
  /// preceded it plus the inflated bytes read since.
  ///
  pub fn bytes_read(&self) -> u64 {
    self.base_offset + self.position as u64
  }

  /// Returns the number of bytes that remain unread.
  ///
  pub fn remaining(&self) -> usize {
    self.data.len() - self.position
  }

  pub fn is_fully_consumed(&self) -> bool {
    self.remaining() == 0
  }

  /// Returns whether the unread bytes are a short run of zero bytes too small
  /// to hold a data element header. Such bytes are left behind when a buffer
  /// is padded out to a whole number of 32-bit words.
  ///
  pub fn is_trailing_padding(&self) -> bool {
    let rest = &self.data[self.position..];

    !rest.is_empty() && rest.len() < 8 && rest.iter().all(|b| *b == 0)
  }

  /// Reads bytes out of the byte stream.
  ///
  pub fn read(
    &mut self,
    byte_count: usize,
  ) -> Result<Vec<u8>, ByteStreamError> {
    if byte_count > self.remaining() {
      return Err(ByteStreamError::DataEnd);
    }

    let start = self.position;
    self.position += byte_count;

    Ok(self.data[start..self.position].to_vec())
  }

  /// Peeks at the next bytes that will be read out of the byte stream without
  /// consuming them.
  ///
  pub fn peek(&self, byte_count: usize) -> Result<&[u8], ByteStreamError> {
    if byte_count > self.remaining() {
      return Err(ByteStreamError::DataEnd);
    }

    Ok(&self.data[self.position..self.position + byte_count])
  }

  /// Passes all unread bytes through zlib inflate, and makes the inflated
  /// bytes available to subsequent reads. Any bytes that follow the end of
  /// the zlib stream are discarded.
  ///
  /// This is used when reading DICOM P10 data that uses a deflated transfer
  /// syntax.
  ///
  pub fn start_zlib_inflate(
    &mut self,
    max_inflated_size: u64,
  ) -> Result<(), ByteStreamError> {
    let input = &self.data[self.position..];

    let mut zlib_stream = flate2::Decompress::new(false);
    let mut inflated = Vec::new();

    loop {
      let initial_total_in = zlib_stream.total_in();
      let initial_total_out = zlib_stream.total_out();

      let mut output_buffer = vec![0u8; ZLIB_INFLATE_CHUNK_SIZE];

      let status = zlib_stream
        .decompress(
          &input[initial_total_in as usize..],
          &mut output_buffer,
          flate2::FlushDecompress::None,
        )
        .map_err(|_| ByteStreamError::ZlibDataError)?;

      let bytes_consumed = zlib_stream.total_in() - initial_total_in;
      let bytes_produced = zlib_stream.total_out() - initial_total_out;

      inflated.extend_from_slice(&output_buffer[..bytes_produced as usize]);

      if inflated.len() as u64 > max_inflated_size {
        return Err(ByteStreamError::InflateLimitExceeded);
      }

      if status == flate2::Status::StreamEnd {
        break;
      }

      // A truncated zlib stream stops making progress before its end, in which
      // case the data inflated so far is kept
      if bytes_consumed == 0 && bytes_produced == 0 {
        break;
      }
    }

    self.base_offset = self.bytes_read();
    self.data = Cow::Owned(inflated);
    self.position = 0;

    Ok(())
  }
}
