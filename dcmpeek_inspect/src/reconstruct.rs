//! Conversion between captured 32-bit integer samples and the bytes they
//! carry.

use byteorder::{ByteOrder, LittleEndian};

/// Rebuilds a byte buffer from signed 32-bit integer samples. Each sample
/// contributes its four bytes in little endian order, so the result is always
/// four times the length of the input.
///
pub fn reconstruct(samples: &[i32]) -> Vec<u8> {
  let mut bytes = vec![0u8; samples.len() * 4];
  LittleEndian::write_i32_into(samples, &mut bytes);

  bytes
}

/// Splits a byte buffer into signed 32-bit little endian integer samples. A
/// trailing partial word is padded with zero bytes.
///
pub fn deconstruct(bytes: &[u8]) -> Vec<i32> {
  bytes
    .chunks(4)
    .map(|chunk| {
      let mut word = [0u8; 4];
      word[..chunk.len()].copy_from_slice(chunk);

      LittleEndian::read_i32(&word)
    })
    .collect()
}
