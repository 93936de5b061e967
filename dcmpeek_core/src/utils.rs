use unicode_segmentation::UnicodeSegmentation;

/// Inspects a byte slice in hexadecimal, e.g. `[1A 2B 3C 4D]`. If the number of
/// bytes in the slice exceeds `max_length` then not all bytes will be
/// shown and a trailing ellipsis will be appended, e.g. `[1A 2B 3C 4D …]`.
///
pub fn inspect_u8_slice(bytes: &[u8], max_length: usize) -> String {
  let byte_count = core::cmp::min(max_length, bytes.len());

  let s = bytes[0..byte_count]
    .iter()
    .map(|byte| format!("{:02X}", byte))
    .collect::<Vec<_>>()
    .join(" ");

  if byte_count == bytes.len() {
    format!("[{}]", s)
  } else {
    format!("[{} …]", s)
  }
}

/// Truncates a string to at most `max_length` grapheme clusters. If truncation
/// occurs then the final grapheme is replaced with an ellipsis, so the result
/// never exceeds `max_length` graphemes.
///
pub fn truncate_graphemes(s: &str, max_length: usize) -> String {
  let graphemes: Vec<&str> = s.graphemes(true).collect();

  if graphemes.len() <= max_length {
    return s.to_string();
  }

  if max_length == 0 {
    return String::new();
  }

  let mut result = graphemes[0..max_length - 1].concat();
  result.push('…');
  result
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn inspect_u8_slice_test() {
    assert_eq!(
      inspect_u8_slice(&[0xD1, 0x96, 0x33], 100),
      "[D1 96 33]".to_string()
    );

    assert_eq!(
      inspect_u8_slice(&[0xD1, 0x96, 0x33, 0x44], 3),
      "[D1 96 33 …]".to_string()
    );
  }

  #[test]
  fn truncate_graphemes_test() {
    assert_eq!(truncate_graphemes("CT", 10), "CT");
    assert_eq!(truncate_graphemes("ABCDEFGH", 4), "ABC…");
    assert_eq!(
      truncate_graphemes("e\u{301}e\u{301}e\u{301}", 2),
      "e\u{301}…"
    );
    assert_eq!(truncate_graphemes("ABC", 0), "");
  }
}
