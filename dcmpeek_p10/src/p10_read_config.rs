use dcmpeek_core::{TransferSyntax, transfer_syntax};

/// Configuration used when reading DICOM P10 data.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct P10ReadConfig {
  pub(crate) default_transfer_syntax: &'static TransferSyntax,
  pub(crate) max_sequence_depth: usize,
  pub(crate) max_inflated_size: u64,
  pub(crate) require_dicm_prefix: bool,
  pub(crate) require_ordered_data_elements: bool,
  pub(crate) ignore_trailing_padding: bool,
}

impl Default for P10ReadConfig {
  fn default() -> Self {
    Self {
      default_transfer_syntax: &transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN,
      max_sequence_depth: 256,
      max_inflated_size: 1024 * 1024 * 1024,
      require_dicm_prefix: false,
      require_ordered_data_elements: false,
      ignore_trailing_padding: true,
    }
  }
}

impl P10ReadConfig {
  /// The transfer syntax to use when reading DICOM P10 data that doesn't
  /// specify a transfer syntax in its File Meta Information, or doesn't have
  /// any File Meta Information.
  ///
  /// The default is 'Implicit VR Little Endian'.
  ///
  pub fn default_transfer_syntax(
    mut self,
    value: &'static TransferSyntax,
  ) -> Self {
    self.default_transfer_syntax = value;
    self
  }

  /// The maximum sequence depth that can be read. Sequences are read
  /// recursively, so this also bounds the stack usage of a read, and is used
  /// to reject malformed or malicious DICOM P10 data.
  ///
  /// By default the maximum sequence depth is 256.
  ///
  pub fn max_sequence_depth(mut self, value: usize) -> Self {
    self.max_sequence_depth = value;
    self
  }

  /// The maximum number of bytes that the data set of a deflated transfer
  /// syntax is allowed to inflate to. This protects against zlib bombs.
  ///
  /// By default the maximum inflated size is 1 GiB.
  ///
  pub fn max_inflated_size(mut self, value: u64) -> Self {
    self.max_inflated_size = value;
    self
  }

  /// Whether to require input data have 'DICM' at bytes 128-132. This is
  /// required for well-formed DICOM P10 data, but it may be absent in some
  /// cases. If this is set to `false` then such data will be readable.
  ///
  /// By default the 'DICM' prefix at bytes 128-132 is not required.
  ///
  pub fn require_dicm_prefix(mut self, value: bool) -> Self {
    self.require_dicm_prefix = value;
    self
  }

  /// Whether to error if data elements are not in ascending order in the DICOM
  /// P10 data. Such data is malformed but is still able to be read.
  ///
  /// By default this requirement is not enforced.
  ///
  pub fn require_ordered_data_elements(mut self, value: bool) -> Self {
    self.require_ordered_data_elements = value;
    self
  }

  /// Whether to ignore fewer than eight zero bytes at the very end of the
  /// data. Buffers rebuilt from 32-bit words carry up to three such bytes.
  ///
  /// By default trailing padding is ignored.
  ///
  pub fn ignore_trailing_padding(mut self, value: bool) -> Self {
    self.ignore_trailing_padding = value;
    self
  }
}
