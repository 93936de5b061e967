use dcmpeek_core::DataSetDecoder;

use crate::{P10DataSet, P10Error, P10ReadConfig};

/// Decodes buffers of DICOM P10 data using a fixed read config.
///
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct P10Decoder {
  config: P10ReadConfig,
}

impl P10Decoder {
  pub fn new(config: P10ReadConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &P10ReadConfig {
    &self.config
  }
}

impl DataSetDecoder for P10Decoder {
  type DataSet = P10DataSet;
  type Error = P10Error;

  /// Reads the bytes as DICOM P10 data. A successful read always yields a
  /// data set, although it may be empty.
  ///
  fn decode(&self, bytes: &[u8]) -> Result<Option<P10DataSet>, P10Error> {
    crate::read_bytes(bytes, Some(self.config)).map(Some)
  }
}
