//! The DICOM transfer syntaxes that a data set can be encoded with.
//!
//! Ref: PS3.5 10.

/// Whether data element VRs are serialized explicitly or left implicit.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VrSerialization {
  VrExplicit,
  VrImplicit,
}

/// The byte order of multi-byte binary values.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Endianness {
  LittleEndian,
  BigEndian,
}

impl Endianness {
  pub fn is_big(&self) -> bool {
    *self == Self::BigEndian
  }
}

/// Describes a single DICOM transfer syntax, with its name, UID, and how the
/// data set that uses it is serialized.
///
#[derive(Debug, Eq, Hash, PartialEq)]
pub struct TransferSyntax {
  pub name: &'static str,
  pub uid: &'static str,
  pub vr_serialization: VrSerialization,
  pub endianness: Endianness,
  pub is_deflated: bool,
  pub is_encapsulated: bool,
}

const fn encapsulated(
  name: &'static str,
  uid: &'static str,
) -> TransferSyntax {
  TransferSyntax {
    name,
    uid,
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  }
}

pub const IMPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax {
  name: "Implicit VR Little Endian",
  uid: "1.2.840.10008.1.2",
  vr_serialization: VrSerialization::VrImplicit,
  endianness: Endianness::LittleEndian,
  is_deflated: false,
  is_encapsulated: false,
};

pub const EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax {
  name: "Explicit VR Little Endian",
  uid: "1.2.840.10008.1.2.1",
  vr_serialization: VrSerialization::VrExplicit,
  endianness: Endianness::LittleEndian,
  is_deflated: false,
  is_encapsulated: false,
};

pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax {
  name: "Deflated Explicit VR Little Endian",
  uid: "1.2.840.10008.1.2.1.99",
  vr_serialization: VrSerialization::VrExplicit,
  endianness: Endianness::LittleEndian,
  is_deflated: true,
  is_encapsulated: false,
};

pub const EXPLICIT_VR_BIG_ENDIAN: TransferSyntax = TransferSyntax {
  name: "Explicit VR Big Endian",
  uid: "1.2.840.10008.1.2.2",
  vr_serialization: VrSerialization::VrExplicit,
  endianness: Endianness::BigEndian,
  is_deflated: false,
  is_encapsulated: false,
};

pub const ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax =
  encapsulated(
    "Encapsulated Uncompressed Explicit VR Little Endian",
    "1.2.840.10008.1.2.1.98",
  );

pub const JPEG_BASELINE_8BIT: TransferSyntax =
  encapsulated("JPEG Baseline (Process 1)", "1.2.840.10008.1.2.4.50");

pub const JPEG_EXTENDED_12BIT: TransferSyntax =
  encapsulated("JPEG Extended (Process 2 & 4)", "1.2.840.10008.1.2.4.51");

pub const JPEG_LOSSLESS_NON_HIERARCHICAL: TransferSyntax = encapsulated(
  "JPEG Lossless, Non-Hierarchical (Process 14)",
  "1.2.840.10008.1.2.4.57",
);

pub const JPEG_LOSSLESS_NON_HIERARCHICAL_SV1: TransferSyntax = encapsulated(
  "JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14 \
   [Selection Value 1])",
  "1.2.840.10008.1.2.4.70",
);

pub const JPEG_LS_LOSSLESS: TransferSyntax = encapsulated(
  "JPEG-LS Lossless Image Compression",
  "1.2.840.10008.1.2.4.80",
);

pub const JPEG_LS_LOSSY_NEAR_LOSSLESS: TransferSyntax = encapsulated(
  "JPEG-LS Lossy (Near-Lossless) Image Compression",
  "1.2.840.10008.1.2.4.81",
);

pub const JPEG_2K_LOSSLESS_ONLY: TransferSyntax = encapsulated(
  "JPEG 2000 Image Compression (Lossless Only)",
  "1.2.840.10008.1.2.4.90",
);

pub const JPEG_2K: TransferSyntax =
  encapsulated("JPEG 2000 Image Compression", "1.2.840.10008.1.2.4.91");

pub const MPEG2_MAIN_PROFILE_MAIN_LEVEL: TransferSyntax = encapsulated(
  "MPEG2 Main Profile / Main Level",
  "1.2.840.10008.1.2.4.100",
);

pub const MPEG4_AVC_H264_HIGH_PROFILE: TransferSyntax = encapsulated(
  "MPEG-4 AVC/H.264 High Profile / Level 4.1",
  "1.2.840.10008.1.2.4.102",
);

pub const JPEG_XL_LOSSLESS: TransferSyntax =
  encapsulated("JPEG XL Lossless", "1.2.840.10008.1.2.4.110");

pub const RLE_LOSSLESS: TransferSyntax =
  encapsulated("RLE Lossless", "1.2.840.10008.1.2.5");

/// All transfer syntaxes that can be read.
///
pub const ALL: [&TransferSyntax; 17] = [
  &IMPLICIT_VR_LITTLE_ENDIAN,
  &EXPLICIT_VR_LITTLE_ENDIAN,
  &ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN,
  &DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
  &EXPLICIT_VR_BIG_ENDIAN,
  &JPEG_BASELINE_8BIT,
  &JPEG_EXTENDED_12BIT,
  &JPEG_LOSSLESS_NON_HIERARCHICAL,
  &JPEG_LOSSLESS_NON_HIERARCHICAL_SV1,
  &JPEG_LS_LOSSLESS,
  &JPEG_LS_LOSSY_NEAR_LOSSLESS,
  &JPEG_2K_LOSSLESS_ONLY,
  &JPEG_2K,
  &MPEG2_MAIN_PROFILE_MAIN_LEVEL,
  &MPEG4_AVC_H264_HIGH_PROFILE,
  &JPEG_XL_LOSSLESS,
  &RLE_LOSSLESS,
];

impl TransferSyntax {
  /// Returns the transfer syntax with the given UID. Trailing NUL and space
  /// padding on the UID is ignored.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn from_uid(uid: &str) -> Result<&'static TransferSyntax, ()> {
    let uid = uid.trim_end_matches(['\0', ' ']);

    ALL.iter().find(|ts| ts.uid == uid).copied().ok_or(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_uid_test() {
    assert_eq!(
      TransferSyntax::from_uid("1.2.840.10008.1.2.1"),
      Ok(&EXPLICIT_VR_LITTLE_ENDIAN)
    );

    assert_eq!(
      TransferSyntax::from_uid("1.2.840.10008.1.2.1.99\0"),
      Ok(&DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN)
    );

    assert_eq!(TransferSyntax::from_uid("1.2.3.4"), Err(()));
  }

  #[test]
  fn encapsulated_syntaxes_use_explicit_little_endian() {
    for ts in ALL.iter().filter(|ts| ts.is_encapsulated) {
      assert_eq!(ts.vr_serialization, VrSerialization::VrExplicit);
      assert_eq!(ts.endianness, Endianness::LittleEndian);
    }
  }
}
