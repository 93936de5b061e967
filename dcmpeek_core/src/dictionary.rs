//! The static tag dictionary that maps data element tags to their
//! human-readable names and value representations.
//!
//! The dictionary covers the File Meta Information, the common patient, study,
//! series and image attributes, and the MR acquisition attributes seen in
//! captured imaging payloads, along with a handful of vendor private tags.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::{DataElementTag, ValueRepresentation};

/// A single entry in the tag dictionary.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Item {
  pub tag: DataElementTag,
  pub name: &'static str,
  pub vr: ValueRepresentation,
}

/// The name used for tags that aren't in the dictionary.
///
pub const UNKNOWN_NAME: &str = "Unknown";

pub const ITEM: Item = Item {
  tag: DataElementTag::new(0xFFFE, 0xE000),
  name: "Item",
  vr: ValueRepresentation::Unknown,
};

pub const ITEM_DELIMITATION_ITEM: Item = Item {
  tag: DataElementTag::new(0xFFFE, 0xE00D),
  name: "Item Delimitation Item",
  vr: ValueRepresentation::Unknown,
};

pub const SEQUENCE_DELIMITATION_ITEM: Item = Item {
  tag: DataElementTag::new(0xFFFE, 0xE0DD),
  name: "Sequence Delimitation Item",
  vr: ValueRepresentation::Unknown,
};

pub const FILE_META_INFORMATION_GROUP_LENGTH: Item = Item {
  tag: DataElementTag::new(0x0002, 0x0000),
  name: "File Meta Information Group Length",
  vr: ValueRepresentation::UnsignedLong,
};

pub const FILE_META_INFORMATION_VERSION: Item = Item {
  tag: DataElementTag::new(0x0002, 0x0001),
  name: "File Meta Information Version",
  vr: ValueRepresentation::OtherByteString,
};

pub const MEDIA_STORAGE_SOP_CLASS_UID: Item = Item {
  tag: DataElementTag::new(0x0002, 0x0002),
  name: "Media Storage SOP Class UID",
  vr: ValueRepresentation::UniqueIdentifier,
};

pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Item = Item {
  tag: DataElementTag::new(0x0002, 0x0003),
  name: "Media Storage SOP Instance UID",
  vr: ValueRepresentation::UniqueIdentifier,
};

pub const TRANSFER_SYNTAX_UID: Item = Item {
  tag: DataElementTag::new(0x0002, 0x0010),
  name: "Transfer Syntax UID",
  vr: ValueRepresentation::UniqueIdentifier,
};

pub const IMPLEMENTATION_CLASS_UID: Item = Item {
  tag: DataElementTag::new(0x0002, 0x0012),
  name: "Implementation Class UID",
  vr: ValueRepresentation::UniqueIdentifier,
};

pub const IMPLEMENTATION_VERSION_NAME: Item = Item {
  tag: DataElementTag::new(0x0002, 0x0013),
  name: "Implementation Version Name",
  vr: ValueRepresentation::ShortString,
};

pub const SPECIFIC_CHARACTER_SET: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0005),
  name: "Specific Character Set",
  vr: ValueRepresentation::CodeString,
};

pub const IMAGE_TYPE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0008),
  name: "Image Type",
  vr: ValueRepresentation::CodeString,
};

pub const SOP_CLASS_UID: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0016),
  name: "SOP Class UID",
  vr: ValueRepresentation::UniqueIdentifier,
};

pub const SOP_INSTANCE_UID: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0018),
  name: "SOP Instance UID",
  vr: ValueRepresentation::UniqueIdentifier,
};

pub const STUDY_DATE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0020),
  name: "Study Date",
  vr: ValueRepresentation::Date,
};

pub const STUDY_TIME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0030),
  name: "Study Time",
  vr: ValueRepresentation::Time,
};

pub const ACCESSION_NUMBER: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0050),
  name: "Accession Number",
  vr: ValueRepresentation::ShortString,
};

pub const QUERY_RETRIEVE_LEVEL: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0052),
  name: "Query/Retrieve Level",
  vr: ValueRepresentation::CodeString,
};

pub const MODALITY: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0060),
  name: "Modality",
  vr: ValueRepresentation::CodeString,
};

pub const MODALITIES_IN_STUDY: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0061),
  name: "Modalities in Study",
  vr: ValueRepresentation::CodeString,
};

pub const MANUFACTURER: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0070),
  name: "Manufacturer",
  vr: ValueRepresentation::LongString,
};

pub const REFERRING_PHYSICIANS_NAME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0090),
  name: "Referring Physician's Name",
  vr: ValueRepresentation::PersonName,
};

pub const STATION_NAME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1010),
  name: "Station Name",
  vr: ValueRepresentation::ShortString,
};

pub const STUDY_DESCRIPTION: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1030),
  name: "Study Description",
  vr: ValueRepresentation::LongString,
};

pub const SERIES_DESCRIPTION: Item = Item {
  tag: DataElementTag::new(0x0008, 0x103E),
  name: "Series Description",
  vr: ValueRepresentation::LongString,
};

pub const OPERATORS_NAME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1070),
  name: "Operators' Name",
  vr: ValueRepresentation::PersonName,
};

pub const MANUFACTURERS_MODEL_NAME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1090),
  name: "Manufacturer's Model Name",
  vr: ValueRepresentation::LongString,
};

pub const PATIENTS_NAME: Item = Item {
  tag: DataElementTag::new(0x0010, 0x0010),
  name: "Patient's Name",
  vr: ValueRepresentation::PersonName,
};

pub const PATIENT_ID: Item = Item {
  tag: DataElementTag::new(0x0010, 0x0020),
  name: "Patient ID",
  vr: ValueRepresentation::LongString,
};

pub const PATIENTS_BIRTH_DATE: Item = Item {
  tag: DataElementTag::new(0x0010, 0x0030),
  name: "Patient's Birth Date",
  vr: ValueRepresentation::Date,
};

pub const PATIENTS_SEX: Item = Item {
  tag: DataElementTag::new(0x0010, 0x0040),
  name: "Patient's Sex",
  vr: ValueRepresentation::CodeString,
};

pub const SCANNING_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0020),
  name: "Scanning Sequence",
  vr: ValueRepresentation::CodeString,
};

pub const SEQUENCE_VARIANT: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0021),
  name: "Sequence Variant",
  vr: ValueRepresentation::CodeString,
};

pub const SCAN_OPTIONS: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0022),
  name: "Scan Options",
  vr: ValueRepresentation::CodeString,
};

pub const MR_ACQUISITION_TYPE: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0023),
  name: "MR Acquisition Type",
  vr: ValueRepresentation::CodeString,
};

pub const SLICE_THICKNESS: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0050),
  name: "Slice Thickness",
  vr: ValueRepresentation::DecimalString,
};

pub const REPETITION_TIME: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0080),
  name: "Repetition Time",
  vr: ValueRepresentation::DecimalString,
};

pub const ECHO_TIME: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0081),
  name: "Echo Time",
  vr: ValueRepresentation::DecimalString,
};

pub const INVERSION_TIME: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0082),
  name: "Inversion Time",
  vr: ValueRepresentation::DecimalString,
};

pub const NUMBER_OF_AVERAGES: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0083),
  name: "Number of Averages",
  vr: ValueRepresentation::DecimalString,
};

pub const IMAGING_FREQUENCY: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0084),
  name: "Imaging Frequency",
  vr: ValueRepresentation::DecimalString,
};

pub const IMAGED_NUCLEUS: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0085),
  name: "Imaged Nucleus",
  vr: ValueRepresentation::ShortString,
};

pub const ECHO_NUMBERS: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0086),
  name: "Echo Number(s)",
  vr: ValueRepresentation::IntegerString,
};

pub const MAGNETIC_FIELD_STRENGTH: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0087),
  name: "Magnetic Field Strength",
  vr: ValueRepresentation::DecimalString,
};

pub const SPACING_BETWEEN_SLICES: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0088),
  name: "Spacing Between Slices",
  vr: ValueRepresentation::DecimalString,
};

pub const NUMBER_OF_PHASE_ENCODING_STEPS: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0089),
  name: "Number of Phase Encoding Steps",
  vr: ValueRepresentation::IntegerString,
};

pub const ECHO_TRAIN_LENGTH: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0091),
  name: "Echo Train Length",
  vr: ValueRepresentation::IntegerString,
};

pub const PERCENT_SAMPLING: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0093),
  name: "Percent Sampling",
  vr: ValueRepresentation::DecimalString,
};

pub const PERCENT_PHASE_FIELD_OF_VIEW: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0094),
  name: "Percent Phase Field of View",
  vr: ValueRepresentation::DecimalString,
};

pub const PIXEL_BANDWIDTH: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0095),
  name: "Pixel Bandwidth",
  vr: ValueRepresentation::DecimalString,
};

pub const DEVICE_SERIAL_NUMBER: Item = Item {
  tag: DataElementTag::new(0x0018, 0x1000),
  name: "Device Serial Number",
  vr: ValueRepresentation::LongString,
};

pub const SOFTWARE_VERSIONS: Item = Item {
  tag: DataElementTag::new(0x0018, 0x1020),
  name: "Software Versions",
  vr: ValueRepresentation::LongString,
};

pub const FLIP_ANGLE: Item = Item {
  tag: DataElementTag::new(0x0018, 0x1314),
  name: "Flip Angle",
  vr: ValueRepresentation::DecimalString,
};

pub const VARIABLE_FLIP_ANGLE_FLAG: Item = Item {
  tag: DataElementTag::new(0x0018, 0x1315),
  name: "Variable Flip Angle Flag",
  vr: ValueRepresentation::CodeString,
};

pub const SAR: Item = Item {
  tag: DataElementTag::new(0x0018, 0x1316),
  name: "SAR",
  vr: ValueRepresentation::DecimalString,
};

pub const STUDY_INSTANCE_UID: Item = Item {
  tag: DataElementTag::new(0x0020, 0x000D),
  name: "Study Instance UID",
  vr: ValueRepresentation::UniqueIdentifier,
};

pub const SERIES_INSTANCE_UID: Item = Item {
  tag: DataElementTag::new(0x0020, 0x000E),
  name: "Series Instance UID",
  vr: ValueRepresentation::UniqueIdentifier,
};

pub const STUDY_ID: Item = Item {
  tag: DataElementTag::new(0x0020, 0x0010),
  name: "Study ID",
  vr: ValueRepresentation::ShortString,
};

pub const SERIES_NUMBER: Item = Item {
  tag: DataElementTag::new(0x0020, 0x0011),
  name: "Series Number",
  vr: ValueRepresentation::IntegerString,
};

pub const INSTANCE_NUMBER: Item = Item {
  tag: DataElementTag::new(0x0020, 0x0013),
  name: "Instance Number",
  vr: ValueRepresentation::IntegerString,
};

pub const NUMBER_OF_STUDY_RELATED_INSTANCES: Item = Item {
  tag: DataElementTag::new(0x0020, 0x1208),
  name: "Number of Study Related Instances",
  vr: ValueRepresentation::IntegerString,
};

pub const ROWS: Item = Item {
  tag: DataElementTag::new(0x0028, 0x0010),
  name: "Rows",
  vr: ValueRepresentation::UnsignedShort,
};

pub const COLUMNS: Item = Item {
  tag: DataElementTag::new(0x0028, 0x0011),
  name: "Columns",
  vr: ValueRepresentation::UnsignedShort,
};

pub const BITS_ALLOCATED: Item = Item {
  tag: DataElementTag::new(0x0028, 0x0100),
  name: "Bits Allocated",
  vr: ValueRepresentation::UnsignedShort,
};

pub const BITS_STORED: Item = Item {
  tag: DataElementTag::new(0x0028, 0x0101),
  name: "Bits Stored",
  vr: ValueRepresentation::UnsignedShort,
};

pub const HIGH_BIT: Item = Item {
  tag: DataElementTag::new(0x0028, 0x0102),
  name: "High Bit",
  vr: ValueRepresentation::UnsignedShort,
};

pub const PIXEL_REPRESENTATION: Item = Item {
  tag: DataElementTag::new(0x0028, 0x0103),
  name: "Pixel Representation",
  vr: ValueRepresentation::UnsignedShort,
};

pub const SOFTCOPY_VOI_LUT_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0028, 0x3110),
  name: "Softcopy VOI LUT Sequence",
  vr: ValueRepresentation::Sequence,
};

pub const CONCEPT_NAME_CODE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA043),
  name: "Concept Name Code Sequence",
  vr: ValueRepresentation::Sequence,
};

pub const CONTINUITY_OF_CONTENT: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA050),
  name: "Continuity Of Content",
  vr: ValueRepresentation::CodeString,
};

pub const PERFORMED_PROCEDURE_CODE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA372),
  name: "Performed Procedure Code Sequence",
  vr: ValueRepresentation::Sequence,
};

pub const CURRENT_REQUESTED_PROCEDURE_EVIDENCE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA375),
  name: "Current Requested Procedure Evidence Sequence",
  vr: ValueRepresentation::Sequence,
};

pub const COMPLETION_FLAG: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA491),
  name: "Completion Flag",
  vr: ValueRepresentation::CodeString,
};

pub const VERIFICATION_FLAG: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA493),
  name: "Verification Flag",
  vr: ValueRepresentation::CodeString,
};

pub const CONTENT_TEMPLATE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA504),
  name: "Content Template Sequence",
  vr: ValueRepresentation::Sequence,
};

pub const CONTENT_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA730),
  name: "Content Sequence",
  vr: ValueRepresentation::Sequence,
};

pub const IMAGE_HORIZONTAL_FLIP: Item = Item {
  tag: DataElementTag::new(0x0070, 0x0041),
  name: "Image Horizontal Flip",
  vr: ValueRepresentation::CodeString,
};

pub const IMAGE_ROTATION: Item = Item {
  tag: DataElementTag::new(0x0070, 0x0042),
  name: "Image Rotation",
  vr: ValueRepresentation::UnsignedShort,
};

pub const DISPLAYED_AREA_SELECTION_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0070, 0x005A),
  name: "Displayed Area Selection Sequence",
  vr: ValueRepresentation::Sequence,
};

pub const PIXEL_DATA: Item = Item {
  tag: DataElementTag::new(0x7FE0, 0x0010),
  name: "Pixel Data",
  vr: ValueRepresentation::OtherWordString,
};

pub const DATA_SET_TRAILING_PADDING: Item = Item {
  tag: DataElementTag::new(0xFFFC, 0xFFFC),
  name: "Data Set Trailing Padding",
  vr: ValueRepresentation::OtherByteString,
};

/// All items in the standard tag dictionary. The item and delimitation tags
/// are structural and are not included.
///
pub const ITEMS: &[Item] = &[
  FILE_META_INFORMATION_GROUP_LENGTH,
  FILE_META_INFORMATION_VERSION,
  MEDIA_STORAGE_SOP_CLASS_UID,
  MEDIA_STORAGE_SOP_INSTANCE_UID,
  TRANSFER_SYNTAX_UID,
  IMPLEMENTATION_CLASS_UID,
  IMPLEMENTATION_VERSION_NAME,
  SPECIFIC_CHARACTER_SET,
  IMAGE_TYPE,
  SOP_CLASS_UID,
  SOP_INSTANCE_UID,
  STUDY_DATE,
  STUDY_TIME,
  ACCESSION_NUMBER,
  QUERY_RETRIEVE_LEVEL,
  MODALITY,
  MODALITIES_IN_STUDY,
  MANUFACTURER,
  REFERRING_PHYSICIANS_NAME,
  STATION_NAME,
  STUDY_DESCRIPTION,
  SERIES_DESCRIPTION,
  OPERATORS_NAME,
  MANUFACTURERS_MODEL_NAME,
  PATIENTS_NAME,
  PATIENT_ID,
  PATIENTS_BIRTH_DATE,
  PATIENTS_SEX,
  SCANNING_SEQUENCE,
  SEQUENCE_VARIANT,
  SCAN_OPTIONS,
  MR_ACQUISITION_TYPE,
  SLICE_THICKNESS,
  REPETITION_TIME,
  ECHO_TIME,
  INVERSION_TIME,
  NUMBER_OF_AVERAGES,
  IMAGING_FREQUENCY,
  IMAGED_NUCLEUS,
  ECHO_NUMBERS,
  MAGNETIC_FIELD_STRENGTH,
  SPACING_BETWEEN_SLICES,
  NUMBER_OF_PHASE_ENCODING_STEPS,
  ECHO_TRAIN_LENGTH,
  PERCENT_SAMPLING,
  PERCENT_PHASE_FIELD_OF_VIEW,
  PIXEL_BANDWIDTH,
  DEVICE_SERIAL_NUMBER,
  SOFTWARE_VERSIONS,
  FLIP_ANGLE,
  VARIABLE_FLIP_ANGLE_FLAG,
  SAR,
  STUDY_INSTANCE_UID,
  SERIES_INSTANCE_UID,
  STUDY_ID,
  SERIES_NUMBER,
  INSTANCE_NUMBER,
  NUMBER_OF_STUDY_RELATED_INSTANCES,
  Item {
    tag: DataElementTag::new(0x0025, 0x0010),
    name: "Prenuvo General Data",
    vr: ValueRepresentation::LongString,
  },
  Item {
    tag: DataElementTag::new(0x0025, 0x100B),
    name: "Prenuvo Viewer Version",
    vr: ValueRepresentation::LongString,
  },
  Item {
    tag: DataElementTag::new(0x0025, 0x1011),
    name: "Prenuvo Clinic Name",
    vr: ValueRepresentation::LongString,
  },
  Item {
    tag: DataElementTag::new(0x0025, 0x102F),
    name: "Prenuvo Clinic Location",
    vr: ValueRepresentation::LongString,
  },
  ROWS,
  COLUMNS,
  BITS_ALLOCATED,
  BITS_STORED,
  HIGH_BIT,
  PIXEL_REPRESENTATION,
  SOFTCOPY_VOI_LUT_SEQUENCE,
  CONCEPT_NAME_CODE_SEQUENCE,
  CONTINUITY_OF_CONTENT,
  PERFORMED_PROCEDURE_CODE_SEQUENCE,
  CURRENT_REQUESTED_PROCEDURE_EVIDENCE_SEQUENCE,
  COMPLETION_FLAG,
  VERIFICATION_FLAG,
  CONTENT_TEMPLATE_SEQUENCE,
  CONTENT_SEQUENCE,
  Item {
    tag: DataElementTag::new(0x0051, 0x100A),
    name: "Acquisition Time",
    vr: ValueRepresentation::LongString,
  },
  Item {
    tag: DataElementTag::new(0x0051, 0x100B),
    name: "Image Matrix",
    vr: ValueRepresentation::LongString,
  },
  Item {
    tag: DataElementTag::new(0x0051, 0x100C),
    name: "Field of View",
    vr: ValueRepresentation::LongString,
  },
  Item {
    tag: DataElementTag::new(0x0051, 0x100D),
    name: "Slice Position",
    vr: ValueRepresentation::LongString,
  },
  Item {
    tag: DataElementTag::new(0x0051, 0x100F),
    name: "Sequence Type",
    vr: ValueRepresentation::LongString,
  },
  Item {
    tag: DataElementTag::new(0x0051, 0x1011),
    name: "Sequence Variant",
    vr: ValueRepresentation::LongString,
  },
  Item {
    tag: DataElementTag::new(0x0051, 0x1016),
    name: "Sequence Name",
    vr: ValueRepresentation::LongString,
  },
  Item {
    tag: DataElementTag::new(0x0051, 0x1017),
    name: "Slice Thickness",
    vr: ValueRepresentation::LongString,
  },
  IMAGE_HORIZONTAL_FLIP,
  IMAGE_ROTATION,
  DISPLAYED_AREA_SELECTION_SEQUENCE,
  PIXEL_DATA,
  DATA_SET_TRAILING_PADDING,
];

/// A read-only mapping from data element tags to their dictionary [`Item`].
///
/// The standard dictionary is built once on first use and shared for the life
/// of the process. Alternative dictionaries can be built with
/// [`TagDictionary::from_items()`].
///
#[derive(Clone, Debug)]
pub struct TagDictionary {
  items: HashMap<DataElementTag, Item>,
}

static STANDARD_DICTIONARY: LazyLock<TagDictionary> =
  LazyLock::new(|| TagDictionary::from_items(ITEMS));

impl TagDictionary {
  /// Returns the standard tag dictionary built from [`ITEMS`].
  ///
  pub fn standard() -> &'static TagDictionary {
    &STANDARD_DICTIONARY
  }

  /// Builds a tag dictionary from a list of items. If a tag appears more than
  /// once then the last item for it is used.
  ///
  pub fn from_items(items: &[Item]) -> Self {
    Self {
      items: items.iter().map(|item| (item.tag, *item)).collect(),
    }
  }

  /// Looks up the dictionary item for a tag.
  ///
  pub fn find(&self, tag: DataElementTag) -> Option<&Item> {
    self.items.get(&tag)
  }

  /// Looks up the dictionary item for a tag given as 8 hexadecimal characters,
  /// e.g. `"0008103E"`.
  ///
  pub fn find_hex(&self, hex: &str) -> Option<&Item> {
    DataElementTag::from_hex_string(hex)
      .ok()
      .and_then(|tag| self.find(tag))
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Returns all items in the dictionary in ascending tag order.
  ///
  pub fn sorted_items(&self) -> Vec<&Item> {
    let mut items: Vec<_> = self.items.values().collect();
    items.sort_by_key(|item| item.tag);
    items
  }
}

/// Returns the name of a tag in the standard dictionary, or `"Unknown"` if it
/// isn't present.
///
pub fn tag_name(tag: DataElementTag) -> &'static str {
  match tag {
    t if t == ITEM.tag => ITEM.name,
    t if t == ITEM_DELIMITATION_ITEM.tag => ITEM_DELIMITATION_ITEM.name,
    t if t == SEQUENCE_DELIMITATION_ITEM.tag => SEQUENCE_DELIMITATION_ITEM.name,
    _ => TagDictionary::standard()
      .find(tag)
      .map(|item| item.name)
      .unwrap_or(UNKNOWN_NAME),
  }
}

/// Formats a tag along with its name, e.g. `"(0010,0010) Patient's Name"`.
///
pub fn tag_with_name(tag: DataElementTag) -> String {
  format!("{} {}", tag, tag_name(tag))
}
