//! Core types shared by the dcmpeek crates: data element tags, value
//! representations, transfer syntaxes, the tag dictionary, and the traits that
//! describe a binary DICOM decoder.

pub mod data_element_tag;
pub mod data_error;
pub mod data_set_path;
pub mod decoder;
pub mod dictionary;
pub mod error;
pub mod transfer_syntax;
pub mod utils;
pub mod value_representation;

pub use data_element_tag::DataElementTag;
pub use data_error::DataError;
pub use data_set_path::DataSetPath;
pub use decoder::{DataSetDecoder, DecodedDataSet, DecodedElement};
pub use dictionary::TagDictionary;
pub use error::{DcmpeekError, print_error_lines};
pub use transfer_syntax::TransferSyntax;
pub use value_representation::ValueRepresentation;
