//! Rebuilds binary DICOM data from captured signed 32-bit integer samples, and
//! projects the data set decoded from it into display records of tag, name,
//! and value.

pub mod display_record;
pub mod inspect_error;
pub mod projection;
pub mod reconstruct;
pub mod samples;
pub mod session;

pub use display_record::DisplayRecord;
pub use inspect_error::InspectError;
pub use projection::{Projection, ProjectionWarning, project};
pub use reconstruct::{deconstruct, reconstruct};
pub use samples::SamplesError;
pub use session::{InspectionState, Session};
