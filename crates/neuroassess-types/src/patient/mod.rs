//! The assessment form: option lists, the submitted record and its input
//! limits.
mod form;
pub mod options;
mod record;

pub use form::FormError;
pub use options::*;
pub use record::PatientRecord;
