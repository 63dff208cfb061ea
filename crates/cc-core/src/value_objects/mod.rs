//! Value objects - immutable types that represent domain concepts

mod allotted_roles;
mod record_id;

pub use allotted_roles::AllottedRoles;
pub use record_id::{IdGenerator, RecordId, RecordIdParseError};
