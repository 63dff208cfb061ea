//! Schema-driven forms

mod record;
mod schema;

pub use record::FormRecord;
pub use schema::{base_fields, fields_for, form_schema, FieldDescriptor, FieldType};
