//! Model to entity mappers
//!
//! Rows come back with enums as text. `TryFrom<Model>` parses them and turns
//! anything the CHECK constraints should have prevented into a database error.

mod admin;
mod community;
mod event;
mod session;
mod submission;
mod user;

use std::str::FromStr;

use cc_core::DomainError;

/// Parse an enum column, reporting corrupt values as database errors
fn parse_column<T>(column: &'static str, raw: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = DomainError>,
{
    raw.parse()
        .map_err(|_| DomainError::DatabaseError(format!("invalid {column} value in row: {raw}")))
}
