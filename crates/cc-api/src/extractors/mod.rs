//! Axum extractors for request handling
//!
//! Custom extractors for authentication, path and query parsing, and JSON
//! bodies. Rejections are turned into `ApiError` so they share the JSON
//! error body.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use path::RecordPath;
pub use query::QueryParams;
pub use validated::{JsonBody, OptionalJson, ValidatedJson};
