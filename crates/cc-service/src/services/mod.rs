//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod access;
pub mod admin;
pub mod auth;
pub mod community;
pub mod context;
pub mod error;
pub mod event;
pub mod form;
pub mod submission;
pub mod user;
pub mod zone;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use access::AccessService;
pub use admin::AdminService;
pub use auth::AuthService;
pub use community::CommunityService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use form::FormService;
pub use submission::SubmissionService;
pub use user::UserService;
pub use zone::ZoneService;

/// Parse an optional query parameter; blank counts as absent
pub(crate) fn parse_param<T>(raw: Option<&str>) -> Result<Option<T>, cc_core::DomainError>
where
    T: std::str::FromStr<Err = cc_core::DomainError>,
{
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::parse::<T>)
        .transpose()
}
