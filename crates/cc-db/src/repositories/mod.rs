//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in cc-core.

mod admin;
mod community;
mod error;
mod event;
mod session;
mod submission;
mod user;

pub use admin::PgAdminRepository;
pub use community::{PgCommunityRepository, PgMembershipRepository};
pub(crate) use error::map_db_error;
pub use event::PgEventRepository;
pub use session::PgSessionRepository;
pub use submission::PgSubmissionRepository;
pub use user::PgUserRepository;
