//! Database models - SQLx-compatible structs for PostgreSQL tables

mod admin;
mod community;
mod event;
mod session;
mod submission;
mod user;

pub use admin::AdminModel;
pub use community::{CommunityMemberModel, CommunityModel};
pub use event::EventModel;
pub use session::SessionModel;
pub use submission::SubmissionModel;
pub use user::UserModel;
