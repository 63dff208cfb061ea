//! Domain entities - core business objects

mod admin;
mod community;
mod event;
mod status;
mod submission;
mod user;
mod zone;

pub use admin::Admin;
pub use community::{Community, CommunityMember, CommunityQuery};
pub use event::{Event, EventQuery};
pub use status::{BadgeColor, ReviewStatus};
pub use submission::{Submission, SubmissionKind, SubmissionQuery};
pub use user::{AccessRole, User};
pub use zone::{Zone, ZoneStats};
