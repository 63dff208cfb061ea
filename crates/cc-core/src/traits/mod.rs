//! Repository traits

mod repositories;

pub use repositories::{
    AdminQuery, AdminRepository, CommunityRepository, EventRepository, StorageHealth,
    MembershipRepository, RepoResult, Session, SessionRepository, SubmissionRepository,
    UserRepository,
};
