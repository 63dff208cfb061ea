//! # cc-core
//!
//! Domain layer containing entities, value objects, the access policy, form
//! schemas, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod access;
pub mod entities;
pub mod error;
pub mod forms;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use access::{AccessDecision, AccessPolicy, DENIED_REDIRECT};
pub use entities::{
    AccessRole, Admin, BadgeColor, Community, CommunityMember, CommunityQuery, Event, EventQuery,
    ReviewStatus, Submission, SubmissionKind, SubmissionQuery, User, Zone, ZoneStats,
};
pub use error::DomainError;
pub use forms::{form_schema, FieldDescriptor, FieldType, FormRecord};
pub use traits::{
    AdminQuery, AdminRepository, CommunityRepository, EventRepository, StorageHealth,
    MembershipRepository, RepoResult, Session, SessionRepository, SubmissionRepository,
    UserRepository,
};
pub use value_objects::{AllottedRoles, IdGenerator, RecordId, RecordIdParseError};
