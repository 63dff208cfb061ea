//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    AccessRole, Admin, Community, CommunityMember, CommunityQuery, Event, EventQuery,
    ReviewStatus, Submission, SubmissionQuery, User, Zone,
};
use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<User>>;

    /// Find user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Change a user's access role
    async fn update_role(&self, id: RecordId, role: AccessRole) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: RecordId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Session Repository
// ============================================================================

/// Refresh session record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub user_id: RecordId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Store a new session
    async fn create(&self, session: &Session) -> RepoResult<()>;

    /// Find an unrevoked, unexpired session
    async fn find_active(&self, id: &str) -> RepoResult<Option<Session>>;

    /// Revoke one session
    async fn revoke(&self, id: &str) -> RepoResult<()>;

    /// Revoke every session of a user, returning how many were active
    async fn revoke_all_for_user(&self, user_id: RecordId) -> RepoResult<u64>;
}

// ============================================================================
// Admin Repository
// ============================================================================

/// Admin team listing filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminQuery {
    pub zone: Option<Zone>,
    pub active: Option<bool>,
}

impl AdminQuery {
    pub fn matches(&self, admin: &Admin) -> bool {
        self.zone.map_or(true, |z| admin.zone == z)
            && self.active.map_or(true, |a| admin.is_active == a)
    }
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Find admin by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Admin>>;

    /// Find the admin record of an account
    async fn find_by_user(&self, user_id: RecordId) -> RepoResult<Option<Admin>>;

    /// List the admin team, oldest appointment first
    async fn list(&self, query: AdminQuery) -> RepoResult<Vec<Admin>>;

    /// Create a new admin record
    async fn create(&self, admin: &Admin) -> RepoResult<()>;

    /// Update zone, allotted roles, active flag and last-active time
    async fn update(&self, admin: &Admin) -> RepoResult<()>;

    /// Count active admins, optionally within a zone
    async fn count_active(&self, zone: Option<Zone>) -> RepoResult<i64>;
}

// ============================================================================
// Community Repository
// ============================================================================

#[async_trait]
pub trait CommunityRepository: Send + Sync {
    /// Find community by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Community>>;

    /// Check if a name is taken (case-insensitive)
    async fn name_exists(&self, name: &str) -> RepoResult<bool>;

    /// Search communities, ordered by name
    async fn search(&self, query: &CommunityQuery) -> RepoResult<Vec<Community>>;

    /// Create a new community
    async fn create(&self, community: &Community) -> RepoResult<()>;

    /// Change review status
    async fn update_status(&self, id: RecordId, status: ReviewStatus) -> RepoResult<()>;

    /// Count communities in a zone with a status
    async fn count(&self, zone: Zone, status: ReviewStatus) -> RepoResult<i64>;
}

// ============================================================================
// Membership Repository
// ============================================================================

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Add a member to a community
    async fn add(&self, member: &CommunityMember) -> RepoResult<()>;

    /// Check if a user belongs to a community
    async fn is_member(&self, community_id: RecordId, user_id: RecordId) -> RepoResult<bool>;

    /// Check if a user administers a community
    async fn is_community_admin(&self, community_id: RecordId, user_id: RecordId)
        -> RepoResult<bool>;

    /// Number of members in a community
    async fn member_count(&self, community_id: RecordId) -> RepoResult<i64>;

    /// All memberships of a user
    async fn memberships_for_user(&self, user_id: RecordId) -> RepoResult<Vec<CommunityMember>>;

    /// Memberships where the user is a community admin
    async fn admin_memberships(&self, user_id: RecordId) -> RepoResult<Vec<CommunityMember>>;
}

// ============================================================================
// Submission Repository
// ============================================================================

#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Find submission by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Submission>>;

    /// List submissions of a kind, newest first
    async fn list(&self, query: SubmissionQuery) -> RepoResult<Vec<Submission>>;

    /// Store a new submission
    async fn create(&self, submission: &Submission) -> RepoResult<()>;

    /// Persist review fields
    async fn update(&self, submission: &Submission) -> RepoResult<()>;

    /// Hard delete a submission
    async fn delete(&self, id: RecordId) -> RepoResult<()>;
}

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Store a new event
    async fn create(&self, event: &Event) -> RepoResult<()>;

    /// Events of approved communities, ordered by start time
    async fn list(&self, query: EventQuery) -> RepoResult<Vec<Event>>;

    /// Count events in a zone still running at `now`
    async fn count_upcoming(&self, zone: Zone, now: DateTime<Utc>) -> RepoResult<i64>;
}

// ============================================================================
// Health
// ============================================================================

/// Backing store liveness check
#[async_trait]
pub trait StorageHealth: Send + Sync {
    async fn ping(&self) -> RepoResult<()>;
}
