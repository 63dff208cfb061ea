//! In-memory repository fakes for service tests

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use cc_common::auth::JwtService;
use cc_common::AccountsConfig;
use cc_core::entities::{
    AccessRole, Admin, Community, CommunityMember, CommunityQuery, Event, EventQuery,
    ReviewStatus, Submission, SubmissionQuery, User, Zone,
};
use cc_core::traits::{
    AdminQuery, AdminRepository, CommunityRepository, EventRepository, StorageHealth,
    MembershipRepository, RepoResult, Session, SessionRepository, SubmissionRepository,
    UserRepository,
};
use cc_core::{DomainError, IdGenerator, RecordId};

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
pub struct InMemoryUsers {
    users: RwLock<HashMap<RecordId, (User, String)>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<User>> {
        Ok(self.users.read().get(&id).map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .read()
            .values()
            .find(|(u, _)| u.email.eq_ignore_ascii_case(email))
            .map(|(u, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self
            .users
            .read()
            .values()
            .any(|(u, _)| u.username.eq_ignore_ascii_case(username)))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        if self.email_exists(&user.email).await? {
            return Err(DomainError::EmailAlreadyExists);
        }
        self.users
            .write()
            .insert(user.id, (user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn update_role(&self, id: RecordId, role: AccessRole) -> RepoResult<()> {
        let mut users = self.users.write();
        let (user, _) = users.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
        user.set_role(role);
        Ok(())
    }

    async fn get_password_hash(&self, id: RecordId) -> RepoResult<Option<String>> {
        Ok(self.users.read().get(&id).map(|(_, h)| h.clone()))
    }
}

#[derive(Default)]
pub struct InMemorySessions {
    sessions: RwLock<HashMap<String, (Session, bool)>>,
}

#[async_trait]
impl SessionRepository for InMemorySessions {
    async fn create(&self, session: &Session) -> RepoResult<()> {
        self.sessions
            .write()
            .insert(session.id.clone(), (session.clone(), false));
        Ok(())
    }

    async fn find_active(&self, id: &str) -> RepoResult<Option<Session>> {
        let now = Utc::now();
        Ok(self
            .sessions
            .read()
            .get(id)
            .filter(|(s, revoked)| !revoked && s.expires_at > now)
            .map(|(s, _)| s.clone()))
    }

    async fn revoke(&self, id: &str) -> RepoResult<()> {
        if let Some(entry) = self.sessions.write().get_mut(id) {
            entry.1 = true;
        }
        Ok(())
    }

    async fn revoke_all_for_user(&self, user_id: RecordId) -> RepoResult<u64> {
        let mut revoked = 0;
        for (session, is_revoked) in self.sessions.write().values_mut() {
            if session.user_id == user_id && !*is_revoked {
                *is_revoked = true;
                revoked += 1;
            }
        }
        Ok(revoked)
    }
}

#[derive(Default)]
pub struct InMemoryAdmins {
    admins: RwLock<Vec<Admin>>,
}

#[async_trait]
impl AdminRepository for InMemoryAdmins {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Admin>> {
        Ok(self.admins.read().iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_user(&self, user_id: RecordId) -> RepoResult<Option<Admin>> {
        Ok(self
            .admins
            .read()
            .iter()
            .find(|a| a.user_id == user_id)
            .cloned())
    }

    async fn list(&self, query: AdminQuery) -> RepoResult<Vec<Admin>> {
        Ok(self
            .admins
            .read()
            .iter()
            .filter(|a| query.matches(a))
            .cloned()
            .collect())
    }

    async fn create(&self, admin: &Admin) -> RepoResult<()> {
        let mut admins = self.admins.write();
        if admins.iter().any(|a| a.user_id == admin.user_id) {
            return Err(DomainError::AlreadyAdmin);
        }
        if admins.iter().any(|a| a.name == admin.name) {
            return Err(DomainError::AdminNameTaken);
        }
        if admins
            .iter()
            .any(|a| a.username == admin.username || a.email == admin.email)
        {
            return Err(DomainError::AlreadyAdmin);
        }
        admins.push(admin.clone());
        Ok(())
    }

    async fn update(&self, admin: &Admin) -> RepoResult<()> {
        let mut admins = self.admins.write();
        let slot = admins
            .iter_mut()
            .find(|a| a.id == admin.id)
            .ok_or(DomainError::AdminNotFound(admin.id))?;
        *slot = admin.clone();
        Ok(())
    }

    async fn count_active(&self, zone: Option<Zone>) -> RepoResult<i64> {
        let query = AdminQuery {
            zone,
            active: Some(true),
        };
        Ok(self.list(query).await?.len() as i64)
    }
}

#[derive(Default)]
pub struct InMemoryCommunities {
    communities: RwLock<Vec<Community>>,
}

#[async_trait]
impl CommunityRepository for InMemoryCommunities {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Community>> {
        Ok(self.communities.read().iter().find(|c| c.id == id).cloned())
    }

    async fn name_exists(&self, name: &str) -> RepoResult<bool> {
        Ok(self
            .communities
            .read()
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(name.trim())))
    }

    async fn search(&self, query: &CommunityQuery) -> RepoResult<Vec<Community>> {
        let mut found: Vec<_> = self
            .communities
            .read()
            .iter()
            .filter(|c| query.matches(c))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(found)
    }

    async fn create(&self, community: &Community) -> RepoResult<()> {
        if self.name_exists(&community.name).await? {
            return Err(DomainError::CommunityNameTaken);
        }
        self.communities.write().push(community.clone());
        Ok(())
    }

    async fn update_status(&self, id: RecordId, status: ReviewStatus) -> RepoResult<()> {
        let mut communities = self.communities.write();
        let community = communities
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DomainError::CommunityNotFound(id))?;
        community.set_status(status);
        Ok(())
    }

    async fn count(&self, zone: Zone, status: ReviewStatus) -> RepoResult<i64> {
        Ok(self
            .communities
            .read()
            .iter()
            .filter(|c| c.zone == zone && c.status == status)
            .count() as i64)
    }
}

#[derive(Default)]
pub struct InMemoryMemberships {
    members: RwLock<Vec<CommunityMember>>,
}

impl InMemoryMemberships {
    fn find(&self, community_id: RecordId, user_id: RecordId) -> Option<CommunityMember> {
        self.members
            .read()
            .iter()
            .find(|m| m.community_id == community_id && m.user_id == user_id)
            .cloned()
    }
}

#[async_trait]
impl MembershipRepository for InMemoryMemberships {
    async fn add(&self, member: &CommunityMember) -> RepoResult<()> {
        if self.find(member.community_id, member.user_id).is_some() {
            return Err(DomainError::AlreadyMember);
        }
        self.members.write().push(member.clone());
        Ok(())
    }

    async fn is_member(&self, community_id: RecordId, user_id: RecordId) -> RepoResult<bool> {
        Ok(self.find(community_id, user_id).is_some())
    }

    async fn is_community_admin(
        &self,
        community_id: RecordId,
        user_id: RecordId,
    ) -> RepoResult<bool> {
        Ok(self
            .find(community_id, user_id)
            .is_some_and(|m| m.is_admin))
    }

    async fn member_count(&self, community_id: RecordId) -> RepoResult<i64> {
        Ok(self
            .members
            .read()
            .iter()
            .filter(|m| m.community_id == community_id)
            .count() as i64)
    }

    async fn memberships_for_user(&self, user_id: RecordId) -> RepoResult<Vec<CommunityMember>> {
        Ok(self
            .members
            .read()
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn admin_memberships(&self, user_id: RecordId) -> RepoResult<Vec<CommunityMember>> {
        Ok(self
            .memberships_for_user(user_id)
            .await?
            .into_iter()
            .filter(|m| m.is_admin)
            .collect())
    }
}

/// Membership store whose lookups always fail
pub struct FailingMemberships;

#[async_trait]
impl MembershipRepository for FailingMemberships {
    async fn add(&self, _member: &CommunityMember) -> RepoResult<()> {
        Err(unavailable())
    }

    async fn is_member(&self, _community_id: RecordId, _user_id: RecordId) -> RepoResult<bool> {
        Err(unavailable())
    }

    async fn is_community_admin(
        &self,
        _community_id: RecordId,
        _user_id: RecordId,
    ) -> RepoResult<bool> {
        Err(unavailable())
    }

    async fn member_count(&self, _community_id: RecordId) -> RepoResult<i64> {
        Err(unavailable())
    }

    async fn memberships_for_user(&self, _user_id: RecordId) -> RepoResult<Vec<CommunityMember>> {
        Err(unavailable())
    }

    async fn admin_memberships(&self, _user_id: RecordId) -> RepoResult<Vec<CommunityMember>> {
        Err(unavailable())
    }
}

fn unavailable() -> DomainError {
    DomainError::DatabaseError("connection refused".to_string())
}

#[derive(Default)]
pub struct InMemorySubmissions {
    submissions: RwLock<Vec<Submission>>,
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissions {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Submission>> {
        Ok(self.submissions.read().iter().find(|s| s.id == id).cloned())
    }

    async fn list(&self, query: SubmissionQuery) -> RepoResult<Vec<Submission>> {
        // newest first, like the database ordering
        let mut all = self.submissions.read().clone();
        all.reverse();
        Ok(query.apply(all))
    }

    async fn create(&self, submission: &Submission) -> RepoResult<()> {
        self.submissions.write().push(submission.clone());
        Ok(())
    }

    async fn update(&self, submission: &Submission) -> RepoResult<()> {
        let mut submissions = self.submissions.write();
        let slot = submissions
            .iter_mut()
            .find(|s| s.id == submission.id)
            .ok_or(DomainError::SubmissionNotFound(submission.id))?;
        *slot = submission.clone();
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let mut submissions = self.submissions.write();
        let before = submissions.len();
        submissions.retain(|s| s.id != id);
        if submissions.len() == before {
            return Err(DomainError::SubmissionNotFound(id));
        }
        Ok(())
    }
}

/// Events joined against the community store for the approved-only rule
pub struct InMemoryEvents {
    events: RwLock<Vec<Event>>,
    communities: Arc<InMemoryCommunities>,
}

impl InMemoryEvents {
    fn listed(&self, event: &Event) -> bool {
        self.communities
            .communities
            .read()
            .iter()
            .any(|c| c.id == event.community_id && c.is_listed())
    }
}

#[async_trait]
impl EventRepository for InMemoryEvents {
    async fn create(&self, event: &Event) -> RepoResult<()> {
        if !event.has_valid_schedule() {
            return Err(DomainError::InvalidSchedule);
        }
        self.events.write().push(event.clone());
        Ok(())
    }

    async fn list(&self, query: EventQuery) -> RepoResult<Vec<Event>> {
        let mut found: Vec<_> = self
            .events
            .read()
            .iter()
            .filter(|e| self.listed(e) && query.matches(e))
            .cloned()
            .collect();
        found.sort_by_key(|e| e.starts_at);
        Ok(found)
    }

    async fn count_upcoming(&self, zone: Zone, now: DateTime<Utc>) -> RepoResult<i64> {
        let query = EventQuery {
            zone: Some(zone),
            upcoming_at: Some(now),
        };
        Ok(self.list(query).await?.len() as i64)
    }
}

pub struct AlwaysHealthy;

#[async_trait]
impl StorageHealth for AlwaysHealthy {
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

/// Builder wired with fresh in-memory stores; override pieces before `build`
pub fn fake_builder() -> ServiceContextBuilder {
    let communities = Arc::new(InMemoryCommunities::default());
    ServiceContext::builder()
        .user_repo(Arc::new(InMemoryUsers::default()))
        .session_repo(Arc::new(InMemorySessions::default()))
        .admin_repo(Arc::new(InMemoryAdmins::default()))
        .community_repo(communities.clone())
        .membership_repo(Arc::new(InMemoryMemberships::default()))
        .submission_repo(Arc::new(InMemorySubmissions::default()))
        .event_repo(Arc::new(InMemoryEvents {
            events: RwLock::default(),
            communities,
        }))
        .storage_health(Arc::new(AlwaysHealthy))
        .jwt_service(Arc::new(JwtService::new(
            "service-test-secret-at-least-32-bytes",
            900,
            3600,
        )))
        .id_generator(Arc::new(IdGenerator::new(1)))
        .accounts(AccountsConfig {
            bootstrap_superusers: vec!["root@example.com".to_string()],
        })
}

pub fn fake_context() -> ServiceContext {
    fake_builder().build().expect("fake context is complete")
}

/// Store an account with the given role
pub async fn seed_user(ctx: &ServiceContext, username: &str, role: AccessRole) -> User {
    let mut user = User::new(
        ctx.generate_id(),
        format!("{username} name"),
        username.to_string(),
        format!("{username}@example.com"),
    );
    user.set_role(role);
    ctx.user_repo().create(&user, "unused-hash").await.unwrap();
    user
}

/// Store a community with the given status
pub async fn seed_community(
    ctx: &ServiceContext,
    name: &str,
    zone: Zone,
    status: ReviewStatus,
    creator: &User,
) -> Community {
    let mut community = Community::propose(
        ctx.generate_id(),
        name.to_string(),
        zone,
        "Bengaluru".to_string(),
        creator.id,
    );
    community.status = status;
    ctx.community_repo().create(&community).await.unwrap();
    community
}
