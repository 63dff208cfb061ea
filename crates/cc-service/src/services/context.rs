//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use cc_common::auth::JwtService;
use cc_common::AccountsConfig;
use cc_core::traits::{
    AdminRepository, CommunityRepository, EventRepository, StorageHealth, MembershipRepository,
    SessionRepository, SubmissionRepository, UserRepository,
};
use cc_core::{IdGenerator, RecordId};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories (behind the cc-core traits)
/// - A storage health check
/// - JWT service for authentication
/// - Record id generator
/// - Account provisioning settings
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    session_repo: Arc<dyn SessionRepository>,
    admin_repo: Arc<dyn AdminRepository>,
    community_repo: Arc<dyn CommunityRepository>,
    membership_repo: Arc<dyn MembershipRepository>,
    submission_repo: Arc<dyn SubmissionRepository>,
    event_repo: Arc<dyn EventRepository>,
    storage_health: Arc<dyn StorageHealth>,

    // Services
    jwt_service: Arc<JwtService>,
    id_generator: Arc<IdGenerator>,
    accounts: AccountsConfig,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn session_repo(&self) -> &dyn SessionRepository {
        self.session_repo.as_ref()
    }

    pub fn admin_repo(&self) -> &dyn AdminRepository {
        self.admin_repo.as_ref()
    }

    pub fn community_repo(&self) -> &dyn CommunityRepository {
        self.community_repo.as_ref()
    }

    pub fn membership_repo(&self) -> &dyn MembershipRepository {
        self.membership_repo.as_ref()
    }

    pub fn submission_repo(&self) -> &dyn SubmissionRepository {
        self.submission_repo.as_ref()
    }

    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Storage liveness check used by the readiness endpoint
    pub fn storage_health(&self) -> &dyn StorageHealth {
        self.storage_health.as_ref()
    }

    // === Services ===

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn accounts(&self) -> &AccountsConfig {
        &self.accounts
    }

    /// Generate a new record id
    pub fn generate_id(&self) -> RecordId {
        self.id_generator.next_id()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("worker_id", &self.id_generator.worker_id())
            .field("accounts", &self.accounts)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    session_repo: Option<Arc<dyn SessionRepository>>,
    admin_repo: Option<Arc<dyn AdminRepository>>,
    community_repo: Option<Arc<dyn CommunityRepository>>,
    membership_repo: Option<Arc<dyn MembershipRepository>>,
    submission_repo: Option<Arc<dyn SubmissionRepository>>,
    event_repo: Option<Arc<dyn EventRepository>>,
    storage_health: Option<Arc<dyn StorageHealth>>,
    jwt_service: Option<Arc<JwtService>>,
    id_generator: Option<Arc<IdGenerator>>,
    accounts: AccountsConfig,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn session_repo(mut self, repo: Arc<dyn SessionRepository>) -> Self {
        self.session_repo = Some(repo);
        self
    }

    pub fn admin_repo(mut self, repo: Arc<dyn AdminRepository>) -> Self {
        self.admin_repo = Some(repo);
        self
    }

    pub fn community_repo(mut self, repo: Arc<dyn CommunityRepository>) -> Self {
        self.community_repo = Some(repo);
        self
    }

    pub fn membership_repo(mut self, repo: Arc<dyn MembershipRepository>) -> Self {
        self.membership_repo = Some(repo);
        self
    }

    pub fn submission_repo(mut self, repo: Arc<dyn SubmissionRepository>) -> Self {
        self.submission_repo = Some(repo);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn storage_health(mut self, check: Arc<dyn StorageHealth>) -> Self {
        self.storage_health = Some(check);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn id_generator(mut self, generator: Arc<IdGenerator>) -> Self {
        self.id_generator = Some(generator);
        self
    }

    pub fn accounts(mut self, accounts: AccountsConfig) -> Self {
        self.accounts = accounts;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::internal(format!("{name} is required")))
        }

        Ok(ServiceContext {
            user_repo: required(self.user_repo, "user_repo")?,
            session_repo: required(self.session_repo, "session_repo")?,
            admin_repo: required(self.admin_repo, "admin_repo")?,
            community_repo: required(self.community_repo, "community_repo")?,
            membership_repo: required(self.membership_repo, "membership_repo")?,
            submission_repo: required(self.submission_repo, "submission_repo")?,
            event_repo: required(self.event_repo, "event_repo")?,
            storage_health: required(self.storage_health, "storage_health")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            id_generator: required(self.id_generator, "id_generator")?,
            accounts: self.accounts,
        })
    }
}
