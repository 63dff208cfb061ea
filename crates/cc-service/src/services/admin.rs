//! Admin team service
//!
//! Superusers appoint accounts to the admin team, reassign their zone and
//! duties, and soft-deactivate them. The account's access role follows the
//! appointment: admin while active, member once deactivated.

use cc_core::entities::{AccessRole, Admin, User};
use cc_core::traits::AdminQuery;
use cc_core::{AccessPolicy, AllottedRoles, DomainError, RecordId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{AdminListQuery, AdminResponse, AppointAdminRequest, UpdateAdminRequest};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::parse_param;
use super::user::UserService;

/// Admin team service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the admin team
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn list(&self, actor: &User, query: AdminListQuery) -> ServiceResult<Vec<AdminResponse>> {
        AccessService::new(self.ctx)
            .require(actor, &AccessPolicy::admins())
            .await?;

        let query = AdminQuery {
            zone: parse_param(query.zone.as_deref())?,
            active: query.active,
        };
        let admins = self.ctx.admin_repo().list(query).await?;

        Ok(admins.iter().map(AdminResponse::from).collect())
    }

    /// Appoint an existing account to the admin team
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id, user_id = %request.user_id))]
    pub async fn appoint(&self, actor: &User, request: AppointAdminRequest) -> ServiceResult<AdminResponse> {
        self.require_superuser(actor).await?;
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let allotted_roles = AllottedRoles::from_names(&request.allotted_roles)?;
        let appointee = UserService::new(self.ctx)
            .get_user_entity(request.user_id)
            .await?;

        if self.ctx.admin_repo().find_by_user(appointee.id).await?.is_some() {
            return Err(DomainError::AlreadyAdmin.into());
        }

        let admin = Admin::appoint(
            self.ctx.generate_id(),
            &appointee,
            actor.id,
            request.zone,
            allotted_roles,
        );
        self.ctx.admin_repo().create(&admin).await?;
        self.sync_role(&appointee, AccessRole::Admin).await?;

        info!(admin_id = %admin.id, zone = %admin.zone, "Admin appointed");

        Ok(AdminResponse::from(&admin))
    }

    /// Change zone and/or allotted roles
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id))]
    pub async fn update(
        &self,
        actor: &User,
        admin_id: RecordId,
        request: UpdateAdminRequest,
    ) -> ServiceResult<AdminResponse> {
        self.require_superuser(actor).await?;
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let allotted_roles = request
            .allotted_roles
            .as_deref()
            .map(AllottedRoles::from_names)
            .transpose()?;

        let mut admin = self.get_admin(admin_id).await?;
        if request.zone.is_none() && allotted_roles.is_none() {
            return Ok(AdminResponse::from(&admin));
        }

        admin.reassign(request.zone, allotted_roles);
        self.ctx.admin_repo().update(&admin).await?;

        info!(
            admin_id = %admin.id,
            zone = %admin.zone,
            allotted_roles = ?admin.allotted_roles.names(),
            "Admin reassigned"
        );

        Ok(AdminResponse::from(&admin))
    }

    /// Soft-deactivate an admin and demote the account
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn deactivate(&self, actor: &User, admin_id: RecordId) -> ServiceResult<AdminResponse> {
        self.require_superuser(actor).await?;

        let mut admin = self.get_admin(admin_id).await?;
        if admin.user_id == actor.id {
            return Err(DomainError::CannotDeactivateSelf.into());
        }
        if !admin.is_active {
            return Ok(AdminResponse::from(&admin));
        }

        admin.deactivate();
        self.ctx.admin_repo().update(&admin).await?;

        let account = UserService::new(self.ctx).get_user_entity(admin.user_id).await?;
        self.sync_role(&account, AccessRole::Member).await?;

        info!(admin_id = %admin.id, "Admin deactivated");

        Ok(AdminResponse::from(&admin))
    }

    /// Undo a deactivation
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn reactivate(&self, actor: &User, admin_id: RecordId) -> ServiceResult<AdminResponse> {
        self.require_superuser(actor).await?;

        let mut admin = self.get_admin(admin_id).await?;
        if admin.is_active {
            return Ok(AdminResponse::from(&admin));
        }

        admin.reactivate();
        self.ctx.admin_repo().update(&admin).await?;

        let account = UserService::new(self.ctx).get_user_entity(admin.user_id).await?;
        self.sync_role(&account, AccessRole::Admin).await?;

        info!(admin_id = %admin.id, "Admin reactivated");

        Ok(AdminResponse::from(&admin))
    }

    async fn get_admin(&self, admin_id: RecordId) -> ServiceResult<Admin> {
        self.ctx
            .admin_repo()
            .find_by_id(admin_id)
            .await?
            .ok_or_else(|| DomainError::AdminNotFound(admin_id).into())
    }

    async fn require_superuser(&self, actor: &User) -> ServiceResult<()> {
        AccessService::new(self.ctx)
            .require(actor, &AccessPolicy::superusers())
            .await
    }

    /// Superusers keep their role whatever happens to their admin record
    async fn sync_role(&self, account: &User, role: AccessRole) -> ServiceResult<()> {
        if account.role == AccessRole::Superuser || account.role == role {
            return Ok(());
        }
        self.ctx.user_repo().update_role(account.id, role).await?;
        Ok(())
    }
}
