//! Access service
//!
//! Evaluates role allow-lists, optionally widened to community admins.
//! A failed membership lookup never grants access.

use cc_core::entities::{AccessRole, User};
use cc_core::{AccessDecision, AccessPolicy, AllottedRoles, DomainError};
use tracing::{debug, instrument, warn};

use crate::dto::{AccessCheckQuery, AccessCheckResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Access service for role-gated operations
pub struct AccessService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccessService<'a> {
    /// Create a new AccessService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Decide whether `user` passes `policy`
    ///
    /// Listed roles are granted outright. Otherwise, when the policy asks for
    /// it, any community-admin membership grants access. Lookup errors deny.
    #[instrument(skip(self, user, policy), fields(user_id = ?user.map(|u| u.id)))]
    pub async fn authorize(&self, user: Option<&User>, policy: &AccessPolicy) -> AccessDecision {
        if policy.permits(user.map(|u| u.role)) {
            return AccessDecision::Granted;
        }

        let Some(user) = user else {
            debug!("Anonymous caller denied");
            return AccessDecision::denied();
        };

        if !policy.checks_community_admin() {
            debug!(role = %user.role, allowed = %policy.describe(), "Role not in allow-list");
            return AccessDecision::denied();
        }

        match self.ctx.membership_repo().admin_memberships(user.id).await {
            Ok(memberships) => AccessDecision::from_granted(!memberships.is_empty()),
            Err(e) => {
                warn!(user_id = %user.id, error = %e, "Community admin lookup failed, denying access");
                AccessDecision::denied()
            }
        }
    }

    /// Like [`authorize`](Self::authorize) but turns a denial into an error
    #[instrument(skip(self, user, policy), fields(user_id = %user.id))]
    pub async fn require(&self, user: &User, policy: &AccessPolicy) -> ServiceResult<()> {
        match self.authorize(Some(user), policy).await {
            AccessDecision::Granted => Ok(()),
            AccessDecision::Denied { .. } => {
                warn!(role = %user.role, allowed = %policy.describe(), "Access denied");
                Err(DomainError::AccessDenied(policy.describe()).into())
            }
        }
    }

    /// Admin-role accounts need an active admin record carrying `duty`
    ///
    /// Superusers and moderators are not bound by allotted roles.
    #[instrument(skip(self, actor), fields(actor_id = %actor.id, duty = %duty))]
    pub async fn require_duty(&self, actor: &User, duty: AllottedRoles) -> ServiceResult<()> {
        if actor.role != AccessRole::Admin {
            return Ok(());
        }

        let Some(admin) = self.ctx.admin_repo().find_by_user(actor.id).await? else {
            warn!("Admin role without an admin record");
            return Err(DomainError::AccessDenied(duty.names().join(", ")).into());
        };
        if !admin.is_active {
            return Err(DomainError::AdminInactive.into());
        }
        if !admin.has_duty(duty) {
            warn!(admin_id = %admin.id, "Duty not in allotted roles");
            return Err(DomainError::AccessDenied(duty.names().join(", ")).into());
        }
        Ok(())
    }

    /// Guard check for the frontend; unknown role names are rejected
    #[instrument(skip(self, user, query), fields(user_id = ?user.map(|u| u.id)))]
    pub async fn check(
        &self,
        user: Option<&User>,
        query: &AccessCheckQuery,
    ) -> ServiceResult<AccessCheckResponse> {
        let mut policy = AccessPolicy::from_role_names(query.role_names())?;
        if query.community_admin {
            policy = policy.or_community_admin();
        }

        let decision = self.authorize(user, &policy).await;
        Ok(AccessCheckResponse {
            authorized: decision.is_granted(),
            redirect: decision.redirect(),
        })
    }
}
