//! Authentication service
//!
//! Handles account registration, login, token refresh, and logout.
//! Every token pair belongs to a stored session; refresh rotates it and
//! logout revokes it.

use cc_common::auth::{hash_password, validate_password_strength, verify_password};
use cc_common::AppError;
use cc_core::entities::{AccessRole, User};
use cc_core::traits::Session;
use cc_core::{DomainError, RecordId};
use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{
    AuthResponse, CurrentUserResponse, LoginRequest, LogoutRequest, RefreshTokenRequest,
    RegisterRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password)?;

        let email = request.email.trim().to_string();
        let username = request.username.trim().to_string();

        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }
        if self.ctx.user_repo().username_exists(&username).await? {
            return Err(DomainError::UsernameAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;

        let mut user = User::new(
            self.ctx.generate_id(),
            request.name.trim().to_string(),
            username,
            email,
        );
        if self.ctx.accounts().is_bootstrap_superuser(&user.email) {
            user.set_role(AccessRole::Superuser);
            info!(user_id = %user.id, "Bootstrap superuser registered");
        }

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, role = %user.role, "Account registered");

        self.open_session(&user).await
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(request.email.trim())
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        self.touch_admin(user.id).await?;

        info!(user_id = %user.id, "Logged in");

        self.open_session(&user).await
    }

    /// Exchange a refresh token for a new pair, rotating the session
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;
        let user_id = claims.user_id()?;

        let session = self
            .ctx
            .session_repo()
            .find_active(&claims.sid)
            .await?
            .filter(|s| s.user_id == user_id)
            .ok_or_else(|| {
                warn!(user_id = %user_id, "Refresh with revoked or expired session");
                ServiceError::App(AppError::SessionRevoked)
            })?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        self.ctx.session_repo().revoke(&session.id).await?;

        info!(user_id = %user.id, "Session rotated");

        self.open_session(&user).await
    }

    /// Revoke the session behind `refresh_token`, or every session of the user
    #[instrument(skip(self, request))]
    pub async fn logout(&self, user_id: RecordId, request: LogoutRequest) -> ServiceResult<()> {
        match request.refresh_token {
            Some(token) => {
                let claims = self.ctx.jwt_service().validate_refresh_token(&token)?;
                if claims.user_id()? != user_id {
                    return Err(AppError::InvalidToken.into());
                }
                self.ctx.session_repo().revoke(&claims.sid).await?;
                info!(user_id = %user_id, "Logged out");
            }
            None => {
                let revoked = self.ctx.session_repo().revoke_all_for_user(user_id).await?;
                info!(user_id = %user_id, revoked, "Logged out everywhere");
            }
        }
        Ok(())
    }

    /// Resolve an access token to its account id; the session must still be live
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<RecordId> {
        let claims = self.ctx.jwt_service().validate_access_token(token)?;
        let user_id = claims.user_id()?;

        let live = self
            .ctx
            .session_repo()
            .find_active(&claims.sid)
            .await?
            .is_some_and(|s| s.user_id == user_id);
        if !live {
            return Err(AppError::SessionRevoked.into());
        }

        Ok(user_id)
    }

    async fn open_session(&self, user: &User) -> ServiceResult<AuthResponse> {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4().to_string(),
            user_id: user.id,
            created_at: now,
            expires_at: self.ctx.jwt_service().session_expiry(now),
        };
        self.ctx.session_repo().create(&session).await?;

        let pair = self.ctx.jwt_service().issue(user.id, &session.id)?;

        Ok(AuthResponse::new(
            pair.access_token,
            pair.refresh_token,
            pair.expires_in,
            CurrentUserResponse::from(user),
        ))
    }

    async fn touch_admin(&self, user_id: RecordId) -> ServiceResult<()> {
        if let Some(mut admin) = self.ctx.admin_repo().find_by_user(user_id).await? {
            if admin.is_active {
                admin.touch();
                self.ctx.admin_repo().update(&admin).await?;
            }
        }
        Ok(())
    }
}
