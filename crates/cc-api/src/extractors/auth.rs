//! Authentication extractor
//!
//! Resolves the Bearer token to a live session and loads the account, so
//! handlers always see the stored role.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use cc_common::AppError;
use cc_core::entities::User;
use cc_core::RecordId;
use cc_service::{AuthService, ServiceError, UserService};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated account
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    pub fn id(&self) -> RecordId {
        self.user.id
    }

    async fn resolve(state: &AppState, token: &str) -> Result<Self, ApiError> {
        let ctx = state.service_context();
        let user_id = AuthService::new(ctx).authenticate(token).await.map_err(|e| {
            tracing::warn!(error = %e, "Rejected access token");
            ApiError::from(e)
        })?;

        let user = UserService::new(ctx)
            .get_user_entity(user_id)
            .await
            .map_err(|e| match e {
                ServiceError::Domain(d) if d.is_not_found() => {
                    tracing::warn!(user_id = %user_id, "Token for a missing account");
                    ApiError::App(AppError::InvalidToken)
                }
                other => ApiError::from(other),
            })?;

        Ok(Self { user })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        Self::resolve(&app_state, bearer.token()).await
    }
}

/// Optional authenticated account
///
/// `None` when no Authorization header is sent; a bad token is still an error.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    pub fn user(&self) -> Option<&User> {
        self.0.as_ref().map(|auth| &auth.user)
    }

    pub fn id(&self) -> Option<RecordId> {
        self.0.as_ref().map(AuthUser::id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await {
            Ok(TypedHeader(Authorization(bearer))) => {
                let app_state = AppState::from_ref(state);
                let auth = AuthUser::resolve(&app_state, bearer.token()).await?;
                Ok(OptionalAuthUser(Some(auth)))
            }
            Err(_) => Ok(OptionalAuthUser(None)),
        }
    }
}
