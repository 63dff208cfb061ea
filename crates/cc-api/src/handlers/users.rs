//! Account handlers

use axum::{extract::State, Json};
use cc_service::dto::{CurrentUserResponse, MembershipResponse};
use cc_service::UserService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Current account
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current_user(auth.id()).await?;
    Ok(Json(response))
}

/// Communities the caller belongs to
///
/// GET /users/@me/memberships
pub async fn get_memberships(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<MembershipResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.memberships(auth.id()).await?;
    Ok(Json(response))
}
