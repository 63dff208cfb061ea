//! Admin team handlers
//!
//! Listing is open to admins; every change is superuser-only.

use axum::{extract::State, Json};
use cc_core::RecordId;
use cc_service::dto::{AdminListQuery, AdminResponse, AppointAdminRequest, UpdateAdminRequest};
use cc_service::AdminService;

use crate::extractors::{AuthUser, QueryParams, RecordPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List the admin team
///
/// GET /admins?zone=&active=
pub async fn list_admins(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<AdminListQuery>,
) -> ApiResult<Json<Vec<AdminResponse>>> {
    let service = AdminService::new(state.service_context());
    let response = service.list(&auth.user, query).await?;
    Ok(Json(response))
}

/// Appoint an account to the admin team
///
/// POST /admins
pub async fn appoint_admin(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<AppointAdminRequest>,
) -> ApiResult<Created<Json<AdminResponse>>> {
    let service = AdminService::new(state.service_context());
    let response = service.appoint(&auth.user, request).await?;
    Ok(Created(Json(response)))
}

/// Change zone and/or allotted roles
///
/// PATCH /admins/{admin_id}
pub async fn update_admin(
    State(state): State<AppState>,
    auth: AuthUser,
    RecordPath(admin_id): RecordPath<RecordId>,
    ValidatedJson(request): ValidatedJson<UpdateAdminRequest>,
) -> ApiResult<Json<AdminResponse>> {
    let service = AdminService::new(state.service_context());
    let response = service.update(&auth.user, admin_id, request).await?;
    Ok(Json(response))
}

/// Soft-deactivate an admin
///
/// DELETE /admins/{admin_id}
pub async fn deactivate_admin(
    State(state): State<AppState>,
    auth: AuthUser,
    RecordPath(admin_id): RecordPath<RecordId>,
) -> ApiResult<Json<AdminResponse>> {
    let service = AdminService::new(state.service_context());
    let response = service.deactivate(&auth.user, admin_id).await?;
    Ok(Json(response))
}

/// Undo a deactivation
///
/// POST /admins/{admin_id}/reactivate
pub async fn reactivate_admin(
    State(state): State<AppState>,
    auth: AuthUser,
    RecordPath(admin_id): RecordPath<RecordId>,
) -> ApiResult<Json<AdminResponse>> {
    let service = AdminService::new(state.service_context());
    let response = service.reactivate(&auth.user, admin_id).await?;
    Ok(Json(response))
}
