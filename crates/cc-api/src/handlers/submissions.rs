//! Submission review handlers
//!
//! Gated to moderators, admins and superusers; deletion to admins.

use axum::{extract::State, Json};
use cc_core::RecordId;
use cc_service::dto::{
    ReviewSubmissionRequest, SubmissionListQuery, SubmissionResponse, SubmissionTable,
};
use cc_service::SubmissionService;

use crate::extractors::{AuthUser, QueryParams, RecordPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Review table for one kind of submission
///
/// GET /submissions/{kind}?status=&role_field=&title=
pub async fn list_submissions(
    State(state): State<AppState>,
    auth: AuthUser,
    RecordPath(kind): RecordPath<String>,
    QueryParams(query): QueryParams<SubmissionListQuery>,
) -> ApiResult<Json<SubmissionTable>> {
    let service = SubmissionService::new(state.service_context());
    let response = service.table(&auth.user, &kind, query).await?;
    Ok(Json(response))
}

/// GET /submissions/{kind}/{submission_id}
pub async fn get_submission(
    State(state): State<AppState>,
    auth: AuthUser,
    RecordPath((kind, submission_id)): RecordPath<(String, RecordId)>,
) -> ApiResult<Json<SubmissionResponse>> {
    let service = SubmissionService::new(state.service_context());
    let response = service.get(&auth.user, &kind, submission_id).await?;
    Ok(Json(response))
}

/// Record a review decision
///
/// PATCH /submissions/{kind}/{submission_id}
pub async fn review_submission(
    State(state): State<AppState>,
    auth: AuthUser,
    RecordPath((kind, submission_id)): RecordPath<(String, RecordId)>,
    ValidatedJson(request): ValidatedJson<ReviewSubmissionRequest>,
) -> ApiResult<Json<SubmissionResponse>> {
    let service = SubmissionService::new(state.service_context());
    let response = service
        .review(&auth.user, &kind, submission_id, request)
        .await?;
    Ok(Json(response))
}

/// DELETE /submissions/{kind}/{submission_id}
pub async fn delete_submission(
    State(state): State<AppState>,
    auth: AuthUser,
    RecordPath((kind, submission_id)): RecordPath<(String, RecordId)>,
) -> ApiResult<NoContent> {
    let service = SubmissionService::new(state.service_context());
    service.delete(&auth.user, &kind, submission_id).await?;
    Ok(NoContent)
}
