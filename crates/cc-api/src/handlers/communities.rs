//! Community handlers

use axum::{extract::State, Json};
use cc_core::RecordId;
use cc_service::dto::{
    CommunityDetailResponse, CommunityResponse, CommunitySearchQuery, CreateCommunityRequest,
    CreateEventRequest, EventResponse, MembershipResponse, UpdateStatusRequest,
};
use cc_service::{CommunityService, EventService};

use crate::extractors::{
    AuthUser, JsonBody, OptionalAuthUser, QueryParams, RecordPath, ValidatedJson,
};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Search the directory
///
/// GET /communities?q=&zone=&status=
pub async fn search_communities(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    QueryParams(query): QueryParams<CommunitySearchQuery>,
) -> ApiResult<Json<Vec<CommunityResponse>>> {
    let service = CommunityService::new(state.service_context());
    let response = service.search(auth.user(), query).await?;
    Ok(Json(response))
}

/// Get a community with its member count
///
/// GET /communities/{community_id}
pub async fn get_community(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    RecordPath(community_id): RecordPath<RecordId>,
) -> ApiResult<Json<CommunityDetailResponse>> {
    let service = CommunityService::new(state.service_context());
    let response = service.get(auth.user(), community_id).await?;
    Ok(Json(response))
}

/// Propose a community
///
/// POST /communities
pub async fn create_community(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCommunityRequest>,
) -> ApiResult<Created<Json<CommunityResponse>>> {
    let service = CommunityService::new(state.service_context());
    let response = service.create(&auth.user, request).await?;
    Ok(Created(Json(response)))
}

/// Approve, reject or flag a community
///
/// PATCH /communities/{community_id}/status
pub async fn update_community_status(
    State(state): State<AppState>,
    auth: AuthUser,
    RecordPath(community_id): RecordPath<RecordId>,
    JsonBody(request): JsonBody<UpdateStatusRequest>,
) -> ApiResult<Json<CommunityResponse>> {
    let service = CommunityService::new(state.service_context());
    let response = service.set_status(&auth.user, community_id, request).await?;
    Ok(Json(response))
}

/// Join an approved community
///
/// POST /communities/{community_id}/members
pub async fn join_community(
    State(state): State<AppState>,
    auth: AuthUser,
    RecordPath(community_id): RecordPath<RecordId>,
) -> ApiResult<Created<Json<MembershipResponse>>> {
    let service = CommunityService::new(state.service_context());
    let response = service.join(&auth.user, community_id).await?;
    Ok(Created(Json(response)))
}

/// Publish an event for a community
///
/// POST /communities/{community_id}/events
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    RecordPath(community_id): RecordPath<RecordId>,
    ValidatedJson(request): ValidatedJson<CreateEventRequest>,
) -> ApiResult<Created<Json<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let response = service.create(&auth.user, community_id, request).await?;
    Ok(Created(Json(response)))
}
