//! Access guard handler

use axum::{extract::State, Json};
use cc_service::dto::{AccessCheckQuery, AccessCheckResponse};
use cc_service::AccessService;

use crate::extractors::{OptionalAuthUser, QueryParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// Would the caller pass this allow-list?
///
/// GET /access/check?roles=admin,superuser&community_admin=true
pub async fn check_access(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    QueryParams(query): QueryParams<AccessCheckQuery>,
) -> ApiResult<Json<AccessCheckResponse>> {
    let service = AccessService::new(state.service_context());
    let response = service.check(auth.user(), &query).await?;
    Ok(Json(response))
}
