//! Zone statistics handlers

use axum::{extract::State, Json};
use cc_service::dto::{ZoneDetailResponse, ZoneStatsResponse};
use cc_service::ZoneService;

use crate::extractors::RecordPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// Counts for every zone
///
/// GET /zones
pub async fn list_zones(State(state): State<AppState>) -> ApiResult<Json<Vec<ZoneStatsResponse>>> {
    let service = ZoneService::new(state.service_context());
    let response = service.stats().await?;
    Ok(Json(response))
}

/// One zone with its approved communities
///
/// GET /zones/{zone}
pub async fn get_zone(
    State(state): State<AppState>,
    RecordPath(zone): RecordPath<String>,
) -> ApiResult<Json<ZoneDetailResponse>> {
    let service = ZoneService::new(state.service_context());
    let response = service.detail(&zone).await?;
    Ok(Json(response))
}
