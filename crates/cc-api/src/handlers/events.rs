//! Event listing handler

use axum::{extract::State, Json};
use cc_service::dto::{EventListQuery, EventResponse};
use cc_service::EventService;

use crate::extractors::QueryParams;
use crate::response::ApiResult;
use crate::state::AppState;

/// Events of approved communities, soonest first
///
/// GET /events?zone=&upcoming=
pub async fn list_events(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<EventListQuery>,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let response = service.list(query).await?;
    Ok(Json(response))
}
