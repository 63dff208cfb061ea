//! Form handlers
//!
//! Anyone may submit a form; a signed-in submitter is recorded.

use axum::{extract::State, Json};
use cc_service::dto::{FormSchemaResponse, SubmissionResponse};
use cc_service::FormService;
use serde_json::Value;

use crate::extractors::{JsonBody, OptionalAuthUser, RecordPath};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Field schema of a form
///
/// GET /forms/{kind}
pub async fn get_form_schema(
    State(state): State<AppState>,
    RecordPath(kind): RecordPath<String>,
) -> ApiResult<Json<FormSchemaResponse>> {
    let service = FormService::new(state.service_context());
    let response = service.schema(&kind)?;
    Ok(Json(response))
}

/// Submit a form
///
/// POST /forms/{kind}
pub async fn submit_form(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    RecordPath(kind): RecordPath<String>,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<Created<Json<SubmissionResponse>>> {
    let service = FormService::new(state.service_context());
    let response = service.submit(auth.id(), &kind, body).await?;
    Ok(Created(Json(response)))
}
