//! Path parameter extractor

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Path parameters with a JSON error on mismatch
///
/// Record ids deserialize straight from their decimal string form, so
/// `RecordPath<RecordId>` and `RecordPath<(String, RecordId)>` both work.
#[derive(Debug, Clone)]
pub struct RecordPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for RecordPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(RecordPath(inner))
    }
}
