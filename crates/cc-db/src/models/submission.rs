//! Submission database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use std::collections::BTreeMap;

/// Database model for submissions table
#[derive(Debug, Clone, FromRow)]
pub struct SubmissionModel {
    pub id: i64,
    pub kind: String,
    pub submitted_by: Option<i64>,
    pub name: String,
    pub email: String,
    pub community_id: Option<i64>,
    pub fields: Json<BTreeMap<String, String>>,
    pub status: String,
    pub reviewed_by: Option<i64>,
    pub review_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}
