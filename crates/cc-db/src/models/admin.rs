//! Admin database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for admins table
#[derive(Debug, Clone, FromRow)]
pub struct AdminModel {
    pub id: i64,
    pub user_id: i64,
    pub appointed_by: i64,
    pub zone: String,
    /// `AllottedRoles` bitfield
    pub allotted_roles: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_active_at: Option<DateTime<Utc>>,
}
