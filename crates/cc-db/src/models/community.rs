//! Community and membership database models

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use std::collections::BTreeMap;

/// Database model for communities table
#[derive(Debug, Clone, FromRow)]
pub struct CommunityModel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub zone: String,
    pub city: String,
    pub tags: Vec<String>,
    pub website: Option<String>,
    pub social_links: Json<BTreeMap<String, String>>,
    pub status: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for community_members table
#[derive(Debug, Clone, FromRow)]
pub struct CommunityMemberModel {
    pub community_id: i64,
    pub user_id: i64,
    pub is_admin: bool,
    pub joined_at: DateTime<Utc>,
}
