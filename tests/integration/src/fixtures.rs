//! Test fixtures and data generators
//!
//! Names are suffixed with a fresh uuid so repeated runs against the same
//! database never collide.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..10].to_string()
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test User {suffix}"),
            username: format!("user{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Current account
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Community proposal body
pub fn community_request(zone: &str) -> Value {
    let suffix = unique_suffix();
    json!({
        "name": format!("Test Community {suffix}"),
        "description": "Monthly meetups and workshops",
        "zone": zone,
        "city": "Pune",
        "tags": ["Rust", "rust", " systems "],
        "social_links": { "github": "https://github.com/example" }
    })
}

/// Community response
#[derive(Debug, Deserialize)]
pub struct CommunityResponse {
    pub id: String,
    pub name: String,
    pub zone: String,
    pub tags: Vec<String>,
    pub status: String,
    pub badge: String,
    pub created_by: String,
}

/// Event body starting `days` from now and lasting two hours
pub fn event_request(title: &str, days: i64) -> Value {
    let starts_at: DateTime<Utc> = Utc::now() + Duration::days(days);
    json!({
        "title": title,
        "is_online": true,
        "url": "https://meet.example.com/test",
        "starts_at": starts_at,
        "ends_at": starts_at + Duration::hours(2)
    })
}

/// Volunteer form body for a unique applicant
pub fn volunteer_form() -> Value {
    let suffix = unique_suffix();
    json!({
        "name": format!("Volunteer {suffix}"),
        "email": format!("volunteer{suffix}@example.com"),
        "role": "logistics",
        "availability": "weekends"
    })
}

/// Stored submission
#[derive(Debug, Deserialize)]
pub struct SubmissionResponse {
    pub id: String,
    pub kind: String,
    pub name: String,
    pub status: String,
    pub submitted_by: Option<String>,
    pub review_note: Option<String>,
}

/// Review table row
#[derive(Debug, Deserialize)]
pub struct SubmissionRow {
    pub id: String,
    pub name: String,
    pub status: String,
    pub badge: String,
    pub submitted_on: String,
}

/// Review table
#[derive(Debug, Deserialize)]
pub struct SubmissionTable {
    pub title: String,
    pub kind: String,
    pub total: usize,
    pub empty: bool,
    pub rows: Vec<SubmissionRow>,
}

/// Admin record
#[derive(Debug, Deserialize)]
pub struct AdminResponse {
    pub id: String,
    pub user_id: String,
    pub zone: String,
    pub allotted_roles: Vec<String>,
    pub is_active: bool,
}
