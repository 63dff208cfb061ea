//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate` for input validation.
//! Query-string DTOs keep enum-valued parameters as strings so unknown
//! values surface as domain errors naming the offending value.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use cc_core::entities::{ReviewStatus, Zone};
use cc_core::RecordId;

// ============================================================================
// Auth Requests
// ============================================================================

/// Account registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (optional refresh token to revoke; all sessions otherwise)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// Access
// ============================================================================

/// `GET /access/check?roles=admin,superuser&community_admin=true`
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AccessCheckQuery {
    /// Comma separated role names
    #[serde(default)]
    pub roles: String,

    #[serde(default)]
    pub community_admin: bool,
}

impl AccessCheckQuery {
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

// ============================================================================
// Admin Requests
// ============================================================================

/// Appoint an existing account to the admin team
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppointAdminRequest {
    pub user_id: RecordId,

    pub zone: Zone,

    #[validate(length(max = 6, message = "At most 6 allotted roles"))]
    #[serde(default)]
    pub allotted_roles: Vec<String>,
}

/// Change an admin's zone and/or duties
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateAdminRequest {
    pub zone: Option<Zone>,

    #[validate(length(max = 6, message = "At most 6 allotted roles"))]
    pub allotted_roles: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AdminListQuery {
    pub zone: Option<String>,
    pub active: Option<bool>,
}

// ============================================================================
// Community Requests
// ============================================================================

/// Propose a new community
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommunityRequest {
    #[validate(length(min = 2, max = 100, message = "Community name must be 2-100 characters"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub zone: Zone,

    #[validate(length(min = 1, max = 100, message = "City must be 1-100 characters"))]
    pub city: String,

    #[validate(length(max = 20, message = "At most 20 tags"))]
    #[serde(default)]
    pub tags: Vec<String>,

    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,

    /// Platform name -> profile URL
    #[serde(default)]
    pub social_links: BTreeMap<String, String>,
}

/// Move a community through review
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ReviewStatus,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CommunitySearchQuery {
    pub q: Option<String>,
    pub zone: Option<String>,
    pub status: Option<String>,
}

// ============================================================================
// Submission Requests
// ============================================================================

/// `GET /submissions/:kind` parameters
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SubmissionListQuery {
    /// Exact status to keep; everything when absent
    pub status: Option<String>,

    /// Record field surfaced as each row's `role`
    pub role_field: Option<String>,

    /// Table heading; the kind's display title when absent
    pub title: Option<String>,
}

/// Review decision on a submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewSubmissionRequest {
    pub status: ReviewStatus,

    #[validate(length(max = 1000, message = "Note must be at most 1000 characters"))]
    pub note: Option<String>,
}

// ============================================================================
// Event Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 4000, message = "Description must be at most 4000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 200, message = "Venue must be at most 200 characters"))]
    pub venue: Option<String>,

    #[serde(default)]
    pub is_online: bool,

    #[validate(url(message = "Event link must be a valid URL"))]
    pub url: Option<String>,

    pub starts_at: DateTime<Utc>,

    pub ends_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct EventListQuery {
    pub zone: Option<String>,

    /// Only events that have not finished; defaults to true
    pub upcoming: Option<bool>,
}
