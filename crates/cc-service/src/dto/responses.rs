//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Record ids are serialized as strings for JavaScript compatibility.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use cc_core::entities::{AccessRole, BadgeColor, ReviewStatus, SubmissionKind, Zone};
use cc_core::FieldDescriptor;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

/// Result of a client-side guard check
#[derive(Debug, Clone, Serialize)]
pub struct AccessCheckResponse {
    pub authorized: bool,
    /// Where to send the caller when not authorized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<&'static str>,
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated account
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: AccessRole,
    pub created_at: DateTime<Utc>,
}

/// One of the caller's community memberships
#[derive(Debug, Clone, Serialize)]
pub struct MembershipResponse {
    pub community_id: String,
    pub community_name: String,
    pub zone: Zone,
    pub status: ReviewStatus,
    pub is_admin: bool,
    pub joined_at: DateTime<Utc>,
}

// ============================================================================
// Admin Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AdminResponse {
    pub id: String,
    pub user_id: String,
    pub appointed_by: String,
    pub zone: Zone,
    pub allotted_roles: Vec<&'static str>,
    pub name: String,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_active_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Community Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CommunityResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub zone: Zone,
    pub city: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub social_links: BTreeMap<String, String>,
    pub status: ReviewStatus,
    pub badge: BadgeColor,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// Community with its member count
#[derive(Debug, Clone, Serialize)]
pub struct CommunityDetailResponse {
    #[serde(flatten)]
    pub community: CommunityResponse,
    pub member_count: i64,
}

// ============================================================================
// Submission Responses
// ============================================================================

/// Full submission record
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub id: String,
    pub kind: SubmissionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_id: Option<String>,
    pub fields: BTreeMap<String, String>,
    pub status: ReviewStatus,
    pub badge: BadgeColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_note: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
}

/// One row of the review table
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRow {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub status: ReviewStatus,
    pub badge: BadgeColor,
    /// `dd/mm/yyyy` in Indian Standard Time
    pub submitted_on: String,
    pub fields: BTreeMap<String, String>,
}

/// A submissions collection rendered as a review table
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionTable {
    pub title: String,
    pub kind: SubmissionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<ReviewStatus>,
    pub total: usize,
    pub empty: bool,
    pub rows: Vec<SubmissionRow>,
}

impl SubmissionTable {
    pub fn new(
        title: String,
        kind: SubmissionKind,
        status_filter: Option<ReviewStatus>,
        rows: Vec<SubmissionRow>,
    ) -> Self {
        Self {
            title,
            kind,
            status_filter,
            total: rows.len(),
            empty: rows.is_empty(),
            rows,
        }
    }
}

// ============================================================================
// Form Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct FormSchemaResponse {
    pub kind: SubmissionKind,
    pub title: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

// ============================================================================
// Event Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: String,
    pub community_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub zone: Zone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub is_online: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub starts_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Zone Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ZoneStatsResponse {
    pub zone: Zone,
    pub label: &'static str,
    pub approved_communities: i64,
    pub pending_communities: i64,
    pub upcoming_events: i64,
    pub active_admins: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoneDetailResponse {
    #[serde(flatten)]
    pub stats: ZoneStatsResponse,
    pub communities: Vec<CommunityResponse>,
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
