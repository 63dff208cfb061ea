//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use chrono::{DateTime, FixedOffset, Utc};

use cc_core::entities::{
    Admin, Community, CommunityMember, Event, Submission, User, ZoneStats,
};
use cc_core::RecordId;

use super::responses::{
    AdminResponse, CommunityDetailResponse, CommunityResponse, CurrentUserResponse,
    EventResponse, MembershipResponse, SubmissionResponse, SubmissionRow, ZoneStatsResponse,
};

/// India Standard Time, UTC+05:30
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Format a timestamp as an en-IN short date (`dd/mm/yyyy`)
pub fn format_en_in_date(at: DateTime<Utc>) -> String {
    match FixedOffset::east_opt(IST_OFFSET_SECS) {
        Some(ist) => at.with_timezone(&ist).format("%d/%m/%Y").to_string(),
        None => at.format("%d/%m/%Y").to_string(),
    }
}

fn id_string(id: Option<RecordId>) -> Option<String> {
    id.map(|id| id.to_string())
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// Membership joined with the community it belongs to
#[derive(Debug, Clone)]
pub struct MembershipWithCommunity {
    pub membership: CommunityMember,
    pub community: Community,
}

impl From<MembershipWithCommunity> for MembershipResponse {
    fn from(data: MembershipWithCommunity) -> Self {
        Self {
            community_id: data.community.id.to_string(),
            community_name: data.community.name,
            zone: data.community.zone,
            status: data.community.status,
            is_admin: data.membership.is_admin,
            joined_at: data.membership.joined_at,
        }
    }
}

// ============================================================================
// Admin Mappers
// ============================================================================

impl From<&Admin> for AdminResponse {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id.to_string(),
            user_id: admin.user_id.to_string(),
            appointed_by: admin.appointed_by.to_string(),
            zone: admin.zone,
            allotted_roles: admin.allotted_roles.names(),
            name: admin.name.clone(),
            username: admin.username.clone(),
            email: admin.email.clone(),
            is_active: admin.is_active,
            created_at: admin.created_at,
            last_active_at: admin.last_active_at,
        }
    }
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self::from(&admin)
    }
}

// ============================================================================
// Community Mappers
// ============================================================================

impl From<Community> for CommunityResponse {
    fn from(community: Community) -> Self {
        Self {
            id: community.id.to_string(),
            name: community.name,
            description: community.description,
            zone: community.zone,
            city: community.city,
            tags: community.tags,
            website: community.website,
            social_links: community.social_links,
            status: community.status,
            badge: community.status.badge_color(),
            created_by: community.created_by.to_string(),
            created_at: community.created_at,
        }
    }
}

impl From<&Community> for CommunityResponse {
    fn from(community: &Community) -> Self {
        Self::from(community.clone())
    }
}

/// Community with its member count
#[derive(Debug, Clone)]
pub struct CommunityWithCount {
    pub community: Community,
    pub member_count: i64,
}

impl From<CommunityWithCount> for CommunityDetailResponse {
    fn from(data: CommunityWithCount) -> Self {
        Self {
            community: CommunityResponse::from(data.community),
            member_count: data.member_count,
        }
    }
}

// ============================================================================
// Submission Mappers
// ============================================================================

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id.to_string(),
            kind: submission.kind,
            submitted_by: id_string(submission.submitted_by),
            name: submission.name,
            email: submission.email,
            community_id: id_string(submission.community_id),
            fields: submission.fields.into(),
            status: submission.status,
            badge: submission.status.badge_color(),
            reviewed_by: id_string(submission.reviewed_by),
            review_note: submission.review_note,
            created_at: submission.created_at,
            reviewed_at: submission.reviewed_at,
        }
    }
}

impl SubmissionRow {
    /// Present a submission as a table row, surfacing `role_field` as the row's role
    pub fn from_submission(submission: Submission, role_field: Option<&str>) -> Self {
        let role = role_field
            .and_then(|field| submission.fields.get(field))
            .map(str::to_string);
        Self {
            id: submission.id.to_string(),
            role,
            status: submission.status,
            badge: submission.status.badge_color(),
            submitted_on: format_en_in_date(submission.created_at),
            name: submission.name,
            email: submission.email,
            fields: submission.fields.into(),
        }
    }
}

// ============================================================================
// Event and Zone Mappers
// ============================================================================

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.to_string(),
            community_id: event.community_id.to_string(),
            title: event.title,
            description: event.description,
            zone: event.zone,
            venue: event.venue,
            is_online: event.is_online,
            url: event.url,
            starts_at: event.starts_at,
            ends_at: event.ends_at,
        }
    }
}

impl From<ZoneStats> for ZoneStatsResponse {
    fn from(stats: ZoneStats) -> Self {
        Self {
            zone: stats.zone,
            label: stats.zone.label(),
            approved_communities: stats.approved_communities,
            pending_communities: stats.pending_communities,
            upcoming_events: stats.upcoming_events,
            active_admins: stats.active_admins,
        }
    }
}
