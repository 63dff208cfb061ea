//! Community entity and membership

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::entities::{ReviewStatus, Zone};
use crate::value_objects::RecordId;

/// A listed (or proposed) community
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Community {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub zone: Zone,
    pub city: String,
    pub tags: Vec<String>,
    pub website: Option<String>,
    /// Platform name -> profile URL
    pub social_links: BTreeMap<String, String>,
    pub status: ReviewStatus,
    pub created_by: RecordId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Community {
    /// Propose a new community; it starts in the review queue
    pub fn propose(
        id: RecordId,
        name: String,
        zone: Zone,
        city: String,
        created_by: RecordId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description: None,
            zone,
            city,
            tags: Vec::new(),
            website: None,
            social_links: BTreeMap::new(),
            status: ReviewStatus::Pending,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Approved communities are publicly listed
    #[inline]
    pub fn is_listed(&self) -> bool {
        self.status == ReviewStatus::Approved
    }

    pub fn set_status(&mut self, status: ReviewStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Case-insensitive substring match on name, city or any tag
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.city.to_lowercase().contains(&needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}

/// Search criteria for communities
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommunityQuery {
    pub text: Option<String>,
    pub zone: Option<Zone>,
    pub status: Option<ReviewStatus>,
}

impl CommunityQuery {
    /// Only publicly listed communities
    pub fn listed() -> Self {
        Self {
            status: Some(ReviewStatus::Approved),
            ..Self::default()
        }
    }

    pub fn matches(&self, community: &Community) -> bool {
        self.zone.map_or(true, |z| community.zone == z)
            && self.status.map_or(true, |s| community.status == s)
            && self
                .text
                .as_deref()
                .map_or(true, |t| community.matches_text(t))
    }
}

/// A user's membership in a community
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityMember {
    pub community_id: RecordId,
    pub user_id: RecordId,
    /// Community admins may manage the community's events
    pub is_admin: bool,
    pub joined_at: DateTime<Utc>,
}

impl CommunityMember {
    pub fn member(community_id: RecordId, user_id: RecordId) -> Self {
        Self {
            community_id,
            user_id,
            is_admin: false,
            joined_at: Utc::now(),
        }
    }

    pub fn admin(community_id: RecordId, user_id: RecordId) -> Self {
        Self {
            is_admin: true,
            ..Self::member(community_id, user_id)
        }
    }
}
