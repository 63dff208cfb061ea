//! Event entity - a meetup or conference run by a community

use chrono::{DateTime, Utc};

use crate::entities::Zone;
use crate::value_objects::RecordId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: RecordId,
    pub community_id: RecordId,
    pub title: String,
    pub description: Option<String>,
    pub zone: Zone,
    pub venue: Option<String>,
    pub is_online: bool,
    pub url: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// An event is upcoming until it has finished
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.ends_at.unwrap_or(self.starts_at) >= now
    }

    /// `ends_at`, when present, must not precede `starts_at`
    pub fn has_valid_schedule(&self) -> bool {
        self.ends_at.map_or(true, |end| end >= self.starts_at)
    }
}

/// Listing criteria for events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub zone: Option<Zone>,
    /// Only events still running at this instant
    pub upcoming_at: Option<DateTime<Utc>>,
}

impl EventQuery {
    pub fn matches(&self, event: &Event) -> bool {
        self.zone.map_or(true, |z| event.zone == z)
            && self.upcoming_at.map_or(true, |now| event.is_upcoming(now))
    }
}
