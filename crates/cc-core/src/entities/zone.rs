//! Zones - geographic buckets for communities, events and admins

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Geographic zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Northern,
    Southern,
    Eastern,
    Western,
    Central,
    NorthEastern,
}

impl Zone {
    pub const ALL: [Zone; 6] = [
        Zone::Northern,
        Zone::Southern,
        Zone::Eastern,
        Zone::Western,
        Zone::Central,
        Zone::NorthEastern,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Northern => "northern",
            Self::Southern => "southern",
            Self::Eastern => "eastern",
            Self::Western => "western",
            Self::Central => "central",
            Self::NorthEastern => "north_eastern",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Northern => "Northern",
            Self::Southern => "Southern",
            Self::Eastern => "Eastern",
            Self::Western => "Western",
            Self::Central => "Central",
            Self::NorthEastern => "North Eastern",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zone {
    type Err = DomainError;

    /// Accepts `north_eastern`, `north-eastern` and any casing
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|zone| zone.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownZone(s.to_string()))
    }
}

/// Aggregated counts for one zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneStats {
    pub zone: Zone,
    pub approved_communities: i64,
    pub pending_communities: i64,
    pub upcoming_events: i64,
    pub active_admins: i64,
}

impl ZoneStats {
    pub fn empty(zone: Zone) -> Self {
        Self {
            zone,
            approved_communities: 0,
            pending_communities: 0,
            upcoming_events: 0,
            active_admins: 0,
        }
    }
}
