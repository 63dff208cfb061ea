//! Allotted roles - the review duties a superuser hands to an admin
//!
//! Stored as a BIGINT bitfield, serialized in JSON as a list of names.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::entities::SubmissionKind;
use crate::error::DomainError;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AllottedRoles: u64 {
        /// Approve or reject community listings
        const COMMUNITIES        = 1 << 0;
        const VOLUNTEERS         = 1 << 1;
        const SPONSORS           = 1 << 2;
        const SPEAKERS           = 1 << 3;
        const COMMUNITY_PARTNERS = 1 << 4;
        /// Publish events on behalf of communities
        const EVENTS             = 1 << 5;
    }
}

const NAMES: [(&str, AllottedRoles); 6] = [
    ("communities", AllottedRoles::COMMUNITIES),
    ("volunteers", AllottedRoles::VOLUNTEERS),
    ("sponsors", AllottedRoles::SPONSORS),
    ("speakers", AllottedRoles::SPEAKERS),
    ("community_partners", AllottedRoles::COMMUNITY_PARTNERS),
    ("events", AllottedRoles::EVENTS),
];

impl AllottedRoles {
    /// The duty that covers reviewing a given submission kind
    pub fn for_submission(kind: SubmissionKind) -> Self {
        match kind {
            SubmissionKind::Volunteer => Self::VOLUNTEERS,
            SubmissionKind::Sponsor => Self::SPONSORS,
            SubmissionKind::Speaker => Self::SPEAKERS,
            SubmissionKind::CommunityPartner => Self::COMMUNITY_PARTNERS,
        }
    }

    /// Lowercase names of the set flags, in declaration order
    pub fn names(&self) -> Vec<&'static str> {
        NAMES
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect()
    }

    /// Build a set from role names
    pub fn from_names<I, S>(names: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().try_fold(Self::empty(), |acc, name| {
            let name = name.as_ref().trim();
            NAMES
                .iter()
                .find(|(known, _)| known.eq_ignore_ascii_case(name))
                .map(|(_, flag)| acc | *flag)
                .ok_or_else(|| DomainError::UnknownAllottedRole(name.to_string()))
        })
    }

    /// Restore from the stored bitfield, dropping unknown bits
    pub fn from_stored(raw: i64) -> Self {
        Self::from_bits_truncate(raw as u64)
    }

    pub fn to_stored(self) -> i64 {
        self.bits() as i64
    }
}

impl fmt::Display for AllottedRoles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(","))
    }
}

impl Serialize for AllottedRoles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.names())
    }
}

impl<'de> Deserialize<'de> for AllottedRoles {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        Self::from_names(names).map_err(serde::de::Error::custom)
    }
}
