//! User entity - an account that can sign in

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Access tier used for gating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccessRole {
    #[default]
    Member,
    Moderator,
    Admin,
    Superuser,
}

impl AccessRole {
    pub const ALL: [AccessRole; 4] = [
        AccessRole::Member,
        AccessRole::Moderator,
        AccessRole::Admin,
        AccessRole::Superuser,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
            Self::Superuser => "superuser",
        }
    }

    /// Moderators, admins and superusers can act on the review queue
    pub fn is_reviewer(self) -> bool {
        !matches!(self, Self::Member)
    }
}

impl fmt::Display for AccessRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownRole(s.to_string()))
    }
}

/// User account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: AccessRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: RecordId, name: String, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            username,
            email,
            role: AccessRole::Member,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_role(&mut self, role: AccessRole) {
        self.role = role;
        self.updated_at = Utc::now();
    }
}
