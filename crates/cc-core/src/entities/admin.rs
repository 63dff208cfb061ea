//! Admin entity - an appointment of an account to the admin team

use chrono::{DateTime, Utc};

use crate::entities::{SubmissionKind, User, Zone};
use crate::value_objects::{AllottedRoles, RecordId};

/// Admin team record
///
/// Name, username and email are copied from the appointed account and are
/// unique across the team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub id: RecordId,
    pub user_id: RecordId,
    /// Superuser who made the appointment
    pub appointed_by: RecordId,
    pub zone: Zone,
    pub allotted_roles: AllottedRoles,
    pub name: String,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_active_at: Option<DateTime<Utc>>,
}

impl Admin {
    /// Appoint an account to the admin team
    pub fn appoint(
        id: RecordId,
        appointee: &User,
        appointed_by: RecordId,
        zone: Zone,
        allotted_roles: AllottedRoles,
    ) -> Self {
        Self {
            id,
            user_id: appointee.id,
            appointed_by,
            zone,
            allotted_roles,
            name: appointee.name.clone(),
            username: appointee.username.clone(),
            email: appointee.email.clone(),
            is_active: true,
            created_at: Utc::now(),
            last_active_at: None,
        }
    }

    /// Change zone and/or duties; `None` leaves a field untouched
    pub fn reassign(&mut self, zone: Option<Zone>, allotted_roles: Option<AllottedRoles>) {
        if let Some(zone) = zone {
            self.zone = zone;
        }
        if let Some(roles) = allotted_roles {
            self.allotted_roles = roles;
        }
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn reactivate(&mut self) {
        self.is_active = true;
    }

    pub fn touch(&mut self) {
        self.last_active_at = Some(Utc::now());
    }

    /// Whether this admin currently handles a submission kind
    /// Active and allotted every flag in `duty`
    pub fn has_duty(&self, duty: AllottedRoles) -> bool {
        self.is_active && self.allotted_roles.contains(duty)
    }

    pub fn can_review(&self, kind: SubmissionKind) -> bool {
        self.has_duty(AllottedRoles::for_submission(kind))
    }
}
