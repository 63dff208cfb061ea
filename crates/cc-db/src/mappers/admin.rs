//! Admin model -> entity

use cc_core::entities::Admin;
use cc_core::{AllottedRoles, DomainError, RecordId};

use super::parse_column;
use crate::models::AdminModel;

impl TryFrom<AdminModel> for Admin {
    type Error = DomainError;

    fn try_from(model: AdminModel) -> Result<Self, Self::Error> {
        Ok(Admin {
            id: RecordId::new(model.id),
            user_id: RecordId::new(model.user_id),
            appointed_by: RecordId::new(model.appointed_by),
            zone: parse_column("zone", &model.zone)?,
            allotted_roles: AllottedRoles::from_stored(model.allotted_roles),
            name: model.name,
            username: model.username,
            email: model.email,
            is_active: model.is_active,
            created_at: model.created_at,
            last_active_at: model.last_active_at,
        })
    }
}
