//! User model -> entity

use cc_core::entities::User;
use cc_core::{DomainError, RecordId};

use super::parse_column;
use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            id: RecordId::new(model.id),
            role: parse_column("role", &model.role)?,
            name: model.name,
            username: model.username,
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
