//! Community model -> entity

use cc_core::entities::{Community, CommunityMember};
use cc_core::{DomainError, RecordId};

use super::parse_column;
use crate::models::{CommunityMemberModel, CommunityModel};

impl TryFrom<CommunityModel> for Community {
    type Error = DomainError;

    fn try_from(model: CommunityModel) -> Result<Self, Self::Error> {
        Ok(Community {
            id: RecordId::new(model.id),
            zone: parse_column("zone", &model.zone)?,
            status: parse_column("status", &model.status)?,
            name: model.name,
            description: model.description,
            city: model.city,
            tags: model.tags,
            website: model.website,
            social_links: model.social_links.0,
            created_by: RecordId::new(model.created_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<CommunityMemberModel> for CommunityMember {
    fn from(model: CommunityMemberModel) -> Self {
        CommunityMember {
            community_id: RecordId::new(model.community_id),
            user_id: RecordId::new(model.user_id),
            is_admin: model.is_admin,
            joined_at: model.joined_at,
        }
    }
}
