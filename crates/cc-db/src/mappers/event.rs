//! Event model -> entity

use cc_core::entities::Event;
use cc_core::{DomainError, RecordId};

use super::parse_column;
use crate::models::EventModel;

impl TryFrom<EventModel> for Event {
    type Error = DomainError;

    fn try_from(model: EventModel) -> Result<Self, Self::Error> {
        Ok(Event {
            id: RecordId::new(model.id),
            community_id: RecordId::new(model.community_id),
            zone: parse_column("zone", &model.zone)?,
            title: model.title,
            description: model.description,
            venue: model.venue,
            is_online: model.is_online,
            url: model.url,
            starts_at: model.starts_at,
            ends_at: model.ends_at,
            created_at: model.created_at,
        })
    }
}
