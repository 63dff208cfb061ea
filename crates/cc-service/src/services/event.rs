//! Event service

use cc_core::entities::{Event, EventQuery, User};
use cc_core::{AccessPolicy, AllottedRoles, DomainError, RecordId};
use chrono::Utc;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{CreateEventRequest, EventListQuery, EventResponse};

use super::access::AccessService;
use super::community::CommunityService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::parse_param;

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Events of approved communities by start time; only unfinished ones
    /// unless `upcoming=false`
    #[instrument(skip(self))]
    pub async fn list(&self, query: EventListQuery) -> ServiceResult<Vec<EventResponse>> {
        let query = EventQuery {
            zone: parse_param(query.zone.as_deref())?,
            upcoming_at: query.upcoming.unwrap_or(true).then(Utc::now),
        };
        let events = self.ctx.event_repo().list(query).await?;

        Ok(events.into_iter().map(EventResponse::from).collect())
    }

    /// Publish an event for a community
    ///
    /// Allowed for admins of that community and for platform admins
    /// allotted to events.
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id))]
    pub async fn create(
        &self,
        actor: &User,
        community_id: RecordId,
        request: CreateEventRequest,
    ) -> ServiceResult<EventResponse> {
        let community = CommunityService::new(self.ctx)
            .get_community_entity(community_id)
            .await?;

        let community_admin = self
            .ctx
            .membership_repo()
            .is_community_admin(community_id, actor.id)
            .await?;
        if !community_admin {
            if !AccessPolicy::admins().permits(Some(actor.role)) {
                warn!(community_id = %community_id, "Event creation by non-admin");
                return Err(DomainError::NotCommunityAdmin.into());
            }
            AccessService::new(self.ctx)
                .require_duty(actor, AllottedRoles::EVENTS)
                .await?;
        }

        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let event = Event {
            id: self.ctx.generate_id(),
            community_id,
            title: request.title.trim().to_string(),
            description: request.description,
            zone: community.zone,
            venue: request.venue,
            is_online: request.is_online,
            url: request.url,
            starts_at: request.starts_at,
            ends_at: request.ends_at,
            created_at: Utc::now(),
        };
        if !event.has_valid_schedule() {
            return Err(DomainError::InvalidSchedule.into());
        }

        self.ctx.event_repo().create(&event).await?;

        info!(event_id = %event.id, community_id = %community_id, "Event created");

        Ok(EventResponse::from(event))
    }
}
