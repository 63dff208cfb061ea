//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use cc_core::entities::{Event, EventQuery, Zone};
use cc_core::error::DomainError;
use cc_core::traits::{EventRepository, RepoResult};

use crate::models::EventModel;

use super::error::map_db_error;

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self, event), fields(event_id = %event.id, community_id = %event.community_id))]
    async fn create(&self, event: &Event) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO events (id, community_id, title, description, zone, venue, is_online,
                                url, starts_at, ends_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(event.id.into_inner())
        .bind(event.community_id.into_inner())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.zone.as_str())
        .bind(&event.venue)
        .bind(event.is_online)
        .bind(&event.url)
        .bind(event.starts_at)
        .bind(event.ends_at)
        .bind(event.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db) if db.constraint() == Some("events_schedule_check") => {
                DomainError::InvalidSchedule
            }
            _ => map_db_error(e),
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, query: EventQuery) -> RepoResult<Vec<Event>> {
        let models = sqlx::query_as::<_, EventModel>(
            r"
            SELECT e.id, e.community_id, e.title, e.description, e.zone, e.venue, e.is_online,
                   e.url, e.starts_at, e.ends_at, e.created_at
            FROM events e
            JOIN communities c ON c.id = e.community_id
            WHERE c.status = 'approved'
              AND ($1::text IS NULL OR e.zone = $1)
              AND ($2::timestamptz IS NULL OR COALESCE(e.ends_at, e.starts_at) >= $2)
            ORDER BY e.starts_at, e.id
            ",
        )
        .bind(query.zone.map(Zone::as_str))
        .bind(query.upcoming_at)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(Event::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count_upcoming(&self, zone: Zone, now: DateTime<Utc>) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM events e
            JOIN communities c ON c.id = e.community_id
            WHERE c.status = 'approved'
              AND e.zone = $1
              AND COALESCE(e.ends_at, e.starts_at) >= $2
            ",
        )
        .bind(zone.as_str())
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
