//! Zone statistics service

use cc_core::entities::{CommunityQuery, ReviewStatus, Zone, ZoneStats};
use chrono::{DateTime, Utc};
use tracing::instrument;

use crate::dto::{CommunityResponse, ZoneDetailResponse, ZoneStatsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Zone statistics service
pub struct ZoneService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ZoneService<'a> {
    /// Create a new ZoneService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Counts for every zone, in declaration order
    #[instrument(skip(self))]
    pub async fn stats(&self) -> ServiceResult<Vec<ZoneStatsResponse>> {
        let now = Utc::now();
        let mut all = Vec::with_capacity(Zone::ALL.len());
        for zone in Zone::ALL {
            all.push(ZoneStatsResponse::from(self.zone_stats(zone, now).await?));
        }
        Ok(all)
    }

    /// One zone's counts plus its approved communities
    #[instrument(skip(self))]
    pub async fn detail(&self, zone: &str) -> ServiceResult<ZoneDetailResponse> {
        let zone: Zone = zone.parse()?;
        let stats = self.zone_stats(zone, Utc::now()).await?;

        let query = CommunityQuery {
            zone: Some(zone),
            ..CommunityQuery::listed()
        };
        let communities = self.ctx.community_repo().search(&query).await?;

        Ok(ZoneDetailResponse {
            stats: ZoneStatsResponse::from(stats),
            communities: communities.into_iter().map(CommunityResponse::from).collect(),
        })
    }

    async fn zone_stats(&self, zone: Zone, now: DateTime<Utc>) -> ServiceResult<ZoneStats> {
        let communities = self.ctx.community_repo();
        Ok(ZoneStats {
            approved_communities: communities.count(zone, ReviewStatus::Approved).await?,
            pending_communities: communities.count(zone, ReviewStatus::Pending).await?,
            upcoming_events: self.ctx.event_repo().count_upcoming(zone, now).await?,
            active_admins: self.ctx.admin_repo().count_active(Some(zone)).await?,
            ..ZoneStats::empty(zone)
        })
    }
}
