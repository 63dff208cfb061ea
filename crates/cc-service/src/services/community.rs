//! Community service
//!
//! Directory search, proposals, review status changes and membership.

use cc_core::entities::{Community, CommunityMember, CommunityQuery, ReviewStatus, User};
use cc_core::{AccessPolicy, AllottedRoles, DomainError, RecordId};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::{
    CommunityDetailResponse, CommunityResponse, CommunitySearchQuery, CommunityWithCount,
    CreateCommunityRequest, MembershipResponse, MembershipWithCommunity, UpdateStatusRequest,
};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::parse_param;

/// Community service
pub struct CommunityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommunityService<'a> {
    /// Create a new CommunityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Search the directory
    ///
    /// Reviewers may filter on any status; everyone else only sees approved
    /// communities whatever status they ask for.
    #[instrument(skip(self, viewer, query))]
    pub async fn search(
        &self,
        viewer: Option<&User>,
        query: CommunitySearchQuery,
    ) -> ServiceResult<Vec<CommunityResponse>> {
        let requested_status = parse_param::<ReviewStatus>(query.status.as_deref())?;
        let status = if is_reviewer(viewer) {
            requested_status
        } else {
            Some(ReviewStatus::Approved)
        };

        let query = CommunityQuery {
            text: query.q.filter(|q| !q.trim().is_empty()),
            zone: parse_param(query.zone.as_deref())?,
            status,
        };
        let communities = self.ctx.community_repo().search(&query).await?;

        debug!(count = communities.len(), "Community search");

        Ok(communities.into_iter().map(CommunityResponse::from).collect())
    }

    /// Get a community with its member count
    ///
    /// Unlisted communities are visible to reviewers and to their own members.
    #[instrument(skip(self, viewer))]
    pub async fn get(
        &self,
        viewer: Option<&User>,
        community_id: RecordId,
    ) -> ServiceResult<CommunityDetailResponse> {
        let community = self.get_community_entity(community_id).await?;

        if !community.is_listed() && !self.can_see_unlisted(viewer, &community).await? {
            return Err(DomainError::CommunityNotFound(community_id).into());
        }

        let member_count = self.ctx.membership_repo().member_count(community_id).await?;

        Ok(CommunityDetailResponse::from(CommunityWithCount {
            community,
            member_count,
        }))
    }

    /// Propose a community; the creator becomes its first admin
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id, name = %request.name))]
    pub async fn create(
        &self,
        actor: &User,
        request: CreateCommunityRequest,
    ) -> ServiceResult<CommunityResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let name = request.name.trim().to_string();
        if self.ctx.community_repo().name_exists(&name).await? {
            return Err(DomainError::CommunityNameTaken.into());
        }

        let mut community = Community::propose(
            self.ctx.generate_id(),
            name,
            request.zone,
            request.city.trim().to_string(),
            actor.id,
        );
        community.description = request.description;
        community.tags = normalize_tags(request.tags);
        community.website = request.website;
        community.social_links = request.social_links;

        self.ctx.community_repo().create(&community).await?;
        self.ctx
            .membership_repo()
            .add(&CommunityMember::admin(community.id, actor.id))
            .await?;

        info!(community_id = %community.id, zone = %community.zone, "Community proposed");

        Ok(CommunityResponse::from(community))
    }

    /// Move a community through review
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id, status = %request.status))]
    pub async fn set_status(
        &self,
        actor: &User,
        community_id: RecordId,
        request: UpdateStatusRequest,
    ) -> ServiceResult<CommunityResponse> {
        let access = AccessService::new(self.ctx);
        access.require(actor, &AccessPolicy::reviewers()).await?;
        access.require_duty(actor, AllottedRoles::COMMUNITIES).await?;

        let mut community = self.get_community_entity(community_id).await?;
        self.ctx
            .community_repo()
            .update_status(community_id, request.status)
            .await?;
        community.set_status(request.status);

        info!(community_id = %community_id, status = %request.status, "Community reviewed");

        Ok(CommunityResponse::from(community))
    }

    /// Join an approved community
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn join(&self, actor: &User, community_id: RecordId) -> ServiceResult<MembershipResponse> {
        let community = self.get_community_entity(community_id).await?;
        if !community.is_listed() {
            return Err(DomainError::CommunityNotApproved.into());
        }

        let membership = CommunityMember::member(community_id, actor.id);
        self.ctx.membership_repo().add(&membership).await?;

        info!(community_id = %community_id, "Joined community");

        Ok(MembershipResponse::from(MembershipWithCommunity {
            membership,
            community,
        }))
    }

    /// Get community entity by ID
    #[instrument(skip(self))]
    pub async fn get_community_entity(&self, community_id: RecordId) -> ServiceResult<Community> {
        self.ctx
            .community_repo()
            .find_by_id(community_id)
            .await?
            .ok_or_else(|| DomainError::CommunityNotFound(community_id).into())
    }

    async fn can_see_unlisted(&self, viewer: Option<&User>, community: &Community) -> ServiceResult<bool> {
        let Some(viewer) = viewer else {
            return Ok(false);
        };
        if viewer.role.is_reviewer() || viewer.id == community.created_by {
            return Ok(true);
        }
        Ok(self
            .ctx
            .membership_repo()
            .is_member(community.id, viewer.id)
            .await?)
    }
}

fn is_reviewer(viewer: Option<&User>) -> bool {
    viewer.is_some_and(|v| v.role.is_reviewer())
}

/// Trim, drop blanks and duplicates, keep first-seen order
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !seen.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            seen.push(tag.to_string());
        }
    }
    seen
}
