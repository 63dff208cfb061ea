//! PostgreSQL implementations of CommunityRepository and MembershipRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use cc_core::entities::{Community, CommunityMember, CommunityQuery, ReviewStatus, Zone};
use cc_core::error::DomainError;
use cc_core::traits::{CommunityRepository, MembershipRepository, RepoResult};
use cc_core::RecordId;

use crate::models::{CommunityMemberModel, CommunityModel};

use super::error::{contains_pattern, map_db_error, map_unique_violation};

/// PostgreSQL implementation of CommunityRepository
#[derive(Clone)]
pub struct PgCommunityRepository {
    pool: PgPool,
}

impl PgCommunityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommunityRepository for PgCommunityRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Community>> {
        sqlx::query_as::<_, CommunityModel>(
            r"
            SELECT id, name, description, zone, city, tags, website, social_links, status,
                   created_by, created_at, updated_at
            FROM communities
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .map(Community::try_from)
        .transpose()
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM communities WHERE LOWER(name) = LOWER($1))",
        )
        .bind(name.trim())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &CommunityQuery) -> RepoResult<Vec<Community>> {
        let pattern = query
            .text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(contains_pattern);

        let models = sqlx::query_as::<_, CommunityModel>(
            r"
            SELECT id, name, description, zone, city, tags, website, social_links, status,
                   created_by, created_at, updated_at
            FROM communities
            WHERE ($1::text IS NULL OR zone = $1)
              AND ($2::text IS NULL OR status = $2)
              AND ($3::text IS NULL
                   OR name ILIKE $3
                   OR city ILIKE $3
                   OR EXISTS (SELECT 1 FROM unnest(tags) AS tag WHERE tag ILIKE $3))
            ORDER BY name
            ",
        )
        .bind(query.zone.map(Zone::as_str))
        .bind(query.status.map(ReviewStatus::as_str))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(Community::try_from).collect()
    }

    #[instrument(skip(self, community), fields(community_id = %community.id))]
    async fn create(&self, community: &Community) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO communities (id, name, description, zone, city, tags, website,
                                     social_links, status, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(community.id.into_inner())
        .bind(&community.name)
        .bind(&community.description)
        .bind(community.zone.as_str())
        .bind(&community.city)
        .bind(&community.tags)
        .bind(&community.website)
        .bind(Json(&community.social_links))
        .bind(community.status.as_str())
        .bind(community.created_by.into_inner())
        .bind(community.created_at)
        .bind(community.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::CommunityNameTaken))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: RecordId, status: ReviewStatus) -> RepoResult<()> {
        let result =
            sqlx::query("UPDATE communities SET status = $2, updated_at = NOW() WHERE id = $1")
                .bind(id.into_inner())
                .bind(status.as_str())
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommunityNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self, zone: Zone, status: ReviewStatus) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM communities WHERE zone = $1 AND status = $2",
        )
        .bind(zone.as_str())
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

/// PostgreSQL implementation of MembershipRepository
#[derive(Clone)]
pub struct PgMembershipRepository {
    pool: PgPool,
}

impl PgMembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn memberships(&self, user_id: RecordId, admin_only: bool) -> RepoResult<Vec<CommunityMember>> {
        let models = sqlx::query_as::<_, CommunityMemberModel>(
            r"
            SELECT community_id, user_id, is_admin, joined_at
            FROM community_members
            WHERE user_id = $1 AND (is_admin OR NOT $2)
            ORDER BY joined_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .bind(admin_only)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(CommunityMember::from).collect())
    }
}

#[async_trait]
impl MembershipRepository for PgMembershipRepository {
    #[instrument(skip(self, member), fields(community_id = %member.community_id, user_id = %member.user_id))]
    async fn add(&self, member: &CommunityMember) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO community_members (community_id, user_id, is_admin, joined_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(member.community_id.into_inner())
        .bind(member.user_id.into_inner())
        .bind(member.is_admin)
        .bind(member.joined_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::AlreadyMember))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn is_member(&self, community_id: RecordId, user_id: RecordId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM community_members WHERE community_id = $1 AND user_id = $2
            )
            ",
        )
        .bind(community_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn is_community_admin(
        &self,
        community_id: RecordId,
        user_id: RecordId,
    ) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM community_members
                WHERE community_id = $1 AND user_id = $2 AND is_admin
            )
            ",
        )
        .bind(community_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn member_count(&self, community_id: RecordId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM community_members WHERE community_id = $1",
        )
        .bind(community_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn memberships_for_user(&self, user_id: RecordId) -> RepoResult<Vec<CommunityMember>> {
        self.memberships(user_id, false).await
    }

    #[instrument(skip(self))]
    async fn admin_memberships(&self, user_id: RecordId) -> RepoResult<Vec<CommunityMember>> {
        self.memberships(user_id, true).await
    }
}
