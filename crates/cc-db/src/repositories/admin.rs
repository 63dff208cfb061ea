//! PostgreSQL implementation of AdminRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use cc_core::entities::{Admin, Zone};
use cc_core::error::DomainError;
use cc_core::traits::{AdminQuery, AdminRepository, RepoResult};
use cc_core::RecordId;

use crate::models::AdminModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of AdminRepository
#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column_filter: &str, value: i64) -> RepoResult<Option<Admin>> {
        let sql = format!(
            r"
            SELECT id, user_id, appointed_by, zone, allotted_roles, name, username, email,
                   is_active, created_at, last_active_at
            FROM admins
            WHERE {column_filter} = $1
            "
        );
        sqlx::query_as::<_, AdminModel>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(Admin::try_from)
            .transpose()
    }
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Admin>> {
        self.find_one("id", id.into_inner()).await
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: RecordId) -> RepoResult<Option<Admin>> {
        self.find_one("user_id", user_id.into_inner()).await
    }

    #[instrument(skip(self))]
    async fn list(&self, query: AdminQuery) -> RepoResult<Vec<Admin>> {
        let models = sqlx::query_as::<_, AdminModel>(
            r"
            SELECT id, user_id, appointed_by, zone, allotted_roles, name, username, email,
                   is_active, created_at, last_active_at
            FROM admins
            WHERE ($1::text IS NULL OR zone = $1)
              AND ($2::boolean IS NULL OR is_active = $2)
            ORDER BY created_at, id
            ",
        )
        .bind(query.zone.map(Zone::as_str))
        .bind(query.active)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(Admin::try_from).collect()
    }

    #[instrument(skip(self, admin), fields(admin_id = %admin.id))]
    async fn create(&self, admin: &Admin) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO admins (id, user_id, appointed_by, zone, allotted_roles, name, username,
                                email, is_active, created_at, last_active_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(admin.id.into_inner())
        .bind(admin.user_id.into_inner())
        .bind(admin.appointed_by.into_inner())
        .bind(admin.zone.as_str())
        .bind(admin.allotted_roles.to_stored())
        .bind(&admin.name)
        .bind(&admin.username)
        .bind(&admin.email)
        .bind(admin.is_active)
        .bind(admin.created_at)
        .bind(admin.last_active_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, |constraint| match constraint {
                Some("admins_name_key") => DomainError::AdminNameTaken,
                _ => DomainError::AlreadyAdmin,
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self, admin), fields(admin_id = %admin.id))]
    async fn update(&self, admin: &Admin) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE admins
            SET zone = $2, allotted_roles = $3, is_active = $4, last_active_at = $5
            WHERE id = $1
            ",
        )
        .bind(admin.id.into_inner())
        .bind(admin.zone.as_str())
        .bind(admin.allotted_roles.to_stored())
        .bind(admin.is_active)
        .bind(admin.last_active_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::AdminNotFound(admin.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_active(&self, zone: Option<Zone>) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM admins WHERE is_active AND ($1::text IS NULL OR zone = $1)",
        )
        .bind(zone.map(Zone::as_str))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
