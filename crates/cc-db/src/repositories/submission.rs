//! PostgreSQL implementation of SubmissionRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use cc_core::entities::{ReviewStatus, Submission, SubmissionQuery};
use cc_core::error::DomainError;
use cc_core::traits::{RepoResult, SubmissionRepository};
use cc_core::RecordId;

use crate::models::SubmissionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SubmissionRepository
#[derive(Clone)]
pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for PgSubmissionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Submission>> {
        sqlx::query_as::<_, SubmissionModel>(
            r"
            SELECT id, kind, submitted_by, name, email, community_id, fields, status,
                   reviewed_by, review_note, created_at, updated_at, reviewed_at
            FROM submissions
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .map(Submission::try_from)
        .transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, query: SubmissionQuery) -> RepoResult<Vec<Submission>> {
        let models = sqlx::query_as::<_, SubmissionModel>(
            r"
            SELECT id, kind, submitted_by, name, email, community_id, fields, status,
                   reviewed_by, review_note, created_at, updated_at, reviewed_at
            FROM submissions
            WHERE kind = $1 AND ($2::text IS NULL OR status = $2)
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(query.kind.as_str())
        .bind(query.status.map(ReviewStatus::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(Submission::try_from).collect()
    }

    #[instrument(skip(self, submission), fields(submission_id = %submission.id, kind = %submission.kind))]
    async fn create(&self, submission: &Submission) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO submissions (id, kind, submitted_by, name, email, community_id, fields,
                                     status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(submission.id.into_inner())
        .bind(submission.kind.as_str())
        .bind(submission.submitted_by.map(RecordId::into_inner))
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(submission.community_id.map(RecordId::into_inner))
        .bind(Json(&submission.fields))
        .bind(submission.status.as_str())
        .bind(submission.created_at)
        .bind(submission.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, submission), fields(submission_id = %submission.id))]
    async fn update(&self, submission: &Submission) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE submissions
            SET status = $2, reviewed_by = $3, review_note = $4, reviewed_at = $5,
                updated_at = $6
            WHERE id = $1
            ",
        )
        .bind(submission.id.into_inner())
        .bind(submission.status.as_str())
        .bind(submission.reviewed_by.map(RecordId::into_inner))
        .bind(&submission.review_note)
        .bind(submission.reviewed_at)
        .bind(submission.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SubmissionNotFound(submission.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM submissions WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SubmissionNotFound(id));
        }

        Ok(())
    }
}
