//! Submission service
//!
//! Review queue for volunteer, sponsor, speaker and community-partner
//! applications: the filtered review table plus get, review and delete.

use cc_core::entities::{ReviewStatus, Submission, SubmissionKind, SubmissionQuery, User};
use cc_core::{AccessPolicy, AllottedRoles, DomainError, RecordId};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::{
    ReviewSubmissionRequest, SubmissionListQuery, SubmissionResponse, SubmissionRow,
    SubmissionTable,
};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::parse_param;

/// Submission service
pub struct SubmissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubmissionService<'a> {
    /// Create a new SubmissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List one kind of submission as a review table
    ///
    /// With a status filter only exact matches are kept; rows stay newest first.
    #[instrument(skip(self, actor, query), fields(actor_id = %actor.id))]
    pub async fn table(
        &self,
        actor: &User,
        kind: &str,
        query: SubmissionListQuery,
    ) -> ServiceResult<SubmissionTable> {
        AccessService::new(self.ctx)
            .require(actor, &AccessPolicy::reviewers())
            .await?;

        let kind: SubmissionKind = kind.parse()?;
        let status = parse_param::<ReviewStatus>(query.status.as_deref())?;
        let filter = SubmissionQuery { kind, status };

        let submissions = self.ctx.submission_repo().list(filter).await?;
        let role_field = query.role_field.as_deref().filter(|f| !f.is_empty());
        let rows: Vec<_> = filter
            .apply(submissions)
            .into_iter()
            .map(|s| SubmissionRow::from_submission(s, role_field))
            .collect();

        debug!(kind = %kind, rows = rows.len(), "Submission table built");

        let title = query
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| kind.display_title().to_string());

        Ok(SubmissionTable::new(title, kind, status, rows))
    }

    /// Get one submission of a kind
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn get(
        &self,
        actor: &User,
        kind: &str,
        submission_id: RecordId,
    ) -> ServiceResult<SubmissionResponse> {
        AccessService::new(self.ctx)
            .require(actor, &AccessPolicy::reviewers())
            .await?;

        let submission = self.get_submission_entity(kind.parse()?, submission_id).await?;
        Ok(SubmissionResponse::from(submission))
    }

    /// Record a review decision
    ///
    /// Admins may only review kinds covered by their allotted roles.
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id, status = %request.status))]
    pub async fn review(
        &self,
        actor: &User,
        kind: &str,
        submission_id: RecordId,
        request: ReviewSubmissionRequest,
    ) -> ServiceResult<SubmissionResponse> {
        AccessService::new(self.ctx)
            .require(actor, &AccessPolicy::reviewers())
            .await?;
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let mut submission = self.get_submission_entity(kind.parse()?, submission_id).await?;
        AccessService::new(self.ctx)
            .require_duty(actor, AllottedRoles::for_submission(submission.kind))
            .await?;

        let note = request.note.filter(|n| !n.trim().is_empty());
        submission.review(actor.id, request.status, note);
        self.ctx.submission_repo().update(&submission).await?;

        info!(
            submission_id = %submission.id,
            kind = %submission.kind,
            status = %submission.status,
            "Submission reviewed"
        );

        Ok(SubmissionResponse::from(submission))
    }

    /// Delete a submission outright
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn delete(&self, actor: &User, kind: &str, submission_id: RecordId) -> ServiceResult<()> {
        AccessService::new(self.ctx)
            .require(actor, &AccessPolicy::admins())
            .await?;

        self.get_submission_entity(kind.parse()?, submission_id).await?;
        self.ctx.submission_repo().delete(submission_id).await?;

        info!(submission_id = %submission_id, "Submission deleted");
        Ok(())
    }

    /// Get submission entity by ID; a record of another kind counts as missing
    #[instrument(skip(self))]
    pub async fn get_submission_entity(
        &self,
        kind: SubmissionKind,
        submission_id: RecordId,
    ) -> ServiceResult<Submission> {
        self.ctx
            .submission_repo()
            .find_by_id(submission_id)
            .await?
            .filter(|s| s.kind == kind)
            .ok_or_else(|| DomainError::SubmissionNotFound(submission_id).into())
    }
}
