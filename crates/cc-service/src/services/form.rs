//! Form service
//!
//! Serves form schemas and turns posted form bodies into pending submissions.

use cc_core::entities::{Submission, SubmissionKind};
use cc_core::{form_schema, DomainError, FormRecord, RecordId};
use serde_json::Value;
use tracing::{info, instrument};
use validator::ValidateEmail;

use crate::dto::{FormSchemaResponse, SubmissionResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Form service
pub struct FormService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FormService<'a> {
    /// Create a new FormService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Schema of a form: base fields then the kind's own fields
    pub fn schema(&self, kind: &str) -> ServiceResult<FormSchemaResponse> {
        let kind: SubmissionKind = kind.parse()?;
        Ok(FormSchemaResponse {
            kind,
            title: kind.display_title(),
            fields: form_schema(kind),
        })
    }

    /// Accumulate a posted body into a record and store it as pending
    #[instrument(skip(self, body))]
    pub async fn submit(
        &self,
        submitter: Option<RecordId>,
        kind: &str,
        body: Value,
    ) -> ServiceResult<SubmissionResponse> {
        let kind: SubmissionKind = kind.parse()?;
        let Value::Object(values) = body else {
            return Err(
                DomainError::ValidationError("form body must be a JSON object".to_string()).into(),
            );
        };

        let record = FormRecord::collect(kind, &values);
        let (name, email) = record.identity()?;
        if !email.validate_email() {
            return Err(DomainError::InvalidEmail.into());
        }
        let (name, email) = (name.to_string(), email.to_string());

        let mut submission = Submission::new(self.ctx.generate_id(), kind, name, email, record);
        submission.submitted_by = submitter;
        self.ctx.submission_repo().create(&submission).await?;

        info!(submission_id = %submission.id, kind = %kind, fields = submission.fields.len(), "Form submitted");

        Ok(SubmissionResponse::from(submission))
    }
}
