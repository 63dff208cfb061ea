//! Submission model -> entity

use cc_core::entities::Submission;
use cc_core::{DomainError, FormRecord, RecordId};

use super::parse_column;
use crate::models::SubmissionModel;

impl TryFrom<SubmissionModel> for Submission {
    type Error = DomainError;

    fn try_from(model: SubmissionModel) -> Result<Self, Self::Error> {
        Ok(Submission {
            id: RecordId::new(model.id),
            kind: parse_column("kind", &model.kind)?,
            status: parse_column("status", &model.status)?,
            submitted_by: model.submitted_by.map(RecordId::new),
            name: model.name,
            email: model.email,
            community_id: model.community_id.map(RecordId::new),
            fields: FormRecord::from(model.fields.0),
            reviewed_by: model.reviewed_by.map(RecordId::new),
            review_note: model.review_note,
            created_at: model.created_at,
            updated_at: model.updated_at,
            reviewed_at: model.reviewed_at,
        })
    }
}
