//! Submission entity - an application waiting for admin review

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::ReviewStatus;
use crate::error::DomainError;
use crate::forms::FormRecord;
use crate::value_objects::RecordId;

/// Kind of application; doubles as the form type key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    Volunteer,
    Sponsor,
    Speaker,
    CommunityPartner,
}

impl SubmissionKind {
    pub const ALL: [SubmissionKind; 4] = [
        SubmissionKind::Volunteer,
        SubmissionKind::Sponsor,
        SubmissionKind::Speaker,
        SubmissionKind::CommunityPartner,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Volunteer => "volunteer",
            Self::Sponsor => "sponsor",
            Self::Speaker => "speaker",
            Self::CommunityPartner => "community_partner",
        }
    }

    /// Default heading for a list of this kind
    pub fn display_title(self) -> &'static str {
        match self {
            Self::Volunteer => "Volunteer Applications",
            Self::Sponsor => "Sponsor Requests",
            Self::Speaker => "Speaker Proposals",
            Self::CommunityPartner => "Community Partner Requests",
        }
    }
}

impl fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionKind {
    type Err = DomainError;

    /// Accepts singular or plural and `-`/`_` separators (`community-partners`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let singular = normalized.strip_suffix('s').unwrap_or(&normalized);
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized || kind.as_str() == singular)
            .ok_or_else(|| DomainError::UnknownSubmissionKind(s.to_string()))
    }
}

/// A submitted application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: RecordId,
    pub kind: SubmissionKind,
    pub submitted_by: Option<RecordId>,
    pub name: String,
    pub email: String,
    pub community_id: Option<RecordId>,
    /// Everything the applicant filled in, keyed by field name
    pub fields: FormRecord,
    pub status: ReviewStatus,
    pub reviewed_by: Option<RecordId>,
    pub review_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl Submission {
    pub fn new(
        id: RecordId,
        kind: SubmissionKind,
        name: String,
        email: String,
        fields: FormRecord,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            kind,
            submitted_by: None,
            name,
            email,
            community_id: None,
            fields,
            status: ReviewStatus::Pending,
            reviewed_by: None,
            review_note: None,
            created_at: now,
            updated_at: now,
            reviewed_at: None,
        }
    }

    /// Record a review decision
    pub fn review(&mut self, reviewer: RecordId, status: ReviewStatus, note: Option<String>) {
        let now = Utc::now();
        self.status = status;
        self.reviewed_by = Some(reviewer);
        self.review_note = note;
        self.reviewed_at = Some(now);
        self.updated_at = now;
    }
}

/// Which submissions to list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionQuery {
    pub kind: SubmissionKind,
    /// Exact status match; `None` keeps everything
    pub status: Option<ReviewStatus>,
}

impl SubmissionQuery {
    pub fn all(kind: SubmissionKind) -> Self {
        Self { kind, status: None }
    }

    pub fn matches(&self, submission: &Submission) -> bool {
        submission.kind == self.kind && self.status.map_or(true, |s| submission.status == s)
    }

    /// Keep matching submissions, preserving order
    pub fn apply<I>(&self, submissions: I) -> Vec<Submission>
    where
        I: IntoIterator<Item = Submission>,
    {
        submissions.into_iter().filter(|s| self.matches(s)).collect()
    }
}
