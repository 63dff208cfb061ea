//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::RecordId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(RecordId),

    #[error("Admin not found: {0}")]
    AdminNotFound(RecordId),

    #[error("Community not found: {0}")]
    CommunityNotFound(RecordId),

    #[error("Submission not found: {0}")]
    SubmissionNotFound(RecordId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Unknown zone: {0}")]
    UnknownZone(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Unknown submission kind: {0}")]
    UnknownSubmissionKind(String),

    #[error("Unknown allotted role: {0}")]
    UnknownAllottedRole(String),

    #[error("Event cannot end before it starts")]
    InvalidSchedule,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Access denied: requires one of [{0}]")]
    AccessDenied(String),

    #[error("Not an admin of this community")]
    NotCommunityAdmin,

    #[error("Cannot deactivate your own admin record")]
    CannotDeactivateSelf,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Username already taken")]
    UsernameAlreadyExists,

    #[error("Community name already taken")]
    CommunityNameTaken,

    #[error("User is already on the admin team")]
    AlreadyAdmin,

    #[error("An admin with this name already exists")]
    AdminNameTaken,

    #[error("Already a member of this community")]
    AlreadyMember,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Community is not approved")]
    CommunityNotApproved,

    #[error("Admin is not active")]
    AdminInactive,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::AdminNotFound(_) => "UNKNOWN_ADMIN",
            Self::CommunityNotFound(_) => "UNKNOWN_COMMUNITY",
            Self::SubmissionNotFound(_) => "UNKNOWN_SUBMISSION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::UnknownZone(_) => "UNKNOWN_ZONE",
            Self::UnknownRole(_) => "UNKNOWN_ROLE",
            Self::UnknownStatus(_) => "UNKNOWN_STATUS",
            Self::UnknownSubmissionKind(_) => "UNKNOWN_SUBMISSION_KIND",
            Self::UnknownAllottedRole(_) => "UNKNOWN_ALLOTTED_ROLE",
            Self::InvalidSchedule => "INVALID_SCHEDULE",

            // Authorization
            Self::AccessDenied(_) => "ACCESS_DENIED",
            Self::NotCommunityAdmin => "NOT_COMMUNITY_ADMIN",
            Self::CannotDeactivateSelf => "CANNOT_DEACTIVATE_SELF",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::CommunityNameTaken => "COMMUNITY_NAME_TAKEN",
            Self::AlreadyAdmin => "ALREADY_ADMIN",
            Self::AdminNameTaken => "ADMIN_NAME_TAKEN",
            Self::AlreadyMember => "ALREADY_MEMBER",

            // Business Rules
            Self::CommunityNotApproved => "COMMUNITY_NOT_APPROVED",
            Self::AdminInactive => "ADMIN_INACTIVE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::AdminNotFound(_)
                | Self::CommunityNotFound(_)
                | Self::SubmissionNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::UnknownZone(_)
                | Self::UnknownRole(_)
                | Self::UnknownStatus(_)
                | Self::UnknownSubmissionKind(_)
                | Self::UnknownAllottedRole(_)
                | Self::InvalidSchedule
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::AccessDenied(_) | Self::NotCommunityAdmin | Self::CannotDeactivateSelf
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::UsernameAlreadyExists
                | Self::CommunityNameTaken
                | Self::AlreadyAdmin
                | Self::AdminNameTaken
                | Self::AlreadyMember
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::CommunityNotFound(RecordId::new(1));
        assert_eq!(err.code(), "UNKNOWN_COMMUNITY");

        let err = DomainError::AccessDenied("admin, superuser".to_string());
        assert_eq!(err.code(), "ACCESS_DENIED");
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::SubmissionNotFound(RecordId::new(1)).is_not_found());
        assert!(DomainError::UnknownSubmissionKind("x".to_string()).is_validation());
        assert!(DomainError::CannotDeactivateSelf.is_authorization());
        assert!(DomainError::AlreadyAdmin.is_conflict());
        assert!(!DomainError::CommunityNotApproved.is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::UserNotFound(RecordId::new(123));
        assert_eq!(err.to_string(), "User not found: 123");

        let err = DomainError::AccessDenied("admin, superuser".to_string());
        assert_eq!(err.to_string(), "Access denied: requires one of [admin, superuser]");
    }
}
