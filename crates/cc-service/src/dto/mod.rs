//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AccessCheckQuery, AdminListQuery, AppointAdminRequest, CommunitySearchQuery,
    CreateCommunityRequest, CreateEventRequest, EventListQuery, LoginRequest, LogoutRequest,
    RefreshTokenRequest, RegisterRequest, ReviewSubmissionRequest, SubmissionListQuery,
    UpdateAdminRequest, UpdateStatusRequest,
};

// Re-export commonly used response types
pub use responses::{
    AccessCheckResponse, AdminResponse, AuthResponse, CommunityDetailResponse, CommunityResponse,
    CurrentUserResponse, EventResponse, FormSchemaResponse, HealthChecks, HealthResponse,
    MembershipResponse, ReadinessResponse, SubmissionResponse, SubmissionRow, SubmissionTable,
    ZoneDetailResponse, ZoneStatsResponse,
};

// Re-export mappers and helper structs
pub use mappers::{format_en_in_date, CommunityWithCount, MembershipWithCommunity};
