//! # cc-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AccessService, AdminService, AuthService, CommunityService, EventService, FormService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SubmissionService,
    UserService, ZoneService,
};
