//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{
    access, admins, auth, communities, events, forms, health, submissions, users, zones,
};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes, kept outside the rate limiter
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(access_routes())
        .merge(admin_routes())
        .merge(community_routes())
        .merge(submission_routes())
        .merge(form_routes())
        .merge(event_routes())
        .merge(zone_routes())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me/memberships", get(users::get_memberships))
}

fn access_routes() -> Router<AppState> {
    Router::new().route("/access/check", get(access::check_access))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admins", get(admins::list_admins).post(admins::appoint_admin))
        .route(
            "/admins/:admin_id",
            patch(admins::update_admin).delete(admins::deactivate_admin),
        )
        .route("/admins/:admin_id/reactivate", post(admins::reactivate_admin))
}

fn community_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/communities",
            get(communities::search_communities).post(communities::create_community),
        )
        .route("/communities/:community_id", get(communities::get_community))
        .route(
            "/communities/:community_id/status",
            patch(communities::update_community_status),
        )
        .route(
            "/communities/:community_id/members",
            post(communities::join_community),
        )
        .route(
            "/communities/:community_id/events",
            post(communities::create_event),
        )
}

fn submission_routes() -> Router<AppState> {
    Router::new()
        .route("/submissions/:kind", get(submissions::list_submissions))
        .route(
            "/submissions/:kind/:submission_id",
            get(submissions::get_submission)
                .patch(submissions::review_submission)
                .delete(submissions::delete_submission),
        )
}

fn form_routes() -> Router<AppState> {
    Router::new().route(
        "/forms/:kind",
        get(forms::get_form_schema).post(forms::submit_form),
    )
}

fn event_routes() -> Router<AppState> {
    Router::new().route("/events", get(events::list_events))
}

fn zone_routes() -> Router<AppState> {
    Router::new()
        .route("/zones", get(zones::list_zones))
        .route("/zones/:zone", get(zones::get_zone))
}
