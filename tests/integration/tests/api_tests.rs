//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

/// Register a fresh account and return its auth payload
async fn register(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let request = RegisterRequest::unique();
    let response = server.post("/auth/register", &request).await.unwrap();
    let auth = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

/// Start a server and register one superuser on it
async fn server_with_superuser() -> (TestServer, AuthResponse) {
    let request = RegisterRequest::unique();
    let server = TestServer::start_with_superusers(&[request.email.as_str()])
        .await
        .expect("Failed to start server");
    let response = server.post("/auth/register", &request).await.unwrap();
    let root: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(root.user.role, "superuser");
    (server, root)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_root("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_root("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_fetch_current_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register(&server).await;

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.role, "member");
    assert_eq!(auth.token_type, "Bearer");

    let response = server.get_auth("/users/@me", &auth.access_token).await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, auth.user.id);
    assert_eq!(me.email, request.email);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register(&server).await;

    let response = server.post("/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login_and_wrong_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register(&server).await;

    let response = server
        .post("/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!auth.access_token.is_empty());

    let wrong = LoginRequest {
        email: request.email.clone(),
        password: "WrongPassword!".to_string(),
    };
    let response = server.post("/auth/login", &wrong).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_and_logout_revokes_session() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;

    let body = json!({ "refresh_token": auth.refresh_token });
    let response = server.post("/auth/refresh", &body).await.unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth_empty("/auth/logout", &refreshed.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/users/@me", &refreshed.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_missing_and_invalid_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/users/@me").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTHORIZATION");

    let response = server.get_auth("/users/@me", "not-a-jwt").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Access Tests
// ============================================================================

#[tokio::test]
async fn test_access_check() {
    if !check_test_env() {
        return;
    }

    let (server, root) = server_with_superuser().await;
    let (_, member) = register(&server).await;

    let response = server.get("/access/check?roles=admin,superuser").await.unwrap();
    let anonymous: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(anonymous["authorized"], false);
    assert_eq!(anonymous["redirect"], "/");

    let response = server
        .get_auth("/access/check?roles=admin,superuser", &member.access_token)
        .await
        .unwrap();
    let denied: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(denied["authorized"], false);

    let response = server
        .get_auth("/access/check?roles=admin,superuser", &root.access_token)
        .await
        .unwrap();
    let granted: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(granted["authorized"], true);
    assert!(granted.get("redirect").is_none());

    let response = server.get("/access/check?roles=wizard").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Community Tests
// ============================================================================

#[tokio::test]
async fn test_community_review_flow() {
    if !check_test_env() {
        return;
    }

    let (server, root) = server_with_superuser().await;
    let (_, creator) = register(&server).await;
    let (_, joiner) = register(&server).await;

    let response = server
        .post_auth("/communities", &creator.access_token, &community_request("western"))
        .await
        .unwrap();
    let community: CommunityResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(community.status, "pending");
    assert_eq!(community.badge, "yellow");
    assert_eq!(community.tags, ["Rust", "systems"]);
    assert_eq!(community.created_by, creator.user.id);

    // Pending communities stay out of the public directory
    let path = format!("/communities/{}", community.id);
    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let join_path = format!("/communities/{}/members", community.id);
    let response = server
        .post_auth_empty(&join_path, &joiner.access_token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNPROCESSABLE_ENTITY).await.unwrap();
    assert_eq!(code, "COMMUNITY_NOT_APPROVED");

    let status_path = format!("/communities/{}/status", community.id);
    let response = server
        .patch_auth(&status_path, &creator.access_token, &json!({ "status": "approved" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .patch_auth(&status_path, &root.access_token, &json!({ "status": "approved" }))
        .await
        .unwrap();
    let approved: CommunityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(approved.badge, "green");

    let response = server
        .post_auth_empty(&join_path, &joiner.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get(&path).await.unwrap();
    let detail: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail["member_count"], 2);

    let response = server
        .get_auth("/users/@me/memberships", &joiner.access_token)
        .await
        .unwrap();
    let memberships: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(memberships
        .iter()
        .any(|m| m["community_id"] == community.id.as_str() && m["is_admin"] == false));

    let search = format!("/communities?q={}", community.name);
    let response = server.get(&search).await.unwrap();
    let found: Vec<CommunityResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].zone, "western");
}

#[tokio::test]
async fn test_community_validation_and_bad_ids() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, member) = register(&server).await;

    let mut body = community_request("southern");
    body["name"] = json!("");
    let response = server
        .post_auth("/communities", &member.access_token, &body)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");

    let response = server.get("/communities/not-a-number").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");

    let response = server.get("/communities?zone=atlantis").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "UNKNOWN_ZONE");
}

// ============================================================================
// Event and Zone Tests
// ============================================================================

#[tokio::test]
async fn test_events_and_zone_stats() {
    if !check_test_env() {
        return;
    }

    let (server, root) = server_with_superuser().await;
    let (_, organiser) = register(&server).await;
    let (_, stranger) = register(&server).await;

    let response = server
        .post_auth("/communities", &organiser.access_token, &community_request("central"))
        .await
        .unwrap();
    let community: CommunityResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let status_path = format!("/communities/{}/status", community.id);
    let response = server
        .patch_auth(&status_path, &root.access_token, &json!({ "status": "approved" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let events_path = format!("/communities/{}/events", community.id);
    let title = format!("Meetup {}", unique_suffix());
    let response = server
        .post_auth(&events_path, &organiser.access_token, &event_request(&title, 5))
        .await
        .unwrap();
    let event: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(event["zone"], "central");

    let response = server
        .post_auth(&events_path, &stranger.access_token, &event_request("Crash", 5))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_COMMUNITY_ADMIN");

    let response = server.get("/events?zone=central").await.unwrap();
    let events: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(events.iter().any(|e| e["title"] == title.as_str()));

    let response = server.get("/zones").await.unwrap();
    let zones: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(zones.len(), 6);

    let response = server.get("/zones/central").await.unwrap();
    let zone: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(zone["upcoming_events"].as_i64().unwrap() >= 1);
    assert!(zone["communities"]
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["id"] == community.id.as_str()));

    let response = server.get("/zones/atlantis").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Form and Submission Tests
// ============================================================================

#[tokio::test]
async fn test_form_schema() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/forms/volunteer").await.unwrap();
    let schema: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(schema["title"], "Volunteer Applications");
    let names: Vec<&str> = schema["fields"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|f| f["name"].as_str())
        .collect();
    assert_eq!(&names[..2], ["name", "email"]);
    assert!(names.contains(&"availability"));

    let response = server.get("/forms/bands").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "UNKNOWN_SUBMISSION_KIND");
}

#[tokio::test]
async fn test_submission_review_flow() {
    if !check_test_env() {
        return;
    }

    let (server, root) = server_with_superuser().await;
    let (_, applicant) = register(&server).await;

    let response = server
        .post_auth("/forms/volunteer", &applicant.access_token, &volunteer_form())
        .await
        .unwrap();
    let submitted: SubmissionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(submitted.kind, "volunteer");
    assert_eq!(submitted.status, "pending");
    assert_eq!(submitted.submitted_by.as_deref(), Some(applicant.user.id.as_str()));

    // Applicants cannot see the review table
    let response = server
        .get_auth("/submissions/volunteer", &applicant.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .get_auth("/submissions/volunteer?status=pending", &root.access_token)
        .await
        .unwrap();
    let table: SubmissionTable = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(table.title, "Volunteer Applications");
    assert_eq!(table.kind, "volunteer");
    assert_eq!(table.total, table.rows.len());
    assert!(!table.empty);
    let row = table
        .rows
        .iter()
        .find(|r| r.id == submitted.id)
        .expect("submitted row listed");
    assert_eq!(row.badge, "yellow");
    assert_eq!(row.name, submitted.name);
    assert_eq!(row.submitted_on.len(), "dd/mm/yyyy".len());

    let item = format!("/submissions/volunteer/{}", submitted.id);
    let response = server
        .patch_auth(
            &item,
            &root.access_token,
            &json!({ "status": "approved", "note": "  " }),
        )
        .await
        .unwrap();
    let reviewed: SubmissionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reviewed.status, "approved");
    assert_eq!(reviewed.review_note, None);

    let response = server
        .get_auth("/submissions/volunteer?status=approved", &root.access_token)
        .await
        .unwrap();
    let table: SubmissionTable = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(table
        .rows
        .iter()
        .any(|r| r.id == submitted.id && r.status == "approved" && r.badge == "green"));

    // Item routes are scoped by kind
    let wrong_kind = format!("/submissions/sponsor/{}", submitted.id);
    let response = server.get_auth(&wrong_kind, &root.access_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.delete_auth(&item, &root.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&item, &root.access_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_anonymous_submission_and_bad_forms() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/forms/volunteer", &volunteer_form()).await.unwrap();
    let submitted: SubmissionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(submitted.submitted_by.is_none());

    let response = server
        .post("/forms/volunteer", &json!({ "name": "No Email" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post("/forms/sponsor", &json!({ "name": "Acme", "email": "nope" }))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_EMAIL");
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_lifecycle() {
    if !check_test_env() {
        return;
    }

    let (server, root) = server_with_superuser().await;
    let (_, candidate) = register(&server).await;

    let body = json!({
        "user_id": candidate.user.id,
        "zone": "eastern",
        "allotted_roles": ["sponsors"]
    });

    let response = server
        .post_auth("/admins", &candidate.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.post_auth("/admins", &root.access_token, &body).await.unwrap();
    let admin: AdminResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(admin.user_id, candidate.user.id);
    assert_eq!(admin.allotted_roles, ["sponsors"]);
    assert!(admin.is_active);

    let response = server.post_auth("/admins", &root.access_token, &body).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // The role change applies to the existing token immediately
    let response = server
        .get_auth("/users/@me", &candidate.access_token)
        .await
        .unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.role, "admin");

    // Sponsor duty does not cover volunteers
    let response = server.post("/forms/volunteer", &volunteer_form()).await.unwrap();
    let submitted: SubmissionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let item = format!("/submissions/volunteer/{}", submitted.id);
    let response = server
        .patch_auth(&item, &candidate.access_token, &json!({ "status": "rejected" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let admin_path = format!("/admins/{}", admin.id);
    let response = server
        .patch_auth(
            &admin_path,
            &root.access_token,
            &json!({ "allotted_roles": ["sponsors", "volunteers"] }),
        )
        .await
        .unwrap();
    let updated: AdminResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.allotted_roles.len(), 2);

    let response = server
        .patch_auth(&item, &candidate.access_token, &json!({ "status": "rejected" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.delete_auth(&admin_path, &root.access_token).await.unwrap();
    let deactivated: AdminResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!deactivated.is_active);

    let response = server
        .get_auth("/admins?zone=eastern&active=false", &root.access_token)
        .await
        .unwrap();
    let inactive: Vec<AdminResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(inactive.iter().any(|a| a.id == admin.id));

    let reactivate = format!("/admins/{}/reactivate", admin.id);
    let response = server
        .post_auth_empty(&reactivate, &root.access_token)
        .await
        .unwrap();
    let reactivated: AdminResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(reactivated.is_active);
    assert_eq!(reactivated.zone, "eastern");
}
