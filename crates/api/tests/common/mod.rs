//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the application through [`build_app_router`] so tests exercise the
//! exact middleware stack (CORS, request ID, timeout, tracing, panic
//! recovery) that production uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use sdgclub_api::auth::jwt::{generate_access_token, JwtConfig};
use sdgclub_api::auth::password::hash_password;
use sdgclub_api::config::{ServerConfig, WorkflowPolicy};
use sdgclub_api::router::build_app_router;
use sdgclub_api::state::AppState;
use sdgclub_db::models::admin_user::{AdminUser, CreateAdminUser};
use sdgclub_db::repositories::AdminUserRepo;

/// Fixed JWT secret shared by the test app and token helpers.
const TEST_JWT_SECRET: &str = "integration-test-secret-not-for-production";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, the permissive workflow policy, and no
/// SMTP configuration (emails disabled).
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        workflow: WorkflowPolicy {
            lock_terminal: false,
        },
        email: None,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and the default test configuration.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Build the application router with an explicit configuration, for tests
/// that need non-default policy (e.g. terminal status locking).
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        mailer: None,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PATCH request with a JSON body and a Bearer token.
pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("PATCH")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

/// Create an admin user directly in the database and return the row plus
/// the plaintext password used.
pub async fn create_test_admin(pool: &PgPool, email: &str) -> (AdminUser, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateAdminUser {
        email: email.to_string(),
        name: "Test Admin".to_string(),
        password_hash: hashed,
        role: "admin".to_string(),
        permissions: vec![],
    };
    let user = AdminUserRepo::create(pool, &input)
        .await
        .expect("admin creation should succeed");
    (user, password.to_string())
}

/// Create an admin user and mint an access token for it directly, skipping
/// the login endpoint.
pub async fn admin_token(pool: &PgPool, email: &str) -> String {
    let (user, _password) = create_test_admin(pool, email).await;
    generate_access_token(user.id, &user.role, &test_config().jwt)
        .expect("token generation should succeed")
}

/// A complete, valid submission request body for the public intake endpoint.
pub fn sample_submission_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Priya Sharma",
        "email": "priya.sharma@learner.manipal.edu",
        "phone": "+91 9876543210",
        "registration_number": "225890123",
        "branch": "cse",
        "year": "3",
        "title": "Campus Rainwater Harvesting System",
        "description": "A low-cost rooftop rainwater harvesting and filtration \
                        system for the academic blocks, cutting freshwater demand \
                        for non-potable uses.",
        "primary_sdg": "sdg-6",
        "secondary_sdgs": ["sdg-11", "sdg-13"],
        "timeline": "6",
        "expected_impact": "Save an estimated 400 kilolitres of fresh water per year.",
        "team_members": [
            { "name": "Arjun Rao", "email": "arjun.rao@learner.manipal.edu", "role": "Hardware" }
        ]
    })
}
