//! HTTP-level integration tests for the admin auth endpoints.
//!
//! Tests cover login, token refresh, logout, admin guard enforcement,
//! and account lockout.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_admin, get, get_auth, post_json, post_json_auth};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Log in an admin via the API and return the JSON response containing
/// `access_token`, `refresh_token`, and `user` info.
async fn login_admin(app: axum::Router, email: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Auth flow tests
// ---------------------------------------------------------------------------

/// Successful login returns 200 with access_token, refresh_token, and user info.
#[sqlx::test(migrations = "../../db/migrations")]
async fn login_success(pool: PgPool) {
    let (user, password) = create_test_admin(&pool, "login@test.com").await;
    let app = common::build_test_app(pool);

    let json = login_admin(app, "login@test.com", &password).await;

    assert!(
        json["access_token"].is_string(),
        "response must contain access_token"
    );
    assert!(
        json["refresh_token"].is_string(),
        "response must contain refresh_token"
    );
    assert!(
        json["expires_in"].is_number(),
        "response must contain expires_in"
    );
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["email"], "login@test.com");
    assert_eq!(json["user"]["role"], "admin");
    assert_eq!(json["user"]["is_active"], true);
    // The embedded user is the safe projection: no credential material.
    assert!(
        json["user"].get("password_hash").is_none(),
        "auth response must not leak the password hash"
    );
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn login_wrong_password(pool: PgPool) {
    let (_user, _password) = create_test_admin(&pool, "wrongpw@test.com").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "wrongpw@test.com", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent email returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ghost@test.com", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login to a deactivated account returns 403.
#[sqlx::test(migrations = "../../db/migrations")]
async fn login_inactive_user(pool: PgPool) {
    let (user, password) = create_test_admin(&pool, "inactive@test.com").await;
    sqlx::query("UPDATE admin_users SET is_active = FALSE WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .expect("deactivation should succeed");

    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "inactive@test.com", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A valid refresh token returns new tokens.
#[sqlx::test(migrations = "../../db/migrations")]
async fn token_refresh(pool: PgPool) {
    let (_user, password) = create_test_admin(&pool, "refresher@test.com").await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_admin(app, "refresher@test.com", &password).await;
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(
        json["access_token"].is_string(),
        "refreshed response must contain access_token"
    );
    assert!(
        json["refresh_token"].is_string(),
        "refreshed response must contain refresh_token"
    );
    // Token rotation: the new refresh token must differ from the original.
    assert_ne!(
        json["refresh_token"].as_str().unwrap(),
        refresh_token,
        "refresh token must rotate on use"
    );
}

/// A refresh token cannot be used twice (rotation revokes the session).
#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_token_single_use(pool: PgPool) {
    let (_user, password) = create_test_admin(&pool, "rotate@test.com").await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_admin(app, "rotate@test.com", &password).await;
    let refresh_token = login_json["refresh_token"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Second use of the same token must be rejected.
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Refreshing with a garbage token returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_with_invalid_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "refresh_token": "not-a-real-token" });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout revokes sessions and returns 204 No Content.
#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_revokes_sessions(pool: PgPool) {
    let (_user, password) = create_test_admin(&pool, "logout@test.com").await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_admin(app, "logout@test.com", &password).await;
    let access_token = login_json["access_token"].as_str().unwrap().to_string();
    let refresh_token = login_json["refresh_token"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({});
    let response = post_json_auth(app, "/api/v1/auth/logout", body, &access_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The refresh token from the revoked session no longer works.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Admin guard enforcement tests
// ---------------------------------------------------------------------------

/// Admin endpoints require authentication -- missing token returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_endpoint_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/admin/submissions").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A garbage bearer token returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_endpoint_rejects_invalid_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/submissions", "not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Account lockout: after 5 failed login attempts the account is locked.
#[sqlx::test(migrations = "../../db/migrations")]
async fn account_lockout_after_failed_attempts(pool: PgPool) {
    let (_user, _password) = create_test_admin(&pool, "lockme@test.com").await;

    // Fail login 5 times with the wrong password to trigger the lock.
    for _ in 0..5 {
        let app = common::build_test_app(pool.clone());
        let body = serde_json::json!({ "email": "lockme@test.com", "password": "wrong_pass" });
        let response = post_json(app, "/api/v1/auth/login", body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // The 6th attempt (even with the wrong password) should return 403 (locked).
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "lockme@test.com", "password": "wrong_pass" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    let error_msg = json["error"].as_str().unwrap_or("");
    assert!(
        error_msg.contains("locked"),
        "error message should mention the account is locked, got: {error_msg}"
    );
}
