//! Integration tests for the JSON error contract.
//!
//! Every handled error returns a body of the shape
//! `{"error": <message>, "code": <CODE>}` with a matching HTTP status.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, get, get_auth, post_json};
use sqlx::PgPool;

/// 404 bodies carry the NOT_FOUND code and name the missing entity.
#[sqlx::test(migrations = "../../db/migrations")]
async fn not_found_body_shape(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/submissions/00000000-0000-7000-8000-000000000000",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    let message = json["error"].as_str().unwrap();
    assert!(
        message.contains("Submission"),
        "message should name the entity, got: {message}"
    );
}

/// Validation failures carry VALIDATION_ERROR with a 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn validation_error_body_shape(pool: PgPool) {
    let mut body = common::sample_submission_body();
    body["branch"] = serde_json::json!("aerospace");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/submissions", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].is_string());
}

/// Unauthorized responses carry the UNAUTHORIZED code.
#[sqlx::test(migrations = "../../db/migrations")]
async fn unauthorized_body_shape(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/admin/submissions").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

/// Error responses still carry the request id header.
#[sqlx::test(migrations = "../../db/migrations")]
async fn errors_carry_request_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/submissions/00000000-0000-7000-8000-000000000000",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(
        response.headers().get("x-request-id").is_some(),
        "error responses must carry x-request-id"
    );
}

/// A malformed UUID in the path is a client error, not a 500.
#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_id_is_a_client_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/submissions/not-a-uuid").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A malformed JSON body is a client error.
#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_is_a_client_error(pool: PgPool) {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/submissions")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(
        response.status().is_client_error(),
        "malformed JSON should be a 4xx, got {}",
        response.status()
    );
}

/// Admin lookups for foreign-keyed resources distinguish 404 from empty.
#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_history_404_body_shape(pool: PgPool) {
    let token = admin_token(&pool, "errors@test.com").await;

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        "/api/v1/admin/submissions/00000000-0000-7000-8000-000000000000/updates",
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
