//! Integration tests for mentor application intake and admin review.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, get, get_auth, patch_json_auth, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn sample_mentor_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Asha Rao",
        "email": "asha.rao@learner.manipal.edu",
        "year": "graduate",
        "branch": "biotech",
        "phone": "+91 9123456780",
        "expertise": ["water management", "composting"],
        "previous_experience": "Two years with the campus eco-club",
        "availability_per_week": "4-6 hours"
    })
}

async fn seed_mentor(pool: &PgPool) -> String {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/mentors", sample_mentor_body()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Intake
// ---------------------------------------------------------------------------

/// A valid mentor application is stored with 201 and defaults to `received`.
#[sqlx::test(migrations = "../../db/migrations")]
async fn create_mentor_application(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/mentors", sample_mentor_body()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["id"].is_string());
    assert_eq!(json["data"]["name"], "Asha Rao");
    assert_eq!(json["data"]["status"], "received");
    assert_eq!(
        json["data"]["expertise"],
        serde_json::json!(["water management", "composting"])
    );
}

/// Only the background fields are optional; the core four are required.
#[sqlx::test(migrations = "../../db/migrations")]
async fn optional_fields_may_be_omitted(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "name": "Dev Nair",
        "email": "dev.nair@learner.manipal.edu",
        "year": "4",
        "branch": "mech"
    });
    let response = post_json(app, "/api/v1/mentors", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

/// An application with an unknown year vocabulary value is rejected.
#[sqlx::test(migrations = "../../db/migrations")]
async fn create_mentor_rejects_invalid_year(pool: PgPool) {
    let mut body = sample_mentor_body();
    body["year"] = serde_json::json!("alumni");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/mentors", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Admin review
// ---------------------------------------------------------------------------

/// Listing mentor applications requires admin auth.
#[sqlx::test(migrations = "../../db/migrations")]
async fn list_mentors_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/admin/mentors").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Admins can list and search applications.
#[sqlx::test(migrations = "../../db/migrations")]
async fn list_and_search_mentors(pool: PgPool) {
    seed_mentor(&pool).await;
    let token = admin_token(&pool, "mentors@test.com").await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/admin/mentors", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);

    // Search matches name and email, case-insensitively.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/admin/mentors?search=ASHA", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/mentors?search=nomatch", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 0);
}

/// Mentor status has no fixed vocabulary: any non-empty label is accepted.
#[sqlx::test(migrations = "../../db/migrations")]
async fn update_mentor_accepts_free_form_status(pool: PgPool) {
    let id = seed_mentor(&pool).await;
    let token = admin_token(&pool, "freeform@test.com").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "status": "shortlisted-for-orientation",
        "admin_notes": "Invite to the January batch",
        "processed_by": "1"
    });
    let response = patch_json_auth(app, &format!("/api/v1/admin/mentors/{id}"), body, &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "shortlisted-for-orientation");
    assert_eq!(json["data"]["admin_notes"], "Invite to the January batch");
}

/// An empty status string is the one update that is refused.
#[sqlx::test(migrations = "../../db/migrations")]
async fn update_mentor_rejects_empty_status(pool: PgPool) {
    let id = seed_mentor(&pool).await;
    let token = admin_token(&pool, "emptystatus@test.com").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "status": "  " });
    let response = patch_json_auth(app, &format!("/api/v1/admin/mentors/{id}"), body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Partial updates leave untouched fields alone.
#[sqlx::test(migrations = "../../db/migrations")]
async fn update_mentor_is_partial(pool: PgPool) {
    let id = seed_mentor(&pool).await;
    let token = admin_token(&pool, "partial@test.com").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "admin_notes": "Checked references" });
    let response = patch_json_auth(app, &format!("/api/v1/admin/mentors/{id}"), body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "received");
    assert_eq!(json["data"]["admin_notes"], "Checked references");

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/admin/mentors/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["admin_notes"], "Checked references");
}

/// Updating a nonexistent application returns 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn update_unknown_mentor_returns_404(pool: PgPool) {
    let token = admin_token(&pool, "nomentor@test.com").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "admin_notes": "n/a" });
    let response = patch_json_auth(
        app,
        "/api/v1/admin/mentors/00000000-0000-7000-8000-000000000000",
        body,
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
