//! Handlers for mentor applications: public intake plus the admin listing
//! and update endpoints.
//!
//! Mentor applications have no formal workflow: status is a loose string
//! defaulting to `received`, and admin updates are plain field overwrites
//! with no audit trail.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sdgclub_core::error::CoreError;
use sdgclub_core::intake::{validate_mentor_application, NewMentorApplication};
use sdgclub_core::types::RecordId;
use sdgclub_db::models::mentor::{
    CreateMentorApplication, MentorApplication, MentorFilter, UpdateMentorApplication,
};
use sdgclub_db::models::Page;
use sdgclub_db::repositories::MentorRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / query parameter types
// ---------------------------------------------------------------------------

/// Query parameters for the mentor listing contract.
///
/// Unrecognized keys are rejected rather than ignored.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MentorListParams {
    pub status: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Request body for `PATCH /admin/mentors/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateMentorRequest {
    pub status: Option<String>,
    pub admin_notes: Option<String>,
    pub processed_by: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/mentors
///
/// Public mentor application intake. No confirmation email is sent.
pub async fn create_mentor(
    State(state): State<AppState>,
    Json(input): Json<NewMentorApplication>,
) -> AppResult<(StatusCode, Json<DataResponse<MentorApplication>>)> {
    validate_mentor_application(&input).map_err(AppError::Core)?;

    let create = CreateMentorApplication {
        name: input.name,
        email: input.email,
        year: input.year,
        branch: input.branch,
        phone: input.phone,
        expertise: input.expertise,
        previous_experience: input.previous_experience,
        availability_per_week: input.availability_per_week,
    };

    let application = MentorRepo::create(&state.pool, &create).await?;
    tracing::info!(application_id = %application.id, "New mentor application");

    Ok((StatusCode::CREATED, Json(DataResponse { data: application })))
}

/// GET /api/v1/admin/mentors
pub async fn list_mentors(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<MentorListParams>,
) -> AppResult<Json<DataResponse<Page<MentorApplication>>>> {
    let filter = MentorFilter {
        status: params.status,
        search: params.search,
        limit: params.limit,
        offset: params.offset,
    };
    let page = MentorRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/admin/mentors/{id}
pub async fn get_mentor(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<RecordId>,
) -> AppResult<Json<DataResponse<MentorApplication>>> {
    let application = MentorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Mentor application", id)))?;
    Ok(Json(DataResponse { data: application }))
}

/// PATCH /api/v1/admin/mentors/{id}
///
/// Partial update of status, notes, and the processed-by reference.
pub async fn update_mentor(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<RecordId>,
    Json(input): Json<UpdateMentorRequest>,
) -> AppResult<Json<DataResponse<MentorApplication>>> {
    if let Some(status) = input.status.as_deref() {
        if status.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Status must not be empty".into(),
            )));
        }
    }

    let update = UpdateMentorApplication {
        status: input.status,
        admin_notes: input.admin_notes,
        processed_by: input.processed_by,
    };

    let application = MentorRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Mentor application", id)))?;
    Ok(Json(DataResponse { data: application }))
}
