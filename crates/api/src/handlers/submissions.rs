//! Handlers for the public submission endpoints: intake, lookup, and the
//! progress tracker.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use sdgclub_core::error::CoreError;
use sdgclub_core::intake::{validate_submission, NewSubmission};
use sdgclub_core::status::{SubmissionStatus, StageDescriptor, STAGES};
use sdgclub_core::types::RecordId;
use sdgclub_db::models::submission::{CreateSubmission, Submission};
use sdgclub_db::repositories::SubmissionRepo;
use sdgclub_notify::EmailKind;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::notify::send_email;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A submission as returned to clients: the stored row plus the derived
/// stage index (`null` for rejected submissions).
#[derive(Debug, Serialize)]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub submission: Submission,
    pub stage: Option<usize>,
}

impl SubmissionPayload {
    /// Wrap a stored submission, deriving the stage from its status.
    pub fn from_submission(submission: Submission) -> AppResult<Self> {
        let stage = submission.status()?.stage_index();
        Ok(SubmissionPayload { submission, stage })
    }
}

/// One stage entry on the public tracker.
#[derive(Debug, Serialize)]
pub struct TrackerStage {
    pub status: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// `complete`, `current`, or `upcoming`.
    pub state: &'static str,
}

/// Tracker projection payload for one submission.
///
/// Everything here is derived from the stored status; the projection holds
/// no state of its own.
#[derive(Debug, Serialize)]
pub struct TrackerResponse {
    pub id: RecordId,
    pub title: String,
    pub status: &'static str,
    pub rejected: bool,
    pub stage: Option<usize>,
    /// Progress percentage in steps of 20; 0 when rejected.
    pub progress: u8,
    pub stages: Vec<TrackerStage>,
    pub next_step: Option<&'static str>,
}

impl TrackerResponse {
    /// Project a stored submission into its public tracker view.
    pub fn project(submission: &Submission) -> AppResult<Self> {
        let status = submission.status()?;
        let stage = status.stage_index();

        let stages = STAGES
            .iter()
            .enumerate()
            .map(|(index, descriptor): (usize, &StageDescriptor)| {
                let state = match stage {
                    Some(current) if index < current => "complete",
                    Some(current) if index == current => "current",
                    // Rejected submissions show every stage as upcoming;
                    // the terminal banner carries the rejection.
                    _ => "upcoming",
                };
                TrackerStage {
                    status: descriptor.status.as_str(),
                    title: descriptor.title,
                    description: descriptor.description,
                    state,
                }
            })
            .collect();

        Ok(TrackerResponse {
            id: submission.id,
            title: submission.title.clone(),
            status: status.as_str(),
            rejected: status == SubmissionStatus::Rejected,
            stage,
            progress: status.progress_percent(),
            stages,
            next_step: status.next_step(),
        })
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/submissions
///
/// Validate and store a new project pitch. Returns 201 with the created
/// record; its `id` is the public tracking handle. A confirmation email is
/// sent best-effort.
pub async fn create_submission(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<NewSubmission>,
) -> AppResult<(StatusCode, Json<DataResponse<SubmissionPayload>>)> {
    validate_submission(&input).map_err(AppError::Core)?;

    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let create = CreateSubmission {
        name: input.name,
        email: input.email,
        phone: input.phone,
        registration_number: input.registration_number,
        branch: input.branch,
        year: input.year,
        title: input.title,
        description: input.description,
        primary_sdg: input.primary_sdg,
        secondary_sdgs: input.secondary_sdgs,
        sdg_track: input.sdg_track,
        timeline: input.timeline,
        expected_impact: input.expected_impact,
        team_members: input.team_members,
        user_agent,
    };

    let submission = SubmissionRepo::create(&state.pool, &create).await?;
    tracing::info!(submission_id = %submission.id, title = %submission.title, "New project submission");

    send_email(
        &state,
        submission.email.clone(),
        EmailKind::Confirmation,
        submission.name.clone(),
        submission.title.clone(),
        submission.id.to_string(),
        None,
    );

    let payload = SubmissionPayload::from_submission(submission)?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: payload })))
}

/// GET /api/v1/submissions/{id}
///
/// Public lookup by tracking ID. A missing row is a 404, never an empty
/// success.
pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<Json<DataResponse<SubmissionPayload>>> {
    let submission = SubmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Submission", id)))?;

    let payload = SubmissionPayload::from_submission(submission)?;
    Ok(Json(DataResponse { data: payload }))
}

/// GET /api/v1/submissions/{id}/tracker
///
/// Public tracker projection: stage index, progress percentage, stage list,
/// and the canned "what's next" text.
pub async fn get_tracker(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<Json<DataResponse<TrackerResponse>>> {
    let submission = SubmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Submission", id)))?;

    let tracker = TrackerResponse::project(&submission)?;
    Ok(Json(DataResponse { data: tracker }))
}
