//! Handlers for the admin dashboard: submission listing, stats, the status
//! workflow engine, and audit history.
//!
//! Every state-changing operation here receives the acting admin explicitly
//! through the [`RequireAdmin`] extractor and writes that identity into the
//! audit trail. The status/note write and the audit append are two
//! sequential statements; a failed audit append after a successful write is
//! surfaced as [`AppError::AuditWriteFailure`], never swallowed.

use axum::extract::{Path, Query, State};
use axum::Json;
use sdgclub_core::error::CoreError;
use sdgclub_core::status::{check_transition, SubmissionStatus};
use sdgclub_core::types::RecordId;
use sdgclub_db::models::submission::{
    Submission, SubmissionFilter, SubmissionStats, UpdateSubmissionDetails,
};
use sdgclub_db::models::update::{
    CreateProjectUpdate, ProjectUpdate, UPDATE_TYPE_NOTE, UPDATE_TYPE_STATUS_CHANGE,
};
use sdgclub_db::models::Page;
use sdgclub_db::repositories::{ProjectUpdateRepo, SubmissionRepo};
use sdgclub_notify::EmailKind;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::notify::send_email;
use crate::response::DataResponse;
use crate::state::AppState;

use super::submissions::SubmissionPayload;

// ---------------------------------------------------------------------------
// Request / query parameter types
// ---------------------------------------------------------------------------

/// Query parameters for the submission listing contract.
///
/// Unrecognized keys are rejected rather than ignored.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmissionListParams {
    /// `"all"` (or absent) for no filter, else one of the six status values.
    pub status: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl SubmissionListParams {
    /// Convert into the typed repository filter, validating the status.
    fn into_filter(self) -> AppResult<SubmissionFilter> {
        let status = match self.status.as_deref() {
            None | Some("all") => None,
            Some(value) => Some(SubmissionStatus::parse(value).map_err(AppError::Core)?),
        };
        Ok(SubmissionFilter {
            status,
            search: self.search,
            limit: self.limit,
            offset: self.offset,
        })
    }
}

/// Request body for `POST /admin/submissions/{id}/transition`.
#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    pub status: String,
    /// Optional applicant-visible message; overwrites `feedback` when set.
    pub message: Option<String>,
}

/// Request body for `POST /admin/submissions/{id}/notes`.
#[derive(Debug, Deserialize)]
pub struct NoteRequest {
    pub note: String,
}

/// Request body for `PATCH /admin/submissions/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateDetailsRequest {
    pub assigned_mentor: Option<String>,
    pub funding_approved: Option<i64>,
}

// ---------------------------------------------------------------------------
// Listing and stats
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/submissions
///
/// The listing contract: status equality, case-insensitive substring search
/// across title/name/id, pagination ordered by creation time descending.
pub async fn list_submissions(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<SubmissionListParams>,
) -> AppResult<Json<DataResponse<Page<SubmissionPayload>>>> {
    let filter = params.into_filter()?;
    let page = SubmissionRepo::list(&state.pool, &filter).await?;

    let items = page
        .items
        .into_iter()
        .map(SubmissionPayload::from_submission)
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Json(DataResponse {
        data: Page {
            items,
            total: page.total,
        },
    }))
}

/// GET /api/v1/admin/submissions/stats
pub async fn submission_stats(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<SubmissionStats>>> {
    let stats = SubmissionRepo::stats(&state.pool).await?;
    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/admin/submissions/{id}/updates
///
/// The submission's audit history, newest first.
pub async fn submission_history(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<RecordId>,
) -> AppResult<Json<DataResponse<Vec<ProjectUpdate>>>> {
    // Distinguish "no such submission" from "no updates yet".
    ensure_exists(&state, id).await?;
    let updates = ProjectUpdateRepo::list_for_project(&state.pool, id).await?;
    Ok(Json(DataResponse { data: updates }))
}

// ---------------------------------------------------------------------------
// Workflow engine
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/submissions/{id}/transition
///
/// Move a submission to a new status, overwriting the applicant-visible
/// feedback when a message is supplied, and append one audit record with
/// the old and new values.
pub async fn transition_submission(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<RecordId>,
    Json(input): Json<TransitionRequest>,
) -> AppResult<Json<DataResponse<SubmissionPayload>>> {
    let new_status = SubmissionStatus::parse(&input.status).map_err(AppError::Core)?;

    let current = ensure_exists(&state, id).await?;
    let current_status = current.status().map_err(AppError::Core)?;

    check_transition(
        current_status,
        new_status,
        state.config.workflow.lock_terminal,
    )
    .map_err(AppError::Core)?;

    let updated = SubmissionRepo::update_status(&state.pool, id, new_status, input.message.as_deref())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Submission", id)))?;

    append_audit(
        &state,
        CreateProjectUpdate {
            project_id: id,
            updated_by: admin.actor_id(),
            update_type: UPDATE_TYPE_STATUS_CHANGE.to_string(),
            old_value: Some(current_status.as_str().to_string()),
            new_value: Some(new_status.as_str().to_string()),
            message: input.message.clone(),
        },
    )
    .await?;

    tracing::info!(
        submission_id = %id,
        old_status = current_status.as_str(),
        new_status = new_status.as_str(),
        actor = %admin.actor_id(),
        "Submission status transition"
    );

    notify_transition(&state, &updated, new_status, input.message);

    let payload = SubmissionPayload::from_submission(updated)?;
    Ok(Json(DataResponse { data: payload }))
}

/// POST /api/v1/admin/submissions/{id}/notes
///
/// Overwrite the internal admin notes and append an audit record of kind
/// `note`. Status untouched.
pub async fn annotate_submission(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<RecordId>,
    Json(input): Json<NoteRequest>,
) -> AppResult<Json<DataResponse<SubmissionPayload>>> {
    if input.note.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Note must not be empty".into(),
        )));
    }

    let updated = SubmissionRepo::update_notes(&state.pool, id, &input.note)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Submission", id)))?;

    append_audit(
        &state,
        CreateProjectUpdate {
            project_id: id,
            updated_by: admin.actor_id(),
            update_type: UPDATE_TYPE_NOTE.to_string(),
            old_value: None,
            new_value: None,
            message: Some(input.note),
        },
    )
    .await?;

    let payload = SubmissionPayload::from_submission(updated)?;
    Ok(Json(DataResponse { data: payload }))
}

/// PATCH /api/v1/admin/submissions/{id}
///
/// Partial update of the admin detail fields (assigned mentor, approved
/// funding). No audit kind of its own.
pub async fn update_submission_details(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<RecordId>,
    Json(input): Json<UpdateDetailsRequest>,
) -> AppResult<Json<DataResponse<SubmissionPayload>>> {
    let details = UpdateSubmissionDetails {
        assigned_mentor: input.assigned_mentor,
        funding_approved: input.funding_approved,
    };

    let updated = SubmissionRepo::update_details(&state.pool, id, &details)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Submission", id)))?;

    let payload = SubmissionPayload::from_submission(updated)?;
    Ok(Json(DataResponse { data: payload }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a submission or fail with 404.
async fn ensure_exists(state: &AppState, id: RecordId) -> AppResult<Submission> {
    SubmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Submission", id)))
}

/// Append an audit record, mapping failure to [`AppError::AuditWriteFailure`].
///
/// Called only after the corresponding status/note write has succeeded, so
/// a failure here means the audit trail is out of step with the data.
async fn append_audit(state: &AppState, entry: CreateProjectUpdate) -> AppResult<()> {
    let submission_id = entry.project_id.to_string();
    ProjectUpdateRepo::create(&state.pool, &entry)
        .await
        .map_err(|source| AppError::AuditWriteFailure {
            submission_id,
            source,
        })?;
    Ok(())
}

/// Send the applicant a status email where the transition warrants one:
/// always for `selected` and `completed`, and for any transition carrying a
/// message.
fn notify_transition(
    state: &AppState,
    submission: &Submission,
    new_status: SubmissionStatus,
    message: Option<String>,
) {
    let kind = match new_status {
        SubmissionStatus::Selected => EmailKind::Selected,
        SubmissionStatus::Completed => EmailKind::Completed,
        _ if message.is_some() => EmailKind::Update,
        _ => return,
    };
    send_email(
        state,
        submission.email.clone(),
        kind,
        submission.name.clone(),
        submission.title.clone(),
        submission.id.to_string(),
        message,
    );
}
