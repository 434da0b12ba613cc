//! Project update (audit trail) entity model and DTOs.
//!
//! Audit records are append-only: the repository layer exposes no UPDATE or
//! DELETE path, and the row has no `updated_at`.

use sdgclub_core::types::{DbId, RecordId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A status transition performed by an admin.
pub const UPDATE_TYPE_STATUS_CHANGE: &str = "status_change";

/// Applicant-visible feedback written without a status change.
pub const UPDATE_TYPE_FEEDBACK: &str = "feedback";

/// An internal admin note.
pub const UPDATE_TYPE_NOTE: &str = "note";

/// Retained in the vocabulary for legacy rows; attachments are no longer
/// part of the data model, so nothing writes this kind.
pub const UPDATE_TYPE_FILE_UPLOAD: &str = "file_upload";

/// All valid update kinds.
pub const VALID_UPDATE_TYPES: &[&str] = &[
    UPDATE_TYPE_STATUS_CHANGE,
    UPDATE_TYPE_FEEDBACK,
    UPDATE_TYPE_NOTE,
    UPDATE_TYPE_FILE_UPLOAD,
];

/// A single audit trail entry from the `project_updates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectUpdate {
    pub id: DbId,
    pub project_id: RecordId,
    pub created_at: Timestamp,
    /// Actor identifier from the session guard (admin user id as text).
    pub updated_by: String,
    pub update_type: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub message: Option<String>,
}

/// DTO for appending a new audit trail entry.
#[derive(Debug, Clone)]
pub struct CreateProjectUpdate {
    pub project_id: RecordId,
    pub updated_by: String,
    pub update_type: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub message: Option<String>,
}
