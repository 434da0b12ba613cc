//! Project submission entity model and DTOs.

use sdgclub_core::intake::TeamMember;
use sdgclub_core::status::SubmissionStatus;
use sdgclub_core::types::{RecordId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// Full submission row from the `project_submissions` table.
///
/// `stage` is intentionally absent: it is derived from `status` at the API
/// boundary, never stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub id: RecordId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,

    // Applicant.
    pub name: String,
    pub email: String,
    pub phone: String,
    pub registration_number: String,
    pub branch: String,
    pub year: String,

    // Project.
    pub title: String,
    pub description: String,
    pub primary_sdg: String,
    pub secondary_sdgs: Vec<String>,
    pub sdg_track: Option<String>,
    pub timeline: String,
    pub expected_impact: String,
    pub team_members: Json<Vec<TeamMember>>,

    // Workflow.
    pub status: String,
    pub admin_notes: String,
    pub feedback: String,
    pub assigned_mentor: Option<String>,
    pub funding_approved: Option<i64>,

    // Metadata.
    pub user_agent: Option<String>,
}

impl Submission {
    /// Parse the stored status string into the domain enum.
    ///
    /// The column is CHECK-constrained to the six valid values, so a parse
    /// failure here means the database and code disagree on the vocabulary.
    pub fn status(&self) -> Result<SubmissionStatus, sdgclub_core::CoreError> {
        SubmissionStatus::parse(&self.status)
    }
}

/// DTO for inserting a validated submission.
///
/// Workflow fields are not part of the DTO: every new submission starts at
/// status `received` with empty notes and feedback.
#[derive(Debug, Clone)]
pub struct CreateSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub registration_number: String,
    pub branch: String,
    pub year: String,
    pub title: String,
    pub description: String,
    pub primary_sdg: String,
    pub secondary_sdgs: Vec<String>,
    pub sdg_track: Option<String>,
    pub timeline: String,
    pub expected_impact: String,
    pub team_members: Vec<TeamMember>,
    pub user_agent: Option<String>,
}

/// DTO for the admin detail update (PATCH). Only non-`None` fields apply.
#[derive(Debug, Clone, Default)]
pub struct UpdateSubmissionDetails {
    pub assigned_mentor: Option<String>,
    pub funding_approved: Option<i64>,
}

/// Typed filter for the submission listing contract.
///
/// `status` is already parsed; the API layer maps the literal `"all"` (or an
/// absent parameter) to `None` and rejects anything that is not one of the
/// six enum values.
#[derive(Debug, Clone, Default)]
pub struct SubmissionFilter {
    pub status: Option<SubmissionStatus>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Dashboard aggregates over all submissions.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionStats {
    pub total: i64,
    pub received: i64,
    pub under_review: i64,
    pub selected: i64,
    pub in_progress: i64,
    pub completed: i64,
    pub rejected: i64,
    /// Rows created in the current calendar month.
    pub this_month: i64,
}
