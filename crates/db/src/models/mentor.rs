//! Mentor application entity model and DTOs.
//!
//! Unlike submissions, mentor applications have no enumerated status set:
//! `status` is a loose string defaulting to `received`, pending product
//! clarification of the mentor workflow.

use sdgclub_core::types::{RecordId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full mentor application row from the `mentor_applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MentorApplication {
    pub id: RecordId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,

    pub name: String,
    pub email: String,
    pub year: String,
    pub branch: String,
    pub phone: Option<String>,
    pub expertise: Vec<String>,
    pub previous_experience: Option<String>,
    pub availability_per_week: Option<String>,

    pub status: String,
    pub admin_notes: Option<String>,
    pub processed_by: Option<String>,
}

/// DTO for inserting a validated mentor application.
#[derive(Debug, Clone)]
pub struct CreateMentorApplication {
    pub name: String,
    pub email: String,
    pub year: String,
    pub branch: String,
    pub phone: Option<String>,
    pub expertise: Vec<String>,
    pub previous_experience: Option<String>,
    pub availability_per_week: Option<String>,
}

/// DTO for the admin mentor update (PATCH). Only non-`None` fields apply.
#[derive(Debug, Clone, Default)]
pub struct UpdateMentorApplication {
    pub status: Option<String>,
    pub admin_notes: Option<String>,
    pub processed_by: Option<String>,
}

/// Typed filter for the mentor application listing contract.
///
/// `status` matches literally (any non-`"all"` string), in line with the
/// loosely-typed mentor status field.
#[derive(Debug, Clone, Default)]
pub struct MentorFilter {
    pub status: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
