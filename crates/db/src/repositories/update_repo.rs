//! Repository for the `project_updates` audit trail.
//!
//! Append-only: inserts and reads, nothing else.

use sdgclub_core::types::RecordId;
use sqlx::PgPool;

use crate::models::update::{CreateProjectUpdate, ProjectUpdate};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, created_at, updated_by, update_type, old_value, new_value, message";

/// Provides append and read operations for the audit trail.
pub struct ProjectUpdateRepo;

impl ProjectUpdateRepo {
    /// Append one audit trail entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectUpdate,
    ) -> Result<ProjectUpdate, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_updates (project_id, updated_by, update_type, old_value, new_value, message)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectUpdate>(&query)
            .bind(input.project_id)
            .bind(&input.updated_by)
            .bind(&input.update_type)
            .bind(&input.old_value)
            .bind(&input.new_value)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List all audit entries for one submission, newest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: RecordId,
    ) -> Result<Vec<ProjectUpdate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_updates
             WHERE project_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ProjectUpdate>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Count audit entries for one submission.
    pub async fn count_for_project(
        pool: &PgPool,
        project_id: RecordId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM project_updates WHERE project_id = $1",
        )
        .bind(project_id)
        .fetch_one(pool)
        .await
    }
}
