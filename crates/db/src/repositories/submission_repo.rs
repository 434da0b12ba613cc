//! Repository for the `project_submissions` table.

use sdgclub_core::paging::{clamp_limit, clamp_offset};
use sdgclub_core::status::SubmissionStatus;
use sdgclub_core::types::RecordId;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::submission::{
    CreateSubmission, Submission, SubmissionFilter, SubmissionStats, UpdateSubmissionDetails,
};
use crate::models::Page;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, created_at, updated_at, name, email, phone, registration_number, \
    branch, year, title, description, primary_sdg, secondary_sdgs, sdg_track, \
    timeline, expected_impact, team_members, status, admin_notes, feedback, \
    assigned_mentor, funding_approved, user_agent";

/// Provides CRUD and workflow operations for project submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a new submission with status `received`, returning the created
    /// row.
    ///
    /// IDs are UUID v7, generated here, so creation order is reflected in
    /// the key and the listing tie-break on `id` preserves insertion order.
    pub async fn create(pool: &PgPool, input: &CreateSubmission) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_submissions (
                id, name, email, phone, registration_number, branch, year,
                title, description, primary_sdg, secondary_sdgs, sdg_track,
                timeline, expected_impact, team_members, user_agent
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(Uuid::now_v7())
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.registration_number)
            .bind(&input.branch)
            .bind(&input.year)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.primary_sdg)
            .bind(&input.secondary_sdgs)
            .bind(&input.sdg_track)
            .bind(&input.timeline)
            .bind(&input.expected_impact)
            .bind(Json(&input.team_members))
            .bind(&input.user_agent)
            .fetch_one(pool)
            .await
    }

    /// Find a submission by its public ID.
    pub async fn find_by_id(pool: &PgPool, id: RecordId) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_submissions WHERE id = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List submissions matching the filter, most recent first.
    ///
    /// The page query and the count query share one WHERE builder so the
    /// returned `total` always reflects the same predicate as the page.
    pub async fn list(
        pool: &PgPool,
        filter: &SubmissionFilter,
    ) -> Result<Page<Submission>, sqlx::Error> {
        let limit = clamp_limit(filter.limit);
        let offset = clamp_offset(filter.offset);

        let (where_clause, binds, next_idx) = build_submission_filter(filter);

        let query = format!(
            "SELECT {COLUMNS} FROM project_submissions {where_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ${next_idx} OFFSET ${}",
            next_idx + 1
        );
        let items = bind_text_values(sqlx::query_as::<_, Submission>(&query), &binds)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        let count_query =
            format!("SELECT COUNT(*)::BIGINT FROM project_submissions {where_clause}");
        let total = bind_text_values_scalar(sqlx::query_scalar::<_, i64>(&count_query), &binds)
            .fetch_one(pool)
            .await?;

        Ok(Page { items, total })
    }

    /// Set a submission's status, overwriting the applicant-visible
    /// `feedback` when a message is supplied.
    ///
    /// Returns `None` if no row with the given `id` exists. Appending the
    /// matching audit record is the caller's responsibility.
    pub async fn update_status(
        pool: &PgPool,
        id: RecordId,
        status: SubmissionStatus,
        feedback: Option<&str>,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "UPDATE project_submissions SET
                status = $2,
                feedback = COALESCE($3, feedback),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(feedback)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a submission's internal admin notes.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_notes(
        pool: &PgPool,
        id: RecordId,
        notes: &str,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "UPDATE project_submissions SET admin_notes = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .bind(notes)
            .fetch_optional(pool)
            .await
    }

    /// Partial update of the admin detail fields. Only non-`None` fields in
    /// `input` are applied.
    pub async fn update_details(
        pool: &PgPool,
        id: RecordId,
        input: &UpdateSubmissionDetails,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "UPDATE project_submissions SET
                assigned_mentor = COALESCE($2, assigned_mentor),
                funding_approved = COALESCE($3, funding_approved),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .bind(&input.assigned_mentor)
            .bind(input.funding_approved)
            .fetch_optional(pool)
            .await
    }

    /// Dashboard aggregates: per-status counts, grand total, and rows
    /// created in the current calendar month.
    pub async fn stats(pool: &PgPool) -> Result<SubmissionStats, sqlx::Error> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT status, COUNT(*)::BIGINT FROM project_submissions GROUP BY status",
        )
        .fetch_all(pool)
        .await?;

        let this_month: i64 = sqlx::query_scalar(
            "SELECT COUNT(*)::BIGINT FROM project_submissions
             WHERE created_at >= date_trunc('month', NOW())",
        )
        .fetch_one(pool)
        .await?;

        let mut stats = SubmissionStats {
            total: 0,
            received: 0,
            under_review: 0,
            selected: 0,
            in_progress: 0,
            completed: 0,
            rejected: 0,
            this_month,
        };
        for (status, count) in rows {
            stats.total += count;
            match status.as_str() {
                "received" => stats.received = count,
                "under-review" => stats.under_review = count,
                "selected" => stats.selected = count,
                "in-progress" => stats.in_progress = count,
                "completed" => stats.completed = count,
                "rejected" => stats.rejected = count,
                // Unreachable while the CHECK constraint holds.
                _ => {}
            }
        }
        Ok(stats)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Build a WHERE clause and bind values from submission filter parameters.
///
/// Returns `(where_clause, bind_values, next_bind_index)`. The clause is
/// empty when no predicate is active, or starts with `WHERE `. All bind
/// values are text, so a plain `Vec<String>` carries them.
fn build_submission_filter(filter: &SubmissionFilter) -> (String, Vec<String>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut binds: Vec<String> = Vec::new();

    if let Some(status) = filter.status {
        conditions.push(format!("status = ${bind_idx}"));
        bind_idx += 1;
        binds.push(status.as_str().to_string());
    }

    if let Some(search) = filter.search.as_deref() {
        let search = search.trim();
        if !search.is_empty() {
            conditions.push(format!(
                "(title ILIKE ${bind_idx} OR name ILIKE ${bind_idx} OR id::text ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
            binds.push(format!("%{search}%"));
        }
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, binds, bind_idx)
}

/// Bind a slice of text values to a sqlx `QueryAs`.
pub(crate) fn bind_text_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    binds: &'q [String],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in binds {
        q = q.bind(val.as_str());
    }
    q
}

/// Bind a slice of text values to a sqlx `QueryScalar`.
pub(crate) fn bind_text_values_scalar<'q>(
    mut q: sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments>,
    binds: &'q [String],
) -> sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments> {
    for val in binds {
        q = q.bind(val.as_str());
    }
    q
}
