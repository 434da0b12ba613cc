//! Repository for the `mentor_applications` table.

use sdgclub_core::paging::{clamp_limit, clamp_offset};
use sdgclub_core::types::RecordId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::mentor::{
    CreateMentorApplication, MentorApplication, MentorFilter, UpdateMentorApplication,
};
use crate::models::Page;
use crate::repositories::submission_repo::{bind_text_values, bind_text_values_scalar};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, created_at, updated_at, name, email, year, branch, phone, expertise, \
    previous_experience, availability_per_week, status, admin_notes, processed_by";

/// Provides CRUD operations for mentor applications.
pub struct MentorRepo;

impl MentorRepo {
    /// Insert a new mentor application with the default status `received`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMentorApplication,
    ) -> Result<MentorApplication, sqlx::Error> {
        let query = format!(
            "INSERT INTO mentor_applications (
                id, name, email, year, branch, phone, expertise,
                previous_experience, availability_per_week
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MentorApplication>(&query)
            .bind(Uuid::now_v7())
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.year)
            .bind(&input.branch)
            .bind(&input.phone)
            .bind(&input.expertise)
            .bind(&input.previous_experience)
            .bind(&input.availability_per_week)
            .fetch_one(pool)
            .await
    }

    /// Find a mentor application by its public ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: RecordId,
    ) -> Result<Option<MentorApplication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mentor_applications WHERE id = $1");
        sqlx::query_as::<_, MentorApplication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List mentor applications matching the filter, most recent first.
    pub async fn list(
        pool: &PgPool,
        filter: &MentorFilter,
    ) -> Result<Page<MentorApplication>, sqlx::Error> {
        let limit = clamp_limit(filter.limit);
        let offset = clamp_offset(filter.offset);

        let (where_clause, binds, next_idx) = build_mentor_filter(filter);

        let query = format!(
            "SELECT {COLUMNS} FROM mentor_applications {where_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ${next_idx} OFFSET ${}",
            next_idx + 1
        );
        let items = bind_text_values(sqlx::query_as::<_, MentorApplication>(&query), &binds)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        let count_query = format!("SELECT COUNT(*)::BIGINT FROM mentor_applications {where_clause}");
        let total = bind_text_values_scalar(sqlx::query_scalar::<_, i64>(&count_query), &binds)
            .fetch_one(pool)
            .await?;

        Ok(Page { items, total })
    }

    /// Partial update of the admin-facing fields. Only non-`None` fields in
    /// `input` are applied. Returns `None` if no row exists.
    pub async fn update(
        pool: &PgPool,
        id: RecordId,
        input: &UpdateMentorApplication,
    ) -> Result<Option<MentorApplication>, sqlx::Error> {
        let query = format!(
            "UPDATE mentor_applications SET
                status = COALESCE($2, status),
                admin_notes = COALESCE($3, admin_notes),
                processed_by = COALESCE($4, processed_by),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MentorApplication>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(&input.admin_notes)
            .bind(&input.processed_by)
            .fetch_optional(pool)
            .await
    }
}

/// Build a WHERE clause and bind values from mentor filter parameters.
///
/// Same contract as the submission filter builder; `status` matches
/// literally because mentor statuses are not an enumerated set.
fn build_mentor_filter(filter: &MentorFilter) -> (String, Vec<String>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut binds: Vec<String> = Vec::new();

    if let Some(status) = filter.status.as_deref() {
        if status != "all" {
            conditions.push(format!("status = ${bind_idx}"));
            bind_idx += 1;
            binds.push(status.to_string());
        }
    }

    if let Some(search) = filter.search.as_deref() {
        let search = search.trim();
        if !search.is_empty() {
            conditions.push(format!(
                "(name ILIKE ${bind_idx} OR email ILIKE ${bind_idx})"
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
