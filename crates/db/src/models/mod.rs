//! Entity models and DTOs.

pub mod admin_user;
pub mod mentor;
pub mod session;
pub mod submission;
pub mod update;

use serde::Serialize;

/// Paginated listing result: one page of items plus the total count of rows
/// matching the filter (not the page). Callers compute page count as
/// `ceil(total / limit)`.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}
