//! Pagination helpers shared by all list queries.

/// Default page size when the caller does not specify a limit.
pub const DEFAULT_LIMIT: i64 = 50;

/// Upper bound on page size.
pub const MAX_LIMIT: i64 = 500;

/// Clamp a user-provided limit to `[1, MAX_LIMIT]`, defaulting to
/// [`DEFAULT_LIMIT`] when absent.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).max(1).min(MAX_LIMIT)
}

/// Clamp a user-provided offset to non-negative, defaulting to 0.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
