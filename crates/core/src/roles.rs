//! Admin role names.
//!
//! Only `admin` gates dashboard access; `reviewer` and `mentor` exist on
//! admin rows for display and audit attribution.

/// Full dashboard access, including status transitions.
pub const ROLE_ADMIN: &str = "admin";

/// Evaluates submissions; no elevated access of its own.
pub const ROLE_REVIEWER: &str = "reviewer";

/// Mentors selected projects; no elevated access of its own.
pub const ROLE_MENTOR: &str = "mentor";
