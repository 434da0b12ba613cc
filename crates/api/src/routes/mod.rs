pub mod admin;
pub mod auth;
pub mod health;
pub mod mentors;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                           login (public)
/// /auth/refresh                         refresh (public)
/// /auth/logout                          logout (requires auth)
///
/// /submissions                          project pitch intake (public, POST)
/// /submissions/{id}                     lookup by tracking id (public, GET)
/// /submissions/{id}/tracker             progress tracker projection (public, GET)
///
/// /mentors                              mentor application intake (public, POST)
///
/// /admin/submissions                    list with filters + pagination
/// /admin/submissions/stats              dashboard counts
/// /admin/submissions/{id}/updates       audit history
/// /admin/submissions/{id}/transition    status transition (POST)
/// /admin/submissions/{id}/notes         internal notes (POST)
/// /admin/submissions/{id}               details update (PATCH)
/// /admin/mentors                        list mentor applications
/// /admin/mentors/{id}                   get, update (GET, PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout).
        .nest("/auth", auth::router())
        // Public submission intake, lookup, and tracker.
        .nest("/submissions", submissions::router())
        // Public mentor application intake.
        .nest("/mentors", mentors::router())
        // Admin dashboard (submissions workflow + mentor review).
        .nest("/admin", admin::router())
}
