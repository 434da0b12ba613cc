//! Route definitions for the public `/submissions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Routes mounted at `/submissions`.
///
/// ```text
/// POST /               -> create_submission (public intake)
/// GET  /{id}           -> get_submission (public lookup)
/// GET  /{id}/tracker   -> get_tracker (public progress projection)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(submissions::create_submission))
        .route("/{id}", get(submissions::get_submission))
        .route("/{id}/tracker", get(submissions::get_tracker))
}
