//! Route definitions for the `/admin` dashboard (admin auth required on
//! every endpoint, enforced per-handler via the `RequireAdmin` extractor).

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{admin, mentors};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET   /submissions                    -> list_submissions (filter + paginate)
/// GET   /submissions/stats              -> submission_stats
/// GET   /submissions/{id}/updates       -> submission_history (audit trail)
/// POST  /submissions/{id}/transition    -> transition_submission
/// POST  /submissions/{id}/notes         -> annotate_submission
/// PATCH /submissions/{id}               -> update_submission_details
///
/// GET   /mentors                        -> list_mentors
/// GET   /mentors/{id}                   -> get_mentor
/// PATCH /mentors/{id}                   -> update_mentor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submissions", get(admin::list_submissions))
        .route("/submissions/stats", get(admin::submission_stats))
        .route("/submissions/{id}/updates", get(admin::submission_history))
        .route(
            "/submissions/{id}/transition",
            post(admin::transition_submission),
        )
        .route("/submissions/{id}/notes", post(admin::annotate_submission))
        .route("/submissions/{id}", patch(admin::update_submission_details))
        .route("/mentors", get(mentors::list_mentors))
        .route("/mentors/{id}", get(mentors::get_mentor))
        .route("/mentors/{id}", patch(mentors::update_mentor))
}
