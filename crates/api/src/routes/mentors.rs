//! Route definitions for the public `/mentors` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::mentors;
use crate::state::AppState;

/// Routes mounted at `/mentors`.
///
/// ```text
/// POST /  -> create_mentor (public application intake)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(mentors::create_mentor))
}
