//! Route definitions for milestone access checks.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::milestones;

/// Milestone routes mounted at `/milestones`.
///
/// ```text
/// POST /visible                        -> filter_visible
/// POST /access                         -> check_access
/// GET  /can-create/{milestone_type}    -> can_create
/// ```
pub fn router() -> Router {
    Router::new()
        .route("/visible", post(milestones::filter_visible))
        .route("/access", post(milestones::check_access))
        .route("/can-create/{milestone_type}", get(milestones::can_create))
}
