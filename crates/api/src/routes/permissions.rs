use axum::routing::get;
use axum::Router;

use crate::handlers::permissions;

/// Permission routes mounted at `/permissions`.
///
/// ```text
/// GET /         -> get_actor_permissions
/// GET /{role}   -> get_role_permissions
/// ```
pub fn router() -> Router {
    Router::new()
        .route("/", get(permissions::get_actor_permissions))
        .route("/{role}", get(permissions::get_role_permissions))
}
