//! Route definitions for timeline templates.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::templates;

/// Template routes mounted at `/templates`.
///
/// ```text
/// GET  /                   -> list_templates
/// GET  /{id}               -> get_template
/// POST /{id}/instantiate   -> instantiate_template
/// ```
pub fn router() -> Router {
    Router::new()
        .route("/", get(templates::list_templates))
        .route("/{id}", get(templates::get_template))
        .route("/{id}/instantiate", post(templates::instantiate_template))
}
