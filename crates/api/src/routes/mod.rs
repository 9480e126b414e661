pub mod costs;
pub mod health;
pub mod milestones;
pub mod permissions;
pub mod templates;

use axum::routing::get;
use axum::Router;

use crate::handlers;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pricing                                         price list
///
/// /costs/calculate                                 live cost breakdown (POST)
/// /requests/quote                                  validate + quote a request (POST)
///
/// /permissions                                     calling actor's permissions
/// /permissions/{role}                              permissions of a role name
///
/// /milestones/visible                              filter for the actor (POST)
/// /milestones/access                               update/delete checks (POST)
/// /milestones/can-create/{milestone_type}          create check
///
/// /templates                                       list (?category=)
/// /templates/{id}                                  get
/// /templates/{id}/instantiate                      build milestones (POST)
/// ```
pub fn api_routes() -> Router {
    Router::new()
        .route("/pricing", get(handlers::pricing::get_pricing))
        // Cost calculation and request quotes.
        .merge(costs::router())
        // Role permission matrix.
        .nest("/permissions", permissions::router())
        // Milestone access predicates.
        .nest("/milestones", milestones::router())
        // Built-in timeline templates.
        .nest("/templates", templates::router())
}
