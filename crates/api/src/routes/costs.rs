//! Route definitions for cost calculation.

use axum::routing::post;
use axum::Router;

use crate::handlers::costs;

/// Cost routes, merged at the API root.
///
/// ```text
/// POST /costs/calculate   -> calculate_costs
/// POST /requests/quote    -> quote_request
/// ```
pub fn router() -> Router {
    Router::new()
        .route("/costs/calculate", post(costs::calculate_costs))
        .route("/requests/quote", post(costs::quote_request))
}
