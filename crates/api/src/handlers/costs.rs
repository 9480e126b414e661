//! Handlers for cost calculation and request quotes.
//!
//! Both endpoints are stateless: the breakdown is recomputed from the
//! submitted vehicles on every call.

use axum::response::IntoResponse;
use axum::Json;
use fleetmaint_core::request::{build_selection_set, NewMaintenanceRequest, VehicleSelectionInput};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;

/// Body of `POST /costs/calculate`.
#[derive(Debug, Deserialize, Validate)]
pub struct CalculateCostsRequest {
    #[validate(nested)]
    #[serde(default)]
    pub vehicles: Vec<VehicleSelectionInput>,
}

// ---------------------------------------------------------------------------
// POST /costs/calculate
// ---------------------------------------------------------------------------

/// Compute the live breakdown for the vehicles currently on the form.
///
/// Unlike a quote, an empty or unselected form is fine here and yields the
/// zero breakdown.
pub async fn calculate_costs(
    Json(body): Json<CalculateCostsRequest>,
) -> AppResult<impl IntoResponse> {
    body.validate()?;

    let selections = build_selection_set(&body.vehicles)?;
    let breakdown = selections.calculate_costs();

    tracing::debug!(
        vehicles = selections.len(),
        total = breakdown.total,
        "Calculated maintenance costs"
    );

    Ok(Json(DataResponse { data: breakdown }))
}

// ---------------------------------------------------------------------------
// POST /requests/quote
// ---------------------------------------------------------------------------

/// Validate a full maintenance request and return its breakdown.
pub async fn quote_request(
    Json(body): Json<NewMaintenanceRequest>,
) -> AppResult<impl IntoResponse> {
    let breakdown = body.quote()?;

    tracing::info!(
        owner = %body.owner_name,
        vehicles = body.vehicles.len(),
        total = breakdown.total,
        "Quoted maintenance request"
    );

    Ok(Json(DataResponse { data: breakdown }))
}
