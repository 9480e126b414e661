//! Maintenance cost calculation.
//!
//! Turns a set of vehicle selections into a [`CostBreakdown`]: service fees,
//! crew per-diem over the required work days, and a flat transportation charge
//! per distinct site. The breakdown is always recomputed from the full
//! selection; nothing is cached between calls.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::pricing::{
    transportation_rate, FIELD_SERVICE_CREW_SIZE, OFFLINE_CREW_SIZE, PER_DIEM_RATE,
    VEHICLES_PER_WORK_DAY,
};
use crate::vehicle::VehicleSelection;

// ---------------------------------------------------------------------------
// Breakdown
// ---------------------------------------------------------------------------

/// Cost of a maintenance request, in ETB.
///
/// `total` is always `maintenance_fees + per_diem + transportation`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub maintenance_fees: u64,
    pub per_diem: u64,
    pub transportation: u64,
    pub work_days: u64,
    pub crew_count: u64,
    pub total: u64,
}

impl CostBreakdown {
    /// The breakdown for a request with nothing to service.
    pub const ZERO: CostBreakdown = CostBreakdown {
        maintenance_fees: 0,
        per_diem: 0,
        transportation: 0,
        work_days: 0,
        crew_count: 0,
        total: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Compute the cost breakdown for a collection of vehicle selections.
///
/// Vehicles without any maintenance type are ignored entirely: they add no
/// fees, do not count toward work days or crew sizing, and their location is
/// not charged for transportation.
pub fn calculate_costs<'a, I>(selections: I) -> CostBreakdown
where
    I: IntoIterator<Item = &'a VehicleSelection>,
{
    let serviced: Vec<&VehicleSelection> = selections
        .into_iter()
        .filter(|s| s.has_maintenance())
        .collect();

    if serviced.is_empty() {
        return CostBreakdown::ZERO;
    }

    let maintenance_fees: u64 = serviced.iter().map(|s| s.fees()).sum();
    let work_days = work_days_for(serviced.len() as u64);
    let crew_count = crew_count_for(&serviced);
    let per_diem = crew_count * PER_DIEM_RATE * work_days;

    let locations: IndexSet<&str> = serviced
        .iter()
        .map(|s| s.vehicle.location.as_str())
        .collect();
    let transportation: u64 = locations.iter().map(|l| transportation_rate(l)).sum();

    CostBreakdown {
        maintenance_fees,
        per_diem,
        transportation,
        work_days,
        crew_count,
        total: maintenance_fees + per_diem + transportation,
    }
}

/// Work days needed for `vehicles` serviced vehicles, rounded up.
pub fn work_days_for(vehicles: u64) -> u64 {
    vehicles.div_ceil(VEHICLES_PER_WORK_DAY)
}

/// Crew size for a set of serviced vehicles.
fn crew_count_for(serviced: &[&VehicleSelection]) -> u64 {
    if serviced.iter().all(|s| s.is_offline_only()) {
        OFFLINE_CREW_SIZE
    } else if serviced
        .iter()
        .any(|s| s.maintenance_types.iter().any(|t| t.is_field_service()))
    {
        FIELD_SERVICE_CREW_SIZE
    } else {
        // Only reachable if a non-offline, non-field-service type is added.
        OFFLINE_CREW_SIZE
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
