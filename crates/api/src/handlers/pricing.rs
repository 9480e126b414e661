//! Handler for the published price list.

use axum::Json;
use fleetmaint_core::pricing::{
    MaintenanceType, FIELD_SERVICE_CREW_SIZE, HOME_LOCATION, OFFLINE_CREW_SIZE, PER_DIEM_RATE,
    TRANSPORTATION_RATES, VEHICLES_PER_WORK_DAY,
};
use serde::Serialize;

use crate::response::DataResponse;

#[derive(Debug, Serialize)]
pub struct MaintenancePrice {
    pub maintenance_type: MaintenanceType,
    pub label: &'static str,
    pub price: u64,
}

#[derive(Debug, Serialize)]
pub struct TransportationRate {
    pub location: &'static str,
    pub rate: u64,
}

/// Everything the request form needs to explain a quote.
#[derive(Debug, Serialize)]
pub struct PricingTable {
    pub maintenance_prices: Vec<MaintenancePrice>,
    pub per_diem_rate: u64,
    pub vehicles_per_work_day: u64,
    pub offline_crew_size: u64,
    pub field_service_crew_size: u64,
    pub home_location: &'static str,
    pub transportation_rates: Vec<TransportationRate>,
}

/// GET /pricing
pub async fn get_pricing() -> Json<DataResponse<PricingTable>> {
    let maintenance_prices = MaintenanceType::ALL
        .iter()
        .map(|&ty| MaintenancePrice {
            maintenance_type: ty,
            label: ty.label(),
            price: ty.price(),
        })
        .collect();

    let transportation_rates = TRANSPORTATION_RATES
        .iter()
        .map(|&(location, rate)| TransportationRate { location, rate })
        .collect();

    Json(DataResponse {
        data: PricingTable {
            maintenance_prices,
            per_diem_rate: PER_DIEM_RATE,
            vehicles_per_work_day: VEHICLES_PER_WORK_DAY,
            offline_crew_size: OFFLINE_CREW_SIZE,
            field_service_crew_size: FIELD_SERVICE_CREW_SIZE,
            home_location: HOME_LOCATION,
            transportation_rates,
        },
    })
}
