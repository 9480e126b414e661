//! Maintenance pricing constants (ETB).
//!
//! These values are part of the external contract with the request form and
//! stored quotes; changing any of them changes every historical breakdown.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Rates
// ---------------------------------------------------------------------------

/// Per-diem paid per crew member per work day.
pub const PER_DIEM_RATE: u64 = 1600;

/// Number of vehicles one crew can service in a single work day.
pub const VEHICLES_PER_WORK_DAY: u64 = 3;

/// Crew size when only offline maintenance is requested.
pub const OFFLINE_CREW_SIZE: u64 = 1;

/// Crew size when any field-service type (FLS or calibration) is requested.
pub const FIELD_SERVICE_CREW_SIZE: u64 = 2;

/// Location served from the home base; no transportation is charged.
pub const HOME_LOCATION: &str = "Addis Ababa";

/// Flat transportation charge per distinct site location.
///
/// Locations not listed here are charged nothing.
pub const TRANSPORTATION_RATES: &[(&str, u64)] = &[
    (HOME_LOCATION, 0),
    ("Dire Dawa", 2000),
    ("Hawassa", 1500),
    ("Mekelle", 2500),
    ("Bahir Dar", 2000),
    ("Jimma", 1800),
    ("Adama", 800),
    ("Gondar", 2200),
    ("Awash", 1200),
];

/// Transportation charge for a single location, `0` when unlisted.
pub fn transportation_rate(location: &str) -> u64 {
    TRANSPORTATION_RATES
        .iter()
        .find(|(name, _)| *name == location)
        .map(|(_, rate)| *rate)
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Maintenance types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    Offline,
    Fls,
    Calibration,
    FlsCalibration,
}

impl MaintenanceType {
    pub const ALL: [MaintenanceType; 4] = [
        Self::Offline,
        Self::Fls,
        Self::Calibration,
        Self::FlsCalibration,
    ];

    /// Flat fee charged per vehicle for this service.
    pub fn price(self) -> u64 {
        match self {
            Self::Offline => 600,
            Self::Fls => 800,
            Self::Calibration => 1200,
            Self::FlsCalibration => 1400,
        }
    }

    /// Field services need an electrician on site in addition to the IT
    /// specialist, so they raise the crew to two.
    pub fn is_field_service(self) -> bool {
        !matches!(self, Self::Offline)
    }

    /// Wire name, as stored and sent by the form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Fls => "fls",
            Self::Calibration => "calibration",
            Self::FlsCalibration => "fls_calibration",
        }
    }

    /// Human-readable label for display in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Offline => "Offline Maintenance",
            Self::Fls => "FLS",
            Self::Calibration => "Calibration",
            Self::FlsCalibration => "FLS + Calibration",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
