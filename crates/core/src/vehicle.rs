//! Vehicles and the per-request vehicle selection set.
//!
//! A [`SelectionSet`] is the complete input to the cost calculator: every
//! vehicle on a request together with the maintenance types chosen for it,
//! keyed by vehicle id and iterated in the order vehicles were added.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::cost::{calculate_costs, CostBreakdown};
use crate::error::CoreError;
use crate::pricing::MaintenanceType;
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Vehicle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: EntityId,
    pub plate_number: String,
    pub location: String,
}

impl Vehicle {
    /// Build a vehicle from form input.
    ///
    /// The plate is trimmed and upper-cased and the location trimmed. Blank
    /// plates or locations are rejected.
    pub fn new(
        id: impl Into<EntityId>,
        plate_number: &str,
        location: &str,
    ) -> Result<Self, CoreError> {
        let plate_number = normalize_plate(plate_number);
        if plate_number.is_empty() {
            return Err(CoreError::Validation("Plate number is required".into()));
        }
        let location = location.trim();
        if location.is_empty() {
            return Err(CoreError::Validation("Location is required".into()));
        }
        Ok(Self {
            id: id.into(),
            plate_number,
            location: location.to_string(),
        })
    }
}

/// Canonical plate form: surrounding whitespace removed, upper-case.
pub fn normalize_plate(plate: &str) -> String {
    plate.trim().to_uppercase()
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// One vehicle and the maintenance types chosen for it.
///
/// The type set keeps the order in which types were ticked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSelection {
    pub vehicle: Vehicle,
    pub maintenance_types: IndexSet<MaintenanceType>,
}

impl VehicleSelection {
    pub fn new(vehicle: Vehicle) -> Self {
        Self {
            vehicle,
            maintenance_types: IndexSet::new(),
        }
    }

    pub fn with_types(vehicle: Vehicle, types: impl IntoIterator<Item = MaintenanceType>) -> Self {
        Self {
            vehicle,
            maintenance_types: types.into_iter().collect(),
        }
    }

    /// Whether any maintenance type is chosen for this vehicle.
    pub fn has_maintenance(&self) -> bool {
        !self.maintenance_types.is_empty()
    }

    /// Whether every chosen type is offline. `false` when nothing is chosen.
    pub fn is_offline_only(&self) -> bool {
        self.has_maintenance()
            && self
                .maintenance_types
                .iter()
                .all(|t| *t == MaintenanceType::Offline)
    }

    /// Sum of the fees for every chosen type.
    pub fn fees(&self) -> u64 {
        self.maintenance_types.iter().map(|t| t.price()).sum()
    }
}

// ---------------------------------------------------------------------------
// Selection set
// ---------------------------------------------------------------------------

/// Ordered collection of vehicle selections, unique by vehicle id and by
/// plate number.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    entries: IndexMap<EntityId, VehicleSelection>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vehicle with no maintenance types selected.
    ///
    /// Returns `Ok(false)` if a vehicle with the same id is already present
    /// (the existing entry is left untouched). A different vehicle carrying an
    /// already-used plate number is a [`CoreError::Conflict`].
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<bool, CoreError> {
        if self.entries.contains_key(&vehicle.id) {
            return Ok(false);
        }
        if self.contains_plate(&vehicle.plate_number) {
            return Err(CoreError::Conflict(format!(
                "Plate number '{}' is already added",
                vehicle.plate_number
            )));
        }
        self.entries
            .insert(vehicle.id.clone(), VehicleSelection::new(vehicle));
        Ok(true)
    }

    /// Remove a vehicle, keeping the relative order of the rest.
    pub fn remove_vehicle(&mut self, vehicle_id: &str) -> Option<VehicleSelection> {
        self.entries.shift_remove(vehicle_id)
    }

    /// Replace the maintenance types chosen for a vehicle.
    pub fn set_maintenance_types(
        &mut self,
        vehicle_id: &str,
        types: impl IntoIterator<Item = MaintenanceType>,
    ) -> Result<(), CoreError> {
        let selection = self.get_mut(vehicle_id)?;
        selection.maintenance_types = types.into_iter().collect();
        Ok(())
    }

    /// Tick or untick a single maintenance type for a vehicle.
    pub fn toggle_maintenance_type(
        &mut self,
        vehicle_id: &str,
        maintenance_type: MaintenanceType,
        checked: bool,
    ) -> Result<(), CoreError> {
        let selection = self.get_mut(vehicle_id)?;
        if checked {
            selection.maintenance_types.insert(maintenance_type);
        } else {
            selection.maintenance_types.shift_remove(&maintenance_type);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, vehicle_id: &str) -> Option<&VehicleSelection> {
        self.entries.get(vehicle_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selections in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &VehicleSelection> {
        self.entries.values()
    }

    /// Whether any vehicle in the set has a maintenance type chosen.
    pub fn has_any_maintenance(&self) -> bool {
        self.iter().any(VehicleSelection::has_maintenance)
    }

    /// Compute the cost breakdown for the current selection.
    pub fn calculate_costs(&self) -> CostBreakdown {
        calculate_costs(self.iter())
    }

    fn contains_plate(&self, plate: &str) -> bool {
        let plate = plate.to_lowercase();
        self.iter()
            .any(|s| s.vehicle.plate_number.to_lowercase() == plate)
    }

    fn get_mut(&mut self, vehicle_id: &str) -> Result<&mut VehicleSelection, CoreError> {
        self.entries
            .get_mut(vehicle_id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Vehicle",
                id: vehicle_id.to_string(),
            })
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a VehicleSelection;
    type IntoIter = indexmap::map::Values<'a, EntityId, VehicleSelection>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
