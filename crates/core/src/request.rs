//! Maintenance request intake: form validation, priority and category.
//!
//! A submitted request is validated field-by-field with `validator`, then its
//! vehicles are folded into a [`SelectionSet`] so the same duplicate-plate and
//! cost rules apply as in the interactive form.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::cost::CostBreakdown;
use crate::error::CoreError;
use crate::pricing::MaintenanceType;
use crate::vehicle::{SelectionSet, Vehicle};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of the owner and company names.
pub const MAX_NAME_LENGTH: u64 = 200;

/// Ethiopian mobile numbers: optional `+251` or `0` prefix, then `7` or `9`
/// and eight more digits.
pub const CONTACT_NUMBER_PATTERN: &str = r"^(\+251|0)?[79]\d{8}$";

static CONTACT_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CONTACT_NUMBER_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Classification enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestCategory {
    #[default]
    General,
    Emergency,
    Preventive,
    Repair,
}

// ---------------------------------------------------------------------------
// Intake payload
// ---------------------------------------------------------------------------

/// One vehicle row on the request form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VehicleSelectionInput {
    /// Client-side id; generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    #[validate(custom(function = "validate_not_blank"))]
    pub plate_number: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub location: String,
    #[serde(default)]
    pub maintenance_types: Vec<MaintenanceType>,
}

/// A maintenance request as submitted by an owner or supervisor.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMaintenanceRequest {
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = MAX_NAME_LENGTH)
    )]
    pub owner_name: String,
    #[validate(custom(function = "validate_contact_number"))]
    pub contact_number: String,
    #[validate(length(max = MAX_NAME_LENGTH))]
    #[serde(default)]
    pub company_name: Option<String>,
    #[validate(nested)]
    #[serde(default)]
    pub vehicles: Vec<VehicleSelectionInput>,
    #[serde(default)]
    pub priority: RequestPriority,
    #[serde(default)]
    pub category: RequestCategory,
}

impl NewMaintenanceRequest {
    /// Validate the request and build its selection set.
    ///
    /// Beyond per-field checks, a request needs at least one vehicle and at
    /// least one maintenance type somewhere among its vehicles.
    pub fn to_selection_set(&self) -> Result<SelectionSet, CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        if self.vehicles.is_empty() {
            return Err(CoreError::Validation(
                "At least one vehicle must be selected".into(),
            ));
        }

        let set = build_selection_set(&self.vehicles)?;

        if !set.has_any_maintenance() {
            return Err(CoreError::Validation(
                "At least one maintenance type must be selected".into(),
            ));
        }

        Ok(set)
    }

    /// Validate the request and compute its cost breakdown.
    pub fn quote(&self) -> Result<CostBreakdown, CoreError> {
        Ok(self.to_selection_set()?.calculate_costs())
    }
}

/// Fold form rows into a selection set, in row order.
///
/// Rows without an id get a generated one. Repeated ids and repeated plates
/// are both [`CoreError::Conflict`]. An empty slice yields an empty set.
pub fn build_selection_set(inputs: &[VehicleSelectionInput]) -> Result<SelectionSet, CoreError> {
    let mut set = SelectionSet::new();
    for input in inputs {
        let id = input
            .id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let vehicle = Vehicle::new(id, &input.plate_number, &input.location)?;
        let vehicle_id = vehicle.id.clone();
        if !set.add_vehicle(vehicle)? {
            return Err(CoreError::Conflict(format!(
                "Vehicle id '{vehicle_id}' appears more than once"
            )));
        }
        set.set_maintenance_types(&vehicle_id, input.maintenance_types.iter().copied())?;
    }
    Ok(set)
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Check a contact number against [`CONTACT_NUMBER_PATTERN`], ignoring
/// whitespace.
pub fn validate_contact_number(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(
            ValidationError::new("required").with_message("Contact number is required".into()),
        );
    }
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if !CONTACT_NUMBER_RE.is_match(&compact) {
        return Err(ValidationError::new("contact_number")
            .with_message("Please enter a valid Ethiopian phone number".into()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn vehicle_input(plate: &str, location: &str, types: &[MaintenanceType]) -> VehicleSelectionInput {
        VehicleSelectionInput {
            id: None,
            plate_number: plate.into(),
            location: location.into(),
            maintenance_types: types.to_vec(),
        }
    }

    fn request(vehicles: Vec<VehicleSelectionInput>) -> NewMaintenanceRequest {
        NewMaintenanceRequest {
            owner_name: "Abebe Kebede".into(),
            contact_number: "0911 234 567".into(),
            company_name: None,
            vehicles,
            priority: RequestPriority::default(),
            category: RequestCategory::default(),
        }
    }

    // -- contact number --

    #[test]
    fn accepts_ethiopian_mobile_formats() {
        for number in ["0911234567", "+251911234567", "911234567", "0711 234 567"] {
            assert!(validate_contact_number(number).is_ok(), "{number}");
        }
    }

    #[test]
    fn rejects_invalid_numbers() {
        for number in ["", "   ", "0811234567", "091123456", "+1 555 123 4567", "abc"] {
            assert!(validate_contact_number(number).is_err(), "{number}");
        }
    }

    // -- request validation --

    #[test]
    fn valid_request_builds_selection_and_quote() {
        let req = request(vec![
            vehicle_input("aa-1", "Addis Ababa", &[MaintenanceType::Offline]),
            vehicle_input("aa-2", "Hawassa", &[]),
        ]);
        let set = req.to_selection_set().unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().next().unwrap().vehicle.plate_number, "AA-1");

        let quote = req.quote().unwrap();
        assert_eq!(quote.total, 2200);
    }

    #[test]
    fn blank_owner_name_rejected() {
        let mut req = request(vec![vehicle_input("A", "Adama", &[MaintenanceType::Fls])]);
        req.owner_name = "   ".into();
        let err = req.to_selection_set().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("owner_name"));
    }

    #[test]
    fn overlong_owner_name_rejected() {
        let mut req = request(vec![vehicle_input("A", "Adama", &[MaintenanceType::Fls])]);
        req.owner_name = "x".repeat(MAX_NAME_LENGTH as usize + 1);
        assert_matches!(req.to_selection_set(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn bad_contact_number_rejected() {
        let mut req = request(vec![vehicle_input("A", "Adama", &[MaintenanceType::Fls])]);
        req.contact_number = "12345".into();
        let err = req.to_selection_set().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("contact_number"));
    }

    #[test]
    fn blank_vehicle_plate_rejected() {
        let req = request(vec![vehicle_input(" ", "Adama", &[MaintenanceType::Fls])]);
        assert_matches!(req.to_selection_set(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn no_vehicles_rejected() {
        let err = request(vec![]).to_selection_set().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("vehicle"));
    }

    #[test]
    fn no_maintenance_types_rejected() {
        let req = request(vec![vehicle_input("A", "Adama", &[])]);
        let err = req.to_selection_set().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("maintenance type"));
    }

    #[test]
    fn duplicate_plates_conflict() {
        let req = request(vec![
            vehicle_input("AA-1", "Adama", &[MaintenanceType::Fls]),
            vehicle_input("aa-1", "Jimma", &[MaintenanceType::Offline]),
        ]);
        assert_matches!(req.to_selection_set(), Err(CoreError::Conflict(_)));
    }

    #[test]
    fn duplicate_ids_conflict() {
        let mut first = vehicle_input("AA-1", "Adama", &[MaintenanceType::Fls]);
        first.id = Some("v1".into());
        let mut second = vehicle_input("AA-2", "Adama", &[MaintenanceType::Fls]);
        second.id = Some("v1".into());
        let req = request(vec![first, second]);
        assert_matches!(req.to_selection_set(), Err(CoreError::Conflict(_)));
    }

    #[test]
    fn build_selection_set_keeps_row_order() {
        let rows = vec![
            vehicle_input("B-2", "Jimma", &[MaintenanceType::Offline]),
            vehicle_input("A-1", "Adama", &[]),
        ];
        let set = build_selection_set(&rows).unwrap();
        let plates: Vec<_> = set.iter().map(|s| s.vehicle.plate_number.as_str()).collect();
        assert_eq!(plates, vec!["B-2", "A-1"]);
        assert!(build_selection_set(&[]).unwrap().is_empty());
    }

    // -- enums --

    #[test]
    fn classification_defaults() {
        assert_eq!(RequestPriority::default(), RequestPriority::Medium);
        assert_eq!(RequestCategory::default(), RequestCategory::General);
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let json = r#"{
            "owner_name": "Abebe",
            "contact_number": "0911234567",
            "vehicles": [{"plate_number": "A-1", "location": "Awash", "maintenance_types": ["fls"]}]
        }"#;
        let req: NewMaintenanceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.priority, RequestPriority::Medium);
        assert_eq!(req.quote().unwrap().transportation, 1200);
    }
}
