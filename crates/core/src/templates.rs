//! Built-in timeline templates.
//!
//! A template is a named, ordered list of milestone blueprints. Applying one
//! to a request produces concrete [`TimelineMilestone`] records spaced one day
//! apart from a start date.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::CoreError;
use crate::milestone::{MilestoneStatus, MilestoneType, TimelineMilestone};
use crate::roles::Role;
use crate::types::Timestamp;

/// Creator recorded on milestones generated without an assignee.
pub const SYSTEM_CREATOR: &str = "system";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Routine,
    Emergency,
    Inspection,
    Repair,
    Custom,
}

/// Blueprint for one milestone in a template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateMilestone {
    pub milestone_type: MilestoneType,
    pub title: String,
    pub description: String,
    pub order_index: u32,
    pub is_critical: bool,
    pub estimated_hours: f64,
    pub metadata: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
    pub estimated_duration_days: u32,
    pub milestones: Vec<TemplateMilestone>,
}

impl TimelineTemplate {
    /// Sum of the estimated hours across all milestones.
    pub fn total_estimated_hours(&self) -> f64 {
        self.milestones.iter().map(|m| m.estimated_hours).sum()
    }
}

// ---------------------------------------------------------------------------
// Built-in catalogue
// ---------------------------------------------------------------------------

static BUILTIN_TEMPLATES: LazyLock<Vec<TimelineTemplate>> = LazyLock::new(build_templates);

fn step(
    order_index: u32,
    milestone_type: MilestoneType,
    title: &str,
    description: &str,
    is_critical: bool,
    estimated_hours: f64,
    metadata: serde_json::Value,
) -> TemplateMilestone {
    TemplateMilestone {
        milestone_type,
        title: title.to_string(),
        description: description.to_string(),
        order_index,
        is_critical,
        estimated_hours,
        metadata,
    }
}

fn build_templates() -> Vec<TimelineTemplate> {
    use MilestoneType::{Deadline, Major, Minor};

    vec![
        TimelineTemplate {
            id: "routine-maintenance".into(),
            name: "Routine Maintenance".into(),
            description: "Standard routine maintenance workflow for regular vehicle servicing"
                .into(),
            category: TemplateCategory::Routine,
            estimated_duration_days: 5,
            milestones: vec![
                step(1, Major, "Initial Inspection",
                    "Comprehensive vehicle assessment and diagnostic check", true, 2.0,
                    json!({ "required_tools": ["diagnostic scanner", "basic tools"] })),
                step(2, Minor, "Fluid Checks",
                    "Check and replace engine oil, brake fluid, coolant", false, 1.0,
                    json!({ "required_parts": ["engine oil", "oil filter"] })),
                step(3, Minor, "Filter Replacement",
                    "Replace air filter, cabin filter, and fuel filter", false, 0.5,
                    json!({ "required_parts": ["air filter", "cabin filter"] })),
                step(4, Major, "Testing & Calibration",
                    "System verification and performance testing", true, 1.0,
                    json!({ "required_tools": ["diagnostic scanner"] })),
                step(5, Major, "Quality Assurance",
                    "Final inspection and quality check", true, 0.5,
                    json!({ "required_checklist": true })),
                step(6, Deadline, "Delivery Preparation",
                    "Customer handover preparation and documentation", true, 0.5,
                    json!({ "requires_customer_contact": true })),
            ],
        },
        TimelineTemplate {
            id: "emergency-repair".into(),
            name: "Emergency Repair".into(),
            description: "Fast-track workflow for urgent vehicle repairs".into(),
            category: TemplateCategory::Emergency,
            estimated_duration_days: 2,
            milestones: vec![
                step(1, Major, "Emergency Assessment",
                    "Rapid diagnostic and safety evaluation", true, 0.5,
                    json!({ "priority": "urgent" })),
                step(2, Major, "Emergency Repair",
                    "Execute critical repairs to restore functionality", true, 4.0,
                    json!({ "priority": "urgent" })),
                step(3, Major, "Safety Verification",
                    "Verify repair safety and basic functionality", true, 0.5,
                    json!({ "priority": "urgent" })),
                step(4, Deadline, "Emergency Handover",
                    "Quick handover with follow-up recommendations", true, 0.25,
                    json!({ "requires_follow_up": true })),
            ],
        },
        TimelineTemplate {
            id: "annual-inspection".into(),
            name: "Annual Inspection".into(),
            description: "Comprehensive annual vehicle inspection and certification".into(),
            category: TemplateCategory::Inspection,
            estimated_duration_days: 7,
            milestones: vec![
                step(1, Major, "Pre-Inspection Review",
                    "Review vehicle history and prepare inspection checklist", true, 1.0,
                    json!({ "requires_documentation": true })),
                step(2, Major, "Mechanical Inspection",
                    "Comprehensive mechanical systems inspection", true, 3.0,
                    json!({ "requires_certification": true })),
                step(3, Major, "Safety Systems Check",
                    "Inspect brakes, lights, signals, and safety equipment", true, 2.0,
                    json!({ "requires_certification": true })),
                step(4, Minor, "Emissions Testing",
                    "Environmental compliance and emissions testing", false, 1.0,
                    json!({ "requires_equipment": "emissions tester" })),
                step(5, Major, "Documentation & Certification",
                    "Complete inspection documentation and issue certificates", true, 1.0,
                    json!({ "requires_signature": true })),
            ],
        },
    ]
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

pub fn builtin_templates() -> &'static [TimelineTemplate] {
    &BUILTIN_TEMPLATES
}

pub fn template_by_id(id: &str) -> Option<&'static TimelineTemplate> {
    builtin_templates().iter().find(|t| t.id == id)
}

pub fn templates_by_category(category: TemplateCategory) -> Vec<&'static TimelineTemplate> {
    builtin_templates()
        .iter()
        .filter(|t| t.category == category)
        .collect()
}

// ---------------------------------------------------------------------------
// Instantiation
// ---------------------------------------------------------------------------

/// Build the milestones for `request_id` from a template.
///
/// Milestone `i` is planned `i` days after `start_date`. When a technician is
/// given, every milestone is assigned to and attributed to them; otherwise
/// they are unassigned and attributed to [`SYSTEM_CREATOR`].
pub fn create_timeline_from_template(
    template_id: &str,
    request_id: &str,
    start_date: Timestamp,
    assigned_to: Option<&str>,
) -> Result<Vec<TimelineMilestone>, CoreError> {
    let template = template_by_id(template_id).ok_or_else(|| CoreError::NotFound {
        entity: "TimelineTemplate",
        id: template_id.to_string(),
    })?;

    let assigned_to = assigned_to.map(str::trim).filter(|a| !a.is_empty());

    let milestones = template
        .milestones
        .iter()
        .enumerate()
        .map(|(offset, blueprint)| {
            let mut metadata = blueprint.metadata.clone();
            if let Some(obj) = metadata.as_object_mut() {
                obj.insert("estimated_hours".into(), json!(blueprint.estimated_hours));
                obj.insert("template_id".into(), json!(template.id));
            }

            TimelineMilestone {
                id: uuid::Uuid::new_v4().to_string(),
                request_id: request_id.to_string(),
                milestone_type: blueprint.milestone_type,
                title: blueprint.title.clone(),
                description: Some(blueprint.description.clone()),
                planned_date: Some(start_date + chrono::Duration::days(offset as i64)),
                actual_date: None,
                status: MilestoneStatus::Pending,
                completion_percentage: 0,
                assigned_to: assigned_to.map(String::from),
                created_by: assigned_to.unwrap_or(SYSTEM_CREATOR).to_string(),
                created_by_role: Role::Admin,
                order_index: blueprint.order_index,
                is_critical: blueprint.is_critical,
                dependencies: Vec::new(),
                metadata,
            }
        })
        .collect();

    Ok(milestones)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
