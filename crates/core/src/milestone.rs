//! Timeline milestone types.
//!
//! The permission predicates only look at ownership metadata, expressed by
//! the [`MilestoneAccess`] trait so they work over both the slim
//! [`MilestoneOwnership`] sent by the UI and full [`TimelineMilestone`]
//! records.

use serde::{Deserialize, Serialize};

use crate::roles::Role;
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneType {
    Major,
    Minor,
    Event,
    Deadline,
}

impl MilestoneType {
    /// Parse a wire name, `None` for anything unrecognized.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "major" => Some(Self::Major),
            "minor" => Some(Self::Minor),
            "event" => Some(Self::Event),
            "deadline" => Some(Self::Deadline),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Completed,
    Delayed,
    Cancelled,
}

impl MilestoneStatus {
    /// Completed and cancelled milestones can no longer be changed.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

// ---------------------------------------------------------------------------
// Access trait
// ---------------------------------------------------------------------------

/// Ownership and assignment metadata consulted by permission checks.
pub trait MilestoneAccess {
    fn created_by(&self) -> &str;
    fn assigned_to(&self) -> Option<&str>;
    fn milestone_type(&self) -> MilestoneType;
    fn status(&self) -> MilestoneStatus;

    fn is_assigned_to(&self, actor: &str) -> bool {
        self.assigned_to() == Some(actor)
    }

    /// Whether nobody is assigned. An empty assignee counts as nobody.
    fn is_unassigned(&self) -> bool {
        self.assigned_to().map_or(true, str::is_empty)
    }
}

// ---------------------------------------------------------------------------
// Ownership metadata
// ---------------------------------------------------------------------------

/// The subset of a milestone that permission checks need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneOwnership {
    pub created_by: String,
    #[serde(default)]
    pub assigned_to: Option<String>,
    pub milestone_type: MilestoneType,
    pub status: MilestoneStatus,
}

impl MilestoneAccess for MilestoneOwnership {
    fn created_by(&self) -> &str {
        &self.created_by
    }

    fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }

    fn milestone_type(&self) -> MilestoneType {
        self.milestone_type
    }

    fn status(&self) -> MilestoneStatus {
        self.status
    }
}

// ---------------------------------------------------------------------------
// Full record
// ---------------------------------------------------------------------------

/// A milestone on a maintenance request's timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineMilestone {
    pub id: EntityId,
    pub request_id: EntityId,
    pub milestone_type: MilestoneType,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub planned_date: Option<Timestamp>,
    #[serde(default)]
    pub actual_date: Option<Timestamp>,
    pub status: MilestoneStatus,
    pub completion_percentage: u8,
    #[serde(default)]
    pub assigned_to: Option<String>,
    pub created_by: String,
    pub created_by_role: Role,
    pub order_index: u32,
    pub is_critical: bool,
    #[serde(default)]
    pub dependencies: Vec<EntityId>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl MilestoneAccess for TimelineMilestone {
    fn created_by(&self) -> &str {
        &self.created_by
    }

    fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }

    fn milestone_type(&self) -> MilestoneType {
        self.milestone_type
    }

    fn status(&self) -> MilestoneStatus {
        self.status
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn ownership(assigned_to: Option<&str>) -> MilestoneOwnership {
        MilestoneOwnership {
            created_by: "Dana".into(),
            assigned_to: assigned_to.map(String::from),
            milestone_type: MilestoneType::Minor,
            status: MilestoneStatus::Pending,
        }
    }

    #[test]
    fn terminal_statuses() {
        assert!(MilestoneStatus::Completed.is_terminal());
        assert!(MilestoneStatus::Cancelled.is_terminal());
        assert!(!MilestoneStatus::Pending.is_terminal());
        assert!(!MilestoneStatus::InProgress.is_terminal());
        assert!(!MilestoneStatus::Delayed.is_terminal());
    }

    #[test]
    fn milestone_type_parse() {
        assert_eq!(MilestoneType::parse("major"), Some(MilestoneType::Major));
        assert_eq!(MilestoneType::parse("deadline"), Some(MilestoneType::Deadline));
        assert_eq!(MilestoneType::parse("Major"), None);
        assert_eq!(MilestoneType::parse("task"), None);
    }

    #[test]
    fn empty_assignee_counts_as_unassigned() {
        assert!(ownership(None).is_unassigned());
        assert!(ownership(Some("")).is_unassigned());
        assert!(!ownership(Some("Carl")).is_unassigned());
        assert!(!ownership(None).is_assigned_to("Carl"));
        assert!(ownership(Some("Carl")).is_assigned_to("Carl"));
    }

    #[test]
    fn ownership_deserializes_without_assignee() {
        let json = r#"{"created_by":"Bob","milestone_type":"minor","status":"in_progress"}"#;
        let m: MilestoneOwnership = serde_json::from_str(json).unwrap();
        assert_eq!(m.assigned_to, None);
        assert_eq!(m.status, MilestoneStatus::InProgress);
    }

    #[test]
    fn ownership_accepts_null_assignee() {
        let json =
            r#"{"created_by":"Bob","assigned_to":null,"milestone_type":"major","status":"pending"}"#;
        let m: MilestoneOwnership = serde_json::from_str(json).unwrap();
        assert!(m.is_unassigned());
    }
}
