//! Timeline permission matrix and milestone access predicates.
//!
//! Each role maps to one fixed [`TimelinePermissions`] record. The predicates
//! here combine that record with a milestone's ownership metadata to decide
//! what a specific actor may do with it. Unrecognized role names get
//! [`TimelinePermissions::NONE`], so every check degrades to "no".

use serde::{Deserialize, Serialize};

use crate::milestone::{MilestoneAccess, MilestoneType};
use crate::roles::Role;

// ---------------------------------------------------------------------------
// Capability record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePermissions {
    // View
    pub can_view_full_timeline: bool,
    pub can_view_all_milestones: bool,
    pub can_view_critical_path: bool,
    pub can_view_resource_allocation: bool,
    pub can_view_analytics: bool,

    // Create
    pub can_create_major_milestones: bool,
    pub can_create_minor_milestones: bool,
    pub can_create_events: bool,
    pub can_create_deadlines: bool,

    // Edit
    pub can_edit_own_milestones: bool,
    pub can_edit_all_milestones: bool,
    pub can_edit_assigned_milestones: bool,
    pub can_reschedule_milestones: bool,
    pub can_update_progress: bool,

    // Delete
    pub can_delete_own_milestones: bool,
    pub can_delete_all_milestones: bool,

    // Assignment
    pub can_assign_technicians: bool,
    pub can_reassign_work: bool,

    // Advanced
    pub can_create_templates: bool,
    pub can_manage_escalations: bool,
    pub can_generate_reports: bool,
    pub can_bulk_update: bool,
}

impl TimelinePermissions {
    /// Everything granted.
    pub const ADMIN: TimelinePermissions = TimelinePermissions {
        can_view_full_timeline: true,
        can_view_all_milestones: true,
        can_view_critical_path: true,
        can_view_resource_allocation: true,
        can_view_analytics: true,
        can_create_major_milestones: true,
        can_create_minor_milestones: true,
        can_create_events: true,
        can_create_deadlines: true,
        can_edit_own_milestones: true,
        can_edit_all_milestones: true,
        can_edit_assigned_milestones: true,
        can_reschedule_milestones: true,
        can_update_progress: true,
        can_delete_own_milestones: true,
        can_delete_all_milestones: true,
        can_assign_technicians: true,
        can_reassign_work: true,
        can_create_templates: true,
        can_manage_escalations: true,
        can_generate_reports: true,
        can_bulk_update: true,
    };

    /// Project-level visibility; edits and deletes limited to own and
    /// assigned work; no major milestones, templates, or bulk updates.
    pub const SUPERVISOR: TimelinePermissions = TimelinePermissions {
        can_view_full_timeline: true,
        can_view_all_milestones: true,
        can_view_critical_path: true,
        can_view_resource_allocation: true,
        can_view_analytics: true,
        can_create_major_milestones: false,
        can_create_minor_milestones: true,
        can_create_events: true,
        can_create_deadlines: true,
        can_edit_own_milestones: true,
        can_edit_all_milestones: false,
        can_edit_assigned_milestones: true,
        can_reschedule_milestones: true,
        can_update_progress: true,
        can_delete_own_milestones: true,
        can_delete_all_milestones: false,
        can_assign_technicians: true,
        can_reassign_work: true,
        can_create_templates: false,
        can_manage_escalations: true,
        can_generate_reports: true,
        can_bulk_update: false,
    };

    /// Assigned work only: may log events and update progress on it.
    pub const TECHNICIAN: TimelinePermissions = TimelinePermissions {
        can_view_full_timeline: false,
        can_view_all_milestones: false,
        can_view_critical_path: false,
        can_view_resource_allocation: false,
        can_view_analytics: false,
        can_create_major_milestones: false,
        can_create_minor_milestones: false,
        can_create_events: true,
        can_create_deadlines: false,
        can_edit_own_milestones: false,
        can_edit_all_milestones: false,
        can_edit_assigned_milestones: true,
        can_reschedule_milestones: false,
        can_update_progress: true,
        can_delete_own_milestones: false,
        can_delete_all_milestones: false,
        can_assign_technicians: false,
        can_reassign_work: false,
        can_create_templates: false,
        can_manage_escalations: false,
        can_generate_reports: false,
        can_bulk_update: false,
    };

    /// Nothing granted. Used for unrecognized roles.
    pub const NONE: TimelinePermissions = TimelinePermissions {
        can_view_full_timeline: false,
        can_view_all_milestones: false,
        can_view_critical_path: false,
        can_view_resource_allocation: false,
        can_view_analytics: false,
        can_create_major_milestones: false,
        can_create_minor_milestones: false,
        can_create_events: false,
        can_create_deadlines: false,
        can_edit_own_milestones: false,
        can_edit_all_milestones: false,
        can_edit_assigned_milestones: false,
        can_reschedule_milestones: false,
        can_update_progress: false,
        can_delete_own_milestones: false,
        can_delete_all_milestones: false,
        can_assign_technicians: false,
        can_reassign_work: false,
        can_create_templates: false,
        can_manage_escalations: false,
        can_generate_reports: false,
        can_bulk_update: false,
    };

    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self::ADMIN,
            Role::Supervisor => Self::SUPERVISOR,
            Role::Technician => Self::TECHNICIAN,
        }
    }

    /// Whether this record allows creating a milestone of the given type.
    pub fn can_create(&self, milestone_type: MilestoneType) -> bool {
        match milestone_type {
            MilestoneType::Major => self.can_create_major_milestones,
            MilestoneType::Minor => self.can_create_minor_milestones,
            MilestoneType::Event => self.can_create_events,
            MilestoneType::Deadline => self.can_create_deadlines,
        }
    }

    /// Every flag with its field name, in declaration order.
    pub fn flags(&self) -> [(&'static str, bool); 22] {
        [
            ("can_view_full_timeline", self.can_view_full_timeline),
            ("can_view_all_milestones", self.can_view_all_milestones),
            ("can_view_critical_path", self.can_view_critical_path),
            ("can_view_resource_allocation", self.can_view_resource_allocation),
            ("can_view_analytics", self.can_view_analytics),
            ("can_create_major_milestones", self.can_create_major_milestones),
            ("can_create_minor_milestones", self.can_create_minor_milestones),
            ("can_create_events", self.can_create_events),
            ("can_create_deadlines", self.can_create_deadlines),
            ("can_edit_own_milestones", self.can_edit_own_milestones),
            ("can_edit_all_milestones", self.can_edit_all_milestones),
            ("can_edit_assigned_milestones", self.can_edit_assigned_milestones),
            ("can_reschedule_milestones", self.can_reschedule_milestones),
            ("can_update_progress", self.can_update_progress),
            ("can_delete_own_milestones", self.can_delete_own_milestones),
            ("can_delete_all_milestones", self.can_delete_all_milestones),
            ("can_assign_technicians", self.can_assign_technicians),
            ("can_reassign_work", self.can_reassign_work),
            ("can_create_templates", self.can_create_templates),
            ("can_manage_escalations", self.can_manage_escalations),
            ("can_generate_reports", self.can_generate_reports),
            ("can_bulk_update", self.can_bulk_update),
        ]
    }
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Permissions for a role name as supplied by the identity provider.
pub fn get_permissions(role: &str) -> TimelinePermissions {
    Role::parse(role).map_or(TimelinePermissions::NONE, TimelinePermissions::for_role)
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Whether `actor` in `role` may edit `milestone`.
///
/// Completed and cancelled milestones are frozen for everyone, admins
/// included.
pub fn can_update_milestone(role: &str, actor: &str, milestone: &impl MilestoneAccess) -> bool {
    if milestone.status().is_terminal() {
        return false;
    }

    let parsed = Role::parse(role);
    let permissions = get_permissions(role);

    if parsed == Some(Role::Admin) {
        return permissions.can_edit_all_milestones;
    }

    if milestone.created_by() == actor && permissions.can_edit_own_milestones {
        return true;
    }

    if milestone.is_assigned_to(actor) && permissions.can_edit_assigned_milestones {
        return true;
    }

    // Supervisors may only touch non-major milestones beyond their own and
    // assigned ones, and only when granted edit-all (they are not).
    if parsed == Some(Role::Supervisor) && milestone.milestone_type() != MilestoneType::Major {
        return permissions.can_edit_all_milestones;
    }

    false
}

/// Whether `role` may create a milestone of the named type.
///
/// Unknown type names are refused.
pub fn can_create_milestone(role: &str, milestone_type: &str) -> bool {
    MilestoneType::parse(milestone_type)
        .is_some_and(|ty| get_permissions(role).can_create(ty))
}

/// Whether `actor` in `role` may delete `milestone`.
pub fn can_delete_milestone(role: &str, actor: &str, milestone: &impl MilestoneAccess) -> bool {
    let permissions = get_permissions(role);

    if permissions.can_delete_all_milestones {
        return true;
    }

    milestone.created_by() == actor && permissions.can_delete_own_milestones
}

/// Filter `milestones` down to those `actor` in `role` may see, preserving
/// order.
///
/// Roles without view-all see what is assigned to them, what they created,
/// and anything not yet assigned to anyone.
pub fn visible_milestones<'a, T: MilestoneAccess>(
    role: &str,
    actor: &str,
    milestones: &'a [T],
) -> Vec<&'a T> {
    if get_permissions(role).can_view_all_milestones {
        return milestones.iter().collect();
    }

    milestones
        .iter()
        .filter(|m| m.is_assigned_to(actor) || m.created_by() == actor || m.is_unassigned())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
