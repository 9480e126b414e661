//! Handlers for milestone access checks.
//!
//! Milestones are owned by the timeline store; callers post the records they
//! hold and get back what the calling actor may see or do with them.

use axum::extract::Path;
use axum::response::IntoResponse;
use axum::Json;
use fleetmaint_core::milestone::{MilestoneOwnership, TimelineMilestone};
use fleetmaint_core::permissions::{
    can_create_milestone, can_delete_milestone, can_update_milestone, visible_milestones,
};
use fleetmaint_core::types::EntityId;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::actor::Actor;
use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct VisibleMilestonesRequest {
    pub milestones: Vec<TimelineMilestone>,
}

/// One milestone to check, identified by an optional caller-side id.
#[derive(Debug, Deserialize)]
pub struct MilestoneAccessItem {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(flatten)]
    pub ownership: MilestoneOwnership,
}

#[derive(Debug, Deserialize)]
pub struct MilestoneAccessRequest {
    pub milestones: Vec<MilestoneAccessItem>,
}

#[derive(Debug, Serialize)]
pub struct MilestoneAccessResult {
    pub id: Option<EntityId>,
    pub can_update: bool,
    pub can_delete: bool,
}

#[derive(Debug, Serialize)]
pub struct CanCreateResult {
    pub milestone_type: String,
    pub allowed: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /milestones/visible
///
/// Returns the subset of the posted milestones the actor may see, in the
/// order they were posted.
pub async fn filter_visible(
    actor: Actor,
    Json(body): Json<VisibleMilestonesRequest>,
) -> AppResult<impl IntoResponse> {
    let visible: Vec<TimelineMilestone> =
        visible_milestones(&actor.role, &actor.name, &body.milestones)
            .into_iter()
            .cloned()
            .collect();

    tracing::debug!(
        actor = %actor.name,
        role = %actor.role,
        posted = body.milestones.len(),
        visible = visible.len(),
        "Filtered visible milestones"
    );

    Ok(Json(DataResponse { data: visible }))
}

/// POST /milestones/access
pub async fn check_access(
    actor: Actor,
    Json(body): Json<MilestoneAccessRequest>,
) -> AppResult<impl IntoResponse> {
    let results: Vec<MilestoneAccessResult> = body
        .milestones
        .into_iter()
        .map(|item| MilestoneAccessResult {
            can_update: can_update_milestone(&actor.role, &actor.name, &item.ownership),
            can_delete: can_delete_milestone(&actor.role, &actor.name, &item.ownership),
            id: item.id,
        })
        .collect();

    Ok(Json(DataResponse { data: results }))
}

/// GET /milestones/can-create/{milestone_type}
///
/// Unknown type names answer `false` rather than failing.
pub async fn can_create(
    actor: Actor,
    Path(milestone_type): Path<String>,
) -> Json<DataResponse<CanCreateResult>> {
    let allowed = can_create_milestone(&actor.role, &milestone_type);
    Json(DataResponse {
        data: CanCreateResult {
            milestone_type,
            allowed,
        },
    })
}
