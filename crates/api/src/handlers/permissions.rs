//! Handlers exposing the timeline permission matrix.

use axum::extract::Path;
use axum::Json;
use fleetmaint_core::permissions::{get_permissions, TimelinePermissions};
use serde::Serialize;

use crate::middleware::actor::Actor;
use crate::response::DataResponse;

/// A role name together with the permissions it resolves to.
#[derive(Debug, Serialize)]
pub struct RolePermissions {
    pub role: String,
    pub permissions: TimelinePermissions,
}

/// GET /permissions -- permissions of the calling actor.
pub async fn get_actor_permissions(actor: Actor) -> Json<DataResponse<RolePermissions>> {
    let permissions = actor.permissions();
    Json(DataResponse {
        data: RolePermissions {
            role: actor.role,
            permissions,
        },
    })
}

/// GET /permissions/{role} -- permissions of a role name.
///
/// Unrecognized names are answered, not rejected: they resolve to no
/// permissions at all.
pub async fn get_role_permissions(Path(role): Path<String>) -> Json<DataResponse<RolePermissions>> {
    let permissions = get_permissions(&role);
    Json(DataResponse {
        data: RolePermissions { role, permissions },
    })
}
