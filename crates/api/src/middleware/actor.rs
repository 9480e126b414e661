//! Caller identity extractor.
//!
//! Authentication happens upstream; the identity provider forwards the
//! signed-in user's display name, role and (optionally) email in request
//! headers. Header values are decoded as UTF-8, so names in Ge'ez script or
//! with accented letters arrive intact. The role is passed through unparsed
//! so that unrecognized roles reach the permission engine and receive least
//! privilege rather than an error.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use fleetmaint_core::error::CoreError;
use fleetmaint_core::permissions::{get_permissions, TimelinePermissions};
use fleetmaint_core::roles::{is_admin_email, ROLE_ADMIN};

use crate::error::AppError;

/// Header carrying the actor's display name.
pub const ACTOR_NAME_HEADER: &str = "x-actor-name";
/// Header carrying the actor's role name.
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";
/// Header carrying the actor's sign-in email.
pub const ACTOR_EMAIL_HEADER: &str = "x-actor-email";

/// The caller of a request.
///
/// ```ignore
/// async fn handler(actor: Actor) -> AppResult<Json<()>> {
///     tracing::info!(actor = %actor.name, role = %actor.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Actor {
    /// Display name, matched against milestone `created_by` / `assigned_to`.
    pub name: String,
    /// Effective role name (may be unrecognized or empty).
    pub role: String,
}

impl Actor {
    pub fn permissions(&self) -> TimelinePermissions {
        get_permissions(&self.role)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Actor {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let name = header_value(parts, ACTOR_NAME_HEADER)?
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(format!(
                    "Missing {ACTOR_NAME_HEADER} header"
                )))
            })?;

        let email = header_value(parts, ACTOR_EMAIL_HEADER)?;

        // Listed admin emails are promoted regardless of the stored role.
        let role = match email {
            Some(email) if is_admin_email(&email) => {
                tracing::debug!(actor = %name, "Promoting listed admin email");
                ROLE_ADMIN.to_string()
            }
            _ => header_value(parts, ACTOR_ROLE_HEADER)?.unwrap_or_default(),
        };

        Ok(Actor { name, role })
    }
}

/// Trimmed UTF-8 value of a header, `None` when absent.
fn header_value(parts: &Parts, name: &str) -> Result<Option<String>, AppError> {
    let Some(value) = parts.headers.get(name) else {
        return Ok(None);
    };
    let decoded = std::str::from_utf8(value.as_bytes())
        .map_err(|_| AppError::BadRequest(format!("{name} header is not valid UTF-8")))?;
    Ok(Some(decoded.trim().to_string()))
}
