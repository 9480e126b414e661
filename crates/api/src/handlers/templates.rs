//! Handlers for the built-in timeline templates.

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fleetmaint_core::error::CoreError;
use fleetmaint_core::templates::{
    builtin_templates, create_timeline_from_template, template_by_id, templates_by_category,
    TemplateCategory, TimelineTemplate,
};
use fleetmaint_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::actor::Actor;
use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct TemplateListQuery {
    pub category: Option<TemplateCategory>,
}

/// Listing entry; the full milestone list is served by `GET /templates/{id}`.
#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
    pub estimated_duration_days: u32,
    pub milestone_count: usize,
    pub total_estimated_hours: f64,
}

impl From<&TimelineTemplate> for TemplateSummary {
    fn from(t: &TimelineTemplate) -> Self {
        Self {
            id: t.id.clone(),
            name: t.name.clone(),
            description: t.description.clone(),
            category: t.category,
            estimated_duration_days: t.estimated_duration_days,
            milestone_count: t.milestones.len(),
            total_estimated_hours: t.total_estimated_hours(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct InstantiateTemplateRequest {
    #[validate(length(min = 1, message = "request_id must not be empty"))]
    pub request_id: EntityId,
    pub start_date: Timestamp,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /templates?category=
pub async fn list_templates(
    Query(query): Query<TemplateListQuery>,
) -> Json<DataResponse<Vec<TemplateSummary>>> {
    let data = match query.category {
        Some(category) => templates_by_category(category)
            .into_iter()
            .map(TemplateSummary::from)
            .collect(),
        None => builtin_templates().iter().map(TemplateSummary::from).collect(),
    };
    Json(DataResponse { data })
}

/// GET /templates/{id}
pub async fn get_template(Path(id): Path<String>) -> AppResult<impl IntoResponse> {
    let template = template_by_id(&id).ok_or(CoreError::NotFound {
        entity: "TimelineTemplate",
        id,
    })?;
    Ok(Json(DataResponse { data: template }))
}

/// POST /templates/{id}/instantiate
///
/// The actor must be allowed to create every milestone type the template
/// contains.
pub async fn instantiate_template(
    actor: Actor,
    Path(id): Path<String>,
    Json(body): Json<InstantiateTemplateRequest>,
) -> AppResult<impl IntoResponse> {
    body.validate()?;

    let template = template_by_id(&id).ok_or_else(|| CoreError::NotFound {
        entity: "TimelineTemplate",
        id: id.clone(),
    })?;

    let permissions = actor.permissions();
    if let Some(denied) = template
        .milestones
        .iter()
        .find(|m| !permissions.can_create(m.milestone_type))
    {
        tracing::warn!(
            actor = %actor.name,
            role = %actor.role,
            template_id = %id,
            milestone_type = ?denied.milestone_type,
            "Template instantiation denied"
        );
        return Err(CoreError::Forbidden(format!(
            "Role '{}' may not create the milestones in template '{id}'",
            actor.role
        ))
        .into());
    }

    let milestones = create_timeline_from_template(
        &id,
        &body.request_id,
        body.start_date,
        body.assigned_to.as_deref(),
    )?;

    tracing::info!(
        actor = %actor.name,
        template_id = %id,
        request_id = %body.request_id,
        count = milestones.len(),
        "Instantiated timeline template"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: milestones })))
}
