//! Integration tests for timeline template endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, post_json_as, ADMIN, SUPERVISOR};
use serde_json::json;

// ---------------------------------------------------------------------------
// GET /api/v1/templates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_all_templates() {
    let response = get(common::build_test_app(), "/api/v1/templates").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let templates = json["data"].as_array().unwrap();
    let ids: Vec<_> = templates.iter().map(|t| t["id"].as_str().unwrap()).collect();
    assert_eq!(
        ids,
        vec!["routine-maintenance", "emergency-repair", "annual-inspection"]
    );

    let emergency = &templates[1];
    assert_eq!(emergency["milestone_count"], 4);
    assert_eq!(emergency["total_estimated_hours"], 5.25);
}

#[tokio::test]
async fn list_templates_by_category() {
    let response = get(common::build_test_app(), "/api/v1/templates?category=inspection").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let templates = json["data"].as_array().unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0]["id"], "annual-inspection");

    let response = get(common::build_test_app(), "/api/v1/templates?category=custom").await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// GET /api/v1/templates/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_template_by_id() {
    let response = get(common::build_test_app(), "/api/v1/templates/routine-maintenance").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["name"], "Routine Maintenance");
    assert_eq!(data["category"], "routine");
    assert_eq!(data["milestones"].as_array().unwrap().len(), 6);
    assert_eq!(data["milestones"][5]["milestone_type"], "deadline");
}

#[tokio::test]
async fn unknown_template_returns_404() {
    let response = get(common::build_test_app(), "/api/v1/templates/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "TimelineTemplate with id nope not found");
}

// ---------------------------------------------------------------------------
// POST /api/v1/templates/{id}/instantiate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_instantiates_template() {
    let body = json!({
        "request_id": "req-42",
        "start_date": "2026-03-02T08:00:00Z",
        "assigned_to": "Carl"
    });
    let response = post_json_as(
        common::build_test_app(),
        "/api/v1/templates/emergency-repair/instantiate",
        &ADMIN,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let milestones = json["data"].as_array().unwrap();
    assert_eq!(milestones.len(), 4);

    assert_eq!(milestones[0]["request_id"], "req-42");
    assert_eq!(milestones[0]["planned_date"], "2026-03-02T08:00:00Z");
    assert_eq!(milestones[3]["planned_date"], "2026-03-05T08:00:00Z");
    assert_eq!(milestones[0]["status"], "pending");
    assert_eq!(milestones[0]["assigned_to"], "Carl");
    assert_eq!(milestones[0]["created_by"], "Carl");
    assert_eq!(milestones[1]["metadata"]["template_id"], "emergency-repair");
    assert_eq!(milestones[1]["metadata"]["estimated_hours"], 4.0);
}

#[tokio::test]
async fn instantiate_without_assignee_is_system_owned() {
    let body = json!({
        "request_id": "req-7",
        "start_date": "2026-03-02T08:00:00Z"
    });
    let response = post_json_as(
        common::build_test_app(),
        "/api/v1/templates/annual-inspection/instantiate",
        &ADMIN,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let first = &json["data"][0];
    assert_eq!(first["created_by"], "system");
    assert!(first["assigned_to"].is_null());
}

#[tokio::test]
async fn supervisor_cannot_instantiate_template_with_major_milestones() {
    let body = json!({
        "request_id": "req-42",
        "start_date": "2026-03-02T08:00:00Z"
    });
    let response = post_json_as(
        common::build_test_app(),
        "/api/v1/templates/routine-maintenance/instantiate",
        &SUPERVISOR,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn instantiate_unknown_template_returns_404() {
    let body = json!({
        "request_id": "req-42",
        "start_date": "2026-03-02T08:00:00Z"
    });
    let response = post_json_as(
        common::build_test_app(),
        "/api/v1/templates/nope/instantiate",
        &ADMIN,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn instantiate_empty_request_id_returns_400() {
    let body = json!({
        "request_id": "",
        "start_date": "2026-03-02T08:00:00Z"
    });
    let response = post_json_as(
        common::build_test_app(),
        "/api/v1/templates/emergency-repair/instantiate",
        &ADMIN,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn instantiate_requires_actor() {
    let body = json!({
        "request_id": "req-42",
        "start_date": "2026-03-02T08:00:00Z"
    });
    let response = post_json(
        common::build_test_app(),
        "/api/v1/templates/emergency-repair/instantiate",
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
