#![allow(dead_code)]

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use fleetmaint_api::config::ServerConfig;
use fleetmaint_api::middleware::actor::{ACTOR_NAME_HEADER, ACTOR_ROLE_HEADER};
use fleetmaint_api::router::build_app_router;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app() -> Router {
    build_app_router(&test_config())
}

/// The identity forwarded with a request.
pub struct TestActor<'a> {
    pub name: &'a str,
    pub role: &'a str,
}

pub const ADMIN: TestActor<'static> = TestActor {
    name: "Alice",
    role: "admin",
};
pub const SUPERVISOR: TestActor<'static> = TestActor {
    name: "Bob",
    role: "supervisor",
};
pub const TECHNICIAN: TestActor<'static> = TestActor {
    name: "Carl",
    role: "technician",
};

fn request(
    method: Method,
    uri: &str,
    actor: Option<&TestActor<'_>>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(actor) = actor {
        // Raw bytes so display names outside ASCII reach the server as-is.
        builder = builder
            .header(ACTOR_NAME_HEADER, raw_header(actor.name.as_bytes()))
            .header(ACTOR_ROLE_HEADER, raw_header(actor.role.as_bytes()));
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn raw_header(bytes: &[u8]) -> HeaderValue {
    HeaderValue::from_bytes(bytes).unwrap()
}

/// Send a GET request with arbitrary raw header values.
pub async fn get_with_headers(app: Router, uri: &str, headers: &[(&str, &[u8])]) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, raw_header(value));
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send an anonymous GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(request(Method::GET, uri, None, None))
        .await
        .unwrap()
}

/// Send a GET request on behalf of `actor`.
pub async fn get_as(app: Router, uri: &str, actor: &TestActor<'_>) -> Response {
    app.oneshot(request(Method::GET, uri, Some(actor), None))
        .await
        .unwrap()
}

/// Send an anonymous JSON POST request.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(request(Method::POST, uri, None, Some(body)))
        .await
        .unwrap()
}

/// Send a JSON POST request on behalf of `actor`.
pub async fn post_json_as(
    app: Router,
    uri: &str,
    actor: &TestActor<'_>,
    body: serde_json::Value,
) -> Response {
    app.oneshot(request(Method::POST, uri, Some(actor), Some(body)))
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
