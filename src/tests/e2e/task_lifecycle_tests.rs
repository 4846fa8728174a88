// End to end walk through the HTTP shell: create, complete, conflict, list, stats, delete.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::tasks::adapters::outbound::task_store_in_memory::InMemoryTaskStore;
use crate::shell::http::router;
use crate::shell::state::AppState;

#[fixture]
fn app() -> Router {
    router(AppState::new(Arc::new(InMemoryTaskStore::default())))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[rstest]
#[tokio::test]
async fn it_should_drive_a_task_through_its_lifecycle(app: Router) {
    let (status, created) = send(
        &app,
        json_request("POST", "/tasks", r#"{"title":"Buy milk"}"#.to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["data"]["id"].as_str().unwrap().to_string();
    let uri = format!("/tasks/{id}");

    let (status, completed) = send(
        &app,
        json_request("PUT", &uri, r#"{"completed":true,"version":1}"#.to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(completed["data"]["version"], 2);

    let (status, conflict) = send(
        &app,
        json_request("PUT", &uri, r#"{"title":"x","version":1}"#.to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(conflict["success"], false);

    let (status, fetched) = send(&app, empty_request("GET", &uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["title"], "Buy milk");
    assert_eq!(fetched["data"]["version"], 2);

    let (_, stats) = send(&app, empty_request("GET", "/tasks/stats")).await;
    assert_eq!(
        stats["data"],
        serde_json::json!({ "total": 1, "completed": 1, "pending": 0 })
    );

    let (status, _) = send(&app, empty_request("DELETE", &uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, listed) = send(&app, empty_request("GET", "/tasks")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["data"], serde_json::json!([]));
}
