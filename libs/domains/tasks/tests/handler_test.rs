//! Handler tests for the tasks domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::normalize_trailing_slash;
use domain_tasks::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[derive(Clone, Default)]
struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    fn count(&self, needle: &str) -> usize {
        String::from_utf8_lossy(&self.0.lock().unwrap()).matches(needle).count()
    }
}

fn capture_logs() -> (LogCapture, tracing::subscriber::DefaultGuard) {
    let capture = LogCapture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    (capture, tracing::subscriber::set_default(subscriber))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_create_task_returns_200_with_id() {
    let app = controller(TaskStore::Stub);

    let response = app
        .oneshot(post_json(
            "/",
            json!({"title": "Estudar", "description": "x"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"id": 1, "title": "Estudar", "description": "x"}));
}

#[tokio::test]
async fn test_stub_list_returns_canned_task() {
    let response = controller(TaskStore::Stub).oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!([{"id": 1, "title": "Tarefa 1"}]));
}

#[tokio::test]
async fn test_in_memory_create_then_get() {
    let app = controller(TaskStore::InMemory);

    for title in ["Estudar", "Ler"] {
        let response = app
            .clone()
            .oneshot(post_json("/", json!({ "title": title })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.clone().oneshot(get("/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let task: Task = json_body(response.into_body()).await;
    assert_eq!(task.title, "Ler");

    let tasks: Vec<Task> = json_body(app.oneshot(get("/")).await.unwrap().into_body()).await;
    assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
}

#[tokio::test]
async fn test_get_unknown_task_returns_404() {
    let response = controller(TaskStore::InMemory)
        .oneshot(get("/42"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_title_is_stored_as_sent() {
    let app = controller(TaskStore::InMemory);

    let response = app
        .clone()
        .oneshot(post_json(
            "/",
            json!({"title": "  Estudar ", "description": "x"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created: Value = json_body(response.into_body()).await;
    assert_eq!(
        created,
        json!({"id": 1, "title": "  Estudar ", "description": "x"})
    );

    let fetched: Task = json_body(app.oneshot(get("/1")).await.unwrap().into_body()).await;
    assert_eq!(fetched.title, "  Estudar ");
}

#[tokio::test]
async fn test_long_title_is_accepted() {
    let title = "t".repeat(300);

    let response = controller(TaskStore::InMemory)
        .oneshot(post_json("/", json!({ "title": title })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let task: Task = json_body(response.into_body()).await;
    assert_eq!(task.title, title);
}

#[tokio::test]
async fn test_missing_title_returns_400() {
    let response = controller(TaskStore::InMemory)
        .oneshot(post_json("/", json!({"description": "sem titulo"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_title_returns_400() {
    let response = controller(TaskStore::InMemory)
        .oneshot(post_json("/", json!({"title": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();

    let response = controller(TaskStore::InMemory)
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_nested_under_api_prefix_with_trailing_slash() {
    let app = normalize_trailing_slash(
        Router::new().nest("/api/v1/task", controller(TaskStore::InMemory)),
    );

    let created = app
        .clone()
        .oneshot(post_json("/api/v1/task/", json!({"title": "Estudar"})))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/v1/task/1/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_creation_is_logged_once() {
    let (logs, _guard) = capture_logs();

    let response = controller(TaskStore::InMemory)
        .oneshot(post_json("/", json!({"title": "Estudar"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(logs.count("Created task"), 1);
}
