//! HTTP Surface Integration Tests
//!
//! Banner routes, the store diagnostic, template CRUD and CORS.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use design_tutor_backend::router;

use crate::common::{failing_state, get_json, memory_state, post_json, storeless_state};

// ============================================================================
// Banner Routes
// ============================================================================

#[tokio::test]
async fn test_root_message() {
    let (status, body) = get_json(&storeless_state(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Design Tutor Backend Running"}));
}

#[tokio::test]
async fn test_hello_message() {
    let (status, body) = get_json(&storeless_state(), "/api/hello").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Hello from the backend API!"}));
}

// ============================================================================
// Diagnostics
// ============================================================================

#[tokio::test]
async fn test_diagnostics_without_store() {
    let (status, body) = get_json(&storeless_state(), "/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "⚠️  Available but not initialized");
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["database_url"], "❌ Not Set");
    assert_eq!(body["database_name"], "❌ Not Set");
    assert_eq!(body["collections"], json!([]));
}

#[tokio::test]
async fn test_diagnostics_with_store() {
    let (state, _store) = memory_state();
    post_json(&state, "/api/templates", json!({"name": "Promo"})).await;

    let (status, body) = get_json(&state, "/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "✅ Set");
    assert_eq!(body["collections"], json!(["template"]));
}

#[tokio::test]
async fn test_diagnostics_with_broken_store() {
    let (status, body) = get_json(&failing_state(), "/test").await;
    assert_eq!(status, StatusCode::OK);

    let database = body["database"].as_str().unwrap();
    assert!(database.starts_with("⚠️  Connected but Error: "));
    let detail = database.trim_start_matches("⚠️  Connected but Error: ");
    assert_eq!(detail.chars().count(), 50);
    assert_eq!(body["collections"], json!([]));
}

// ============================================================================
// Templates
// ============================================================================

#[tokio::test]
async fn test_create_and_list_templates() {
    let (state, _store) = memory_state();

    let (status, created) = post_json(
        &state,
        "/api/templates",
        json!({
            "name": "Launch Poster",
            "elements": [
                {"id": "bg", "type": "rectangle", "x": 0, "y": 0, "width": 1080, "height": 1350}
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["status"], "created");
    let id = created["id"].as_str().unwrap().to_string();

    let (status, listed) = get_json(&state, "/api/templates").await;
    assert_eq!(status, StatusCode::OK);
    let items = listed["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], json!(id));
    assert_eq!(items[0]["name"], "Launch Poster");
    assert_eq!(items[0]["width"], 1080);
    assert_eq!(items[0]["height"], 1350);
    assert_eq!(items[0]["background"], "#0b0f1a");
    assert_eq!(items[0]["elements"][0]["rotation"], 0.0);
}

#[tokio::test]
async fn test_list_templates_limit() {
    let (state, _store) = memory_state();
    for i in 0..25 {
        post_json(&state, "/api/templates", json!({"name": format!("t{}", i)})).await;
    }

    let (_, default_page) = get_json(&state, "/api/templates").await;
    assert_eq!(default_page["items"].as_array().unwrap().len(), 20);

    let (_, small_page) = get_json(&state, "/api/templates?limit=5").await;
    let items = small_page["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["name"], "t0");
}

#[tokio::test]
async fn test_create_template_store_failure_is_500() {
    let (status, body) = post_json(&failing_state(), "/api/templates", json!({"name": "x"})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].as_str().unwrap().contains("write refused"));
}

#[tokio::test]
async fn test_create_template_without_store_is_500() {
    let (status, body) =
        post_json(&storeless_state(), "/api/templates", json!({"name": "x"})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].as_str().unwrap().contains("not initialized"));
}

#[tokio::test]
async fn test_list_templates_store_failure_is_500() {
    let (status, _) = get_json(&failing_state(), "/api/templates").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_create_template_missing_name_is_rejected() {
    let (state, store) = memory_state();
    let (status, _) = post_json(&state, "/api/templates", json!({"width": 100})).await;
    assert!(status.is_client_error());
    assert!(store.is_empty());
}

// ============================================================================
// CORS
// ============================================================================

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/guides")
        .header(header::ORIGIN, "https://designer.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = router(storeless_state()).oneshot(request).await.unwrap();
    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
