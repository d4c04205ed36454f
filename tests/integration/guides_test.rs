//! Guide Generation Integration Tests
//!
//! End-to-end `POST /api/guides` and `GET /api/guides` behavior.

use axum::http::StatusCode;
use serde_json::json;

use design_tutor_core::{DocumentFilter, DocumentKind, DocumentStore};

use crate::common::{failing_state, get_json, memory_state, post_json, storeless_state};

#[tokio::test]
async fn test_tech_robot_square_post_canva() {
    let (state, _store) = memory_state();
    let (status, body) = post_json(
        &state,
        "/api/guides",
        json!({"source_name": "Tech Robot Square Post", "tools": ["canva"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["detected"]["layout"], "square");
    assert_eq!(body["detected"]["palette"][0], "#0B0F1A");
    assert_eq!(body["source_name"], "Tech Robot Square Post");
    assert!(body["image_url"].is_null());
    assert!(body["id"].is_string());

    let steps = body["steps"]["canva"].as_array().unwrap();
    assert_eq!(steps.len(), 12);
    assert!(steps[0].as_str().unwrap().contains("Canva"));
    assert!(steps
        .iter()
        .any(|line| line.as_str().unwrap().contains("1080x1080")));
}

#[tokio::test]
async fn test_default_tools() {
    let (status, body) = post_json(
        &storeless_state(),
        "/api/guides",
        json!({"source_name": "Vertical reel"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let steps = body["steps"].as_object().unwrap();
    let keys: Vec<&str> = steps.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["photoshop", "canva", "illustrator"]);
    assert_eq!(steps["photoshop"][0], "Open Photoshop.");
    assert_eq!(steps["illustrator"][0], "Open Illustrator.");
    assert_eq!(body["detected"]["structure"][1]["position"], "top");
}

#[tokio::test]
async fn test_unknown_and_duplicate_tools() {
    let (status, body) = post_json(
        &storeless_state(),
        "/api/guides",
        json!({"source_name": "flyer", "tools": ["Figma", "CANVA", "canva"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let steps = body["steps"].as_object().unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps["figma"], steps["canva"]);
    assert_eq!(steps["canva"][3], "Create a new document sized 2480x3508 px.");
}

#[tokio::test]
async fn test_image_url_is_echoed() {
    let (_, body) = post_json(
        &storeless_state(),
        "/api/guides",
        json!({"source_name": "poster", "image_url": "https://cdn.example.com/a.png", "tools": []}),
    )
    .await;

    assert_eq!(body["image_url"], "https://cdn.example.com/a.png");
    assert_eq!(body["steps"], json!({}));
}

#[tokio::test]
async fn test_store_failure_returns_null_id() {
    let (status, body) = post_json(
        &failing_state(),
        "/api/guides",
        json!({"source_name": "Gradient story", "tools": ["photoshop"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].is_null());
    assert_eq!(body["detected"]["structure"][0]["style"], "gradient");
    assert_eq!(body["steps"]["photoshop"].as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn test_missing_store_returns_null_id() {
    let (status, body) =
        post_json(&storeless_state(), "/api/guides", json!({"source_name": ""})).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].is_null());
    assert_eq!(body["detected"]["layout"], "poster");
    assert_eq!(body["detected"]["fonts"], json!(["Poppins", "Montserrat"]));
}

#[tokio::test]
async fn test_guide_is_persisted_and_listed() {
    let (state, store) = memory_state();
    let (_, created) = post_json(
        &state,
        "/api/guides",
        json!({"source_name": "Modern A4 print", "tools": ["illustrator"]}),
    )
    .await;

    let stored = store
        .get_documents(DocumentKind::Guide, &DocumentFilter::new(), 0)
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["id"], created["id"]);
    assert_eq!(stored[0]["source_name"], "Modern A4 print");
    // image_url belongs to the response only
    assert!(stored[0].get("image_url").is_none());

    let (status, listed) = get_json(&state, "/api/guides?limit=10").await;
    assert_eq!(status, StatusCode::OK);
    let items = listed["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["detected"]["layout"], "a4");
    assert_eq!(items[0]["steps"]["illustrator"][1], "File > New (RGB).");
}

#[tokio::test]
async fn test_listed_guide_keeps_tool_order() {
    let (state, _store) = memory_state();
    post_json(
        &state,
        "/api/guides",
        json!({"source_name": "Story", "tools": ["photoshop", "canva"]}),
    )
    .await;

    let (_, listed) = get_json(&state, "/api/guides").await;
    let steps = listed["items"][0]["steps"].as_object().unwrap();
    let keys: Vec<&str> = steps.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["photoshop", "canva"]);
}

#[tokio::test]
async fn test_missing_source_name_is_rejected() {
    let (state, store) = memory_state();
    let (status, _) = post_json(&state, "/api/guides", json!({"tools": ["canva"]})).await;
    assert!(status.is_client_error());
    assert!(store.is_empty());
}
