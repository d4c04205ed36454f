//! Shared helpers for the integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use design_tutor_backend::{router, AppConfig, AppState, InMemoryDocumentStore};
use design_tutor_core::{CoreError, CoreResult, DocumentFilter, DocumentKind, DocumentStore};

/// Store whose every operation fails
pub struct FailingStore;

impl DocumentStore for FailingStore {
    fn create_document(&self, _kind: DocumentKind, _payload: Value) -> CoreResult<String> {
        Err(CoreError::storage("write refused"))
    }

    fn get_documents(
        &self,
        _kind: DocumentKind,
        _filter: &DocumentFilter,
        _limit: usize,
    ) -> CoreResult<Vec<Value>> {
        Err(CoreError::storage("read refused"))
    }

    fn list_collections(&self) -> CoreResult<Vec<String>> {
        Err(CoreError::storage(
            "collection listing refused because the backing file is locked by another process",
        ))
    }

    fn database_name(&self) -> &str {
        "failing"
    }
}

/// Configuration with both database variables set
pub fn configured() -> AppConfig {
    AppConfig {
        database_url: Some(":memory:".to_string()),
        database_name: Some("tutor_test".to_string()),
        ..AppConfig::default()
    }
}

/// State backed by a fresh in-memory store, returning the store for inspection
pub fn memory_state() -> (AppState, Arc<InMemoryDocumentStore>) {
    let store = Arc::new(InMemoryDocumentStore::new("tutor_test"));
    let state = AppState::new(configured(), Some(store.clone() as Arc<dyn DocumentStore>));
    (state, store)
}

pub fn failing_state() -> AppState {
    AppState::new(configured(), Some(Arc::new(FailingStore) as Arc<dyn DocumentStore>))
}

pub fn storeless_state() -> AppState {
    AppState::new(AppConfig::default(), None)
}

/// Send a GET request and decode the JSON body
pub async fn get_json(state: &AppState, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(state, request).await
}

/// Send a POST request with a JSON body and decode the JSON response
pub async fn post_json(state: &AppState, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(state, request).await
}

pub async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}
