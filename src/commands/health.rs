//! Health Check Commands
//!
//! Banner endpoints and the store diagnostic report.

use axum::extract::State;
use axum::Json;

use crate::models::response::{DiagnosticsResponse, MessageResponse};
use crate::state::AppState;

/// Maximum number of collections listed in the diagnostic report
const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Maximum length of an error message echoed in the diagnostic report
const MAX_ERROR_CHARS: usize = 50;

/// `GET /`
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Design Tutor Backend Running"))
}

/// `GET /api/hello`
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from the backend API!"))
}

/// `GET /test`
///
/// Reports store reachability and whether the store environment variables
/// are configured. Never fails; an absent or broken store is described in
/// the report instead.
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut report = DiagnosticsResponse::default();

    match state.store() {
        Some(store) => {
            tracing::debug!(
                "[Server] Checking document store '{}'",
                store.database_name()
            );
            report.connection_status = "Connected".to_string();

            match state.with_store(|store| store.list_collections()).await {
                Ok(collections) => {
                    report.collections = collections
                        .into_iter()
                        .take(MAX_REPORTED_COLLECTIONS)
                        .collect();
                    report.database = "✅ Connected & Working".to_string();
                }
                Err(e) => {
                    report.database = format!(
                        "⚠️  Connected but Error: {}",
                        truncate_chars(&e.to_string(), MAX_ERROR_CHARS)
                    );
                }
            }
        }
        None => {
            report.database = "⚠️  Available but not initialized".to_string();
        }
    }

    let config = state.config();
    report.database_url = Some(set_marker(config.has_database_url()));
    report.database_name = Some(set_marker(config.has_database_name()));

    Json(report)
}

fn set_marker(is_set: bool) -> String {
    let marker = if is_set { "✅ Set" } else { "❌ Not Set" };
    marker.to_string()
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
