//! Template Commands
//!
//! Create and list reusable design templates.

use axum::extract::{Query, State};
use axum::Json;
use serde_json::Value;

use design_tutor_core::{DocumentFilter, DocumentKind};

use crate::models::response::{CreatedResponse, ListResponse};
use crate::models::query::ListQuery;
use crate::models::template::Template;
use crate::state::AppState;
use crate::utils::error::AppResult;

/// `POST /api/templates`
///
/// Store failures (including a missing store) surface as HTTP 500.
pub async fn create_template(
    State(state): State<AppState>,
    Json(template): Json<Template>,
) -> AppResult<Json<CreatedResponse>> {
    let payload = serde_json::to_value(&template)?;
    let id = state
        .with_store(move |store| store.create_document(DocumentKind::Template, payload))
        .await?;

    tracing::info!("[Templates] Created template '{}' ({})", template.name, id);
    Ok(Json(CreatedResponse::created(id)))
}

/// `GET /api/templates?limit=20`
pub async fn list_templates(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ListResponse<Value>>> {
    let items = state
        .with_store(move |store| {
            store.get_documents(DocumentKind::Template, &DocumentFilter::new(), query.limit)
        })
        .await?;

    Ok(Json(ListResponse::new(items)))
}
