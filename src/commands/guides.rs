//! Guide Commands
//!
//! Generate design recreation guides and list previously generated ones.

use axum::extract::{Query, State};
use axum::Json;
use serde_json::Value;

use design_tutor_core::{DocumentFilter, DocumentKind};

use crate::models::guide::{GuideRequest, GuideResponse};
use crate::models::response::ListResponse;
use crate::models::query::ListQuery;
use crate::state::AppState;
use crate::utils::error::AppResult;

/// `POST /api/guides`
///
/// Always succeeds once the body parses. Unknown tool names get the Canva
/// steps and a failed store write is reported as `"id": null`.
pub async fn create_guide(
    State(state): State<AppState>,
    Json(request): Json<GuideRequest>,
) -> Json<GuideResponse> {
    let response = state.guides().generate(&state, request).await;
    Json(response)
}

/// `GET /api/guides?limit=20`
pub async fn list_guides(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ListResponse<Value>>> {
    let items = state
        .with_store(move |store| {
            store.get_documents(DocumentKind::Guide, &DocumentFilter::new(), query.limit)
        })
        .await?;

    Ok(Json(ListResponse::new(items)))
}
