//! HTTP Commands
//!
//! Request handlers grouped by feature, and the router that mounts them.

pub mod guides;
pub mod health;
pub mod templates;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub use guides::{create_guide, list_guides};
pub use health::{hello, root, test_database};
pub use templates::{create_template, list_templates};

/// Build the application router.
///
/// CORS is wide open (any origin, method and header): this is a public demo
/// API with no credentials to protect.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/", get(root))
        .route("/api/hello", get(hello))
        .route("/test", get(test_database))
        // Templates
        .route("/api/templates", get(list_templates).post(create_template))
        // Guides
        .route("/api/guides", get(list_guides).post(create_guide))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
