//! Application State
//!
//! Shared state handed to every HTTP command through axum's `State`
//! extractor. Built once at startup.

use std::sync::Arc;

use design_tutor_core::{CoreResult, DocumentStore};

use crate::models::settings::AppConfig;
use crate::services::guide::GuideService;
use crate::storage::SqliteDocumentStore;
use crate::utils::error::{AppError, AppResult};

/// Application state shared across requests
#[derive(Clone)]
pub struct AppState {
    /// Configuration read at startup
    config: Arc<AppConfig>,
    /// Document store; `None` when no store is configured or it failed to open
    store: Option<Arc<dyn DocumentStore>>,
    /// Guide generation service
    guides: Arc<GuideService>,
}

impl AppState {
    /// Create state around an already-built store
    pub fn new(config: AppConfig, store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self {
            config: Arc::new(config),
            store,
            guides: Arc::new(GuideService::new()),
        }
    }

    /// Create state from configuration, opening the SQLite store if one is
    /// configured. A store that fails to open is logged and left out.
    pub fn from_config(config: AppConfig) -> Self {
        let store = match config.database_url.as_deref() {
            Some(url) => match SqliteDocumentStore::open(url, config.database_namespace()) {
                Ok(store) if store.is_healthy() => {
                    tracing::info!(
                        "[Storage] Document store ready (database: {})",
                        config.database_namespace()
                    );
                    Some(Arc::new(store) as Arc<dyn DocumentStore>)
                }
                Ok(_) => {
                    tracing::warn!("[Storage] Document store failed its health check");
                    None
                }
                Err(e) => {
                    tracing::warn!("[Storage] Failed to open document store: {}", e);
                    None
                }
            },
            None => {
                tracing::warn!("[Storage] DATABASE_URL not set, running without a document store");
                None
            }
        };

        Self::new(config, store)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> Option<&Arc<dyn DocumentStore>> {
        self.store.as_ref()
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    pub fn guides(&self) -> &GuideService {
        &self.guides
    }

    /// Run a store operation on the blocking thread pool
    pub async fn with_store<F, T>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&dyn DocumentStore) -> CoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = self
            .store
            .clone()
            .ok_or_else(|| AppError::database("Document store not initialized"))?;

        let result = tokio::task::spawn_blocking(move || f(store.as_ref()))
            .await
            .map_err(|e| AppError::internal(format!("Store task failed: {}", e)))?;

        Ok(result?)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("has_store", &self.has_store())
            .finish()
    }
}
