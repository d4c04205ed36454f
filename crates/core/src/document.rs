//! Document Store Abstraction
//!
//! Insert-and-list persistence for opaque JSON documents. The application
//! constructs one store at startup and hands it to request handlers as an
//! `Arc<dyn DocumentStore>`, so tests can swap in an in-memory store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreResult;

/// Field-equality filter applied to the top level of stored payloads.
///
/// Every entry must match for a document to be returned; an empty filter
/// matches every document of the requested kind.
pub type DocumentFilter = Map<String, Value>;

/// Collections the service writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Reusable design layouts
    Template,
    /// Generated guides (one per generation request)
    Guide,
}

impl DocumentKind {
    /// Collection name used by the store
    pub fn collection(&self) -> &'static str {
        match self {
            DocumentKind::Template => "template",
            DocumentKind::Guide => "guide",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.collection())
    }
}

/// Insert-and-list document persistence.
///
/// Implementations stamp each inserted document with `id`, `created_at` and
/// `updated_at`, and return those fields merged into the payload when
/// listing. There is no update or delete.
pub trait DocumentStore: Send + Sync {
    /// Insert a JSON object payload and return its assigned id
    fn create_document(&self, kind: DocumentKind, payload: Value) -> CoreResult<String>;

    /// List documents of `kind` in insertion order.
    ///
    /// `limit == 0` returns every matching document.
    fn get_documents(
        &self,
        kind: DocumentKind,
        filter: &DocumentFilter,
        limit: usize,
    ) -> CoreResult<Vec<Value>>;

    /// Collection names that hold at least one document, sorted
    fn list_collections(&self) -> CoreResult<Vec<String>>;

    /// Logical database name the store writes under
    fn database_name(&self) -> &str;

    /// Whether the backing storage is reachable
    fn is_healthy(&self) -> bool {
        self.list_collections().is_ok()
    }
}

/// Check a payload against a field-equality filter
pub fn matches_filter(payload: &Value, filter: &DocumentFilter) -> bool {
    filter
        .iter()
        .all(|(key, expected)| payload.get(key) == Some(expected))
}
