//! In-Memory Document Store
//!
//! A `DocumentStore` held entirely in process memory. Used by tests and when
//! a throwaway store is enough.

use std::sync::RwLock;

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use design_tutor_core::{
    matches_filter, CoreError, CoreResult, DocumentFilter, DocumentKind, DocumentStore,
};

#[derive(Debug, Clone)]
struct StoredDocument {
    id: String,
    kind: DocumentKind,
    payload: Value,
    created_at: String,
}

impl StoredDocument {
    fn to_value(&self) -> Value {
        let mut document = self.payload.clone();
        if let Some(object) = document.as_object_mut() {
            object.insert("id".to_string(), Value::String(self.id.clone()));
            object.insert(
                "created_at".to_string(),
                Value::String(self.created_at.clone()),
            );
            object.insert(
                "updated_at".to_string(),
                Value::String(self.created_at.clone()),
            );
        }
        document
    }
}

/// Document store kept in a `Vec` behind a lock
#[derive(Debug)]
pub struct InMemoryDocumentStore {
    database_name: String,
    documents: RwLock<Vec<StoredDocument>>,
}

impl InMemoryDocumentStore {
    pub fn new(database_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            documents: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored documents across all kinds
    pub fn len(&self) -> usize {
        self.documents.read().map(|docs| docs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new("memory")
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn create_document(&self, kind: DocumentKind, payload: Value) -> CoreResult<String> {
        if !payload.is_object() {
            return Err(CoreError::validation(format!(
                "{} payload must be a JSON object",
                kind
            )));
        }

        let id = Uuid::new_v4().to_string();
        let mut documents = self
            .documents
            .write()
            .map_err(|_| CoreError::internal("document store lock poisoned"))?;
        documents.push(StoredDocument {
            id: id.clone(),
            kind,
            payload,
            created_at: Utc::now().to_rfc3339(),
        });
        Ok(id)
    }

    fn get_documents(
        &self,
        kind: DocumentKind,
        filter: &DocumentFilter,
        limit: usize,
    ) -> CoreResult<Vec<Value>> {
        let documents = self
            .documents
            .read()
            .map_err(|_| CoreError::internal("document store lock poisoned"))?;

        let matching = documents
            .iter()
            .filter(|doc| doc.kind == kind && matches_filter(&doc.payload, filter))
            .map(StoredDocument::to_value);

        Ok(if limit > 0 {
            matching.take(limit).collect()
        } else {
            matching.collect()
        })
    }

    fn list_collections(&self) -> CoreResult<Vec<String>> {
        let documents = self
            .documents
            .read()
            .map_err(|_| CoreError::internal("document store lock poisoned"))?;

        let mut names: Vec<String> = documents
            .iter()
            .map(|doc| doc.kind.collection().to_string())
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    fn database_name(&self) -> &str {
        &self.database_name
    }
}
