//! SQLite Document Store
//!
//! Embedded document storage using rusqlite with r2d2 connection pooling.
//! Payloads are stored as JSON text; every row is scoped to a logical
//! database name so several namespaces can share one file.

use chrono::Utc;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use serde_json::Value;
use uuid::Uuid;

use design_tutor_core::{
    matches_filter, CoreError, CoreResult, DocumentFilter, DocumentKind, DocumentStore,
};

use crate::utils::error::{AppError, AppResult};

/// Type alias for the connection pool
pub type DbPool = Pool<SqliteConnectionManager>;

/// Where the SQLite data lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    Memory,
    File(String),
}

impl DatabaseLocation {
    /// Parse a `DATABASE_URL` value: a plain path, `sqlite://path`, or `:memory:`.
    ///
    /// Any other `scheme://` URL is rejected rather than treated as a path.
    pub fn parse(url: &str) -> AppResult<Self> {
        let url = url.trim();
        if let Some((scheme, _)) = url.split_once("://") {
            if scheme != "sqlite" {
                return Err(AppError::config(format!(
                    "unsupported DATABASE_URL scheme '{}'",
                    scheme
                )));
            }
        }
        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url);

        if path.is_empty() {
            return Err(AppError::config("DATABASE_URL has no path"));
        }
        if path == ":memory:" {
            return Ok(Self::Memory);
        }
        Ok(Self::File(path.to_string()))
    }
}

/// Document store backed by SQLite
#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool: DbPool,
    database_name: String,
}

impl SqliteDocumentStore {
    /// Open the store described by a `DATABASE_URL` value
    pub fn open(url: &str, database_name: impl Into<String>) -> AppResult<Self> {
        match DatabaseLocation::parse(url)? {
            DatabaseLocation::Memory => Self::new_in_memory(database_name),
            DatabaseLocation::File(path) => Self::new_file(&path, database_name),
        }
    }

    /// Create a file-backed store, creating parent directories as needed
    pub fn new_file(path: &str, database_name: impl Into<String>) -> AppResult<Self> {
        let db_path = std::path::Path::new(path);
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder()
            .max_size(10)
            .build(manager)
            .map_err(|e| AppError::database(format!("Failed to create connection pool: {}", e)))?;

        let store = Self {
            pool,
            database_name: database_name.into(),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory store.
    ///
    /// The pool is capped at one connection because every SQLite memory
    /// connection is its own database.
    pub fn new_in_memory(database_name: impl Into<String>) -> AppResult<Self> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .map_err(|e| AppError::database(format!("Failed to create connection pool: {}", e)))?;

        let store = Self {
            pool,
            database_name: database_name.into(),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn init_schema(&self) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS documents (
                id TEXT PRIMARY KEY,
                database TEXT NOT NULL,
                collection TEXT NOT NULL,
                payload TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_documents_collection
             ON documents(database, collection)",
            [],
        )?;

        Ok(())
    }

    fn insert(&self, kind: DocumentKind, payload: Value) -> AppResult<String> {
        if !payload.is_object() {
            return Err(AppError::validation(format!(
                "{} payload must be a JSON object",
                kind
            )));
        }

        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let body = serde_json::to_string(&payload)?;

        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO documents (id, database, collection, payload, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
            params![id, self.database_name, kind.collection(), body, now],
        )?;

        tracing::debug!("[Storage] Inserted {} document {}", kind, id);
        Ok(id)
    }

    fn select(
        &self,
        kind: DocumentKind,
        filter: &DocumentFilter,
        limit: usize,
    ) -> AppResult<Vec<Value>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, payload, created_at, updated_at FROM documents
             WHERE database = ?1 AND collection = ?2
             ORDER BY rowid ASC",
        )?;

        let rows = stmt.query_map(params![self.database_name, kind.collection()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut documents = Vec::new();
        for row in rows {
            let (id, payload, created_at, updated_at) = row?;
            let mut document: Value = serde_json::from_str(&payload)?;
            if !matches_filter(&document, filter) {
                continue;
            }
            if let Some(object) = document.as_object_mut() {
                object.insert("id".to_string(), Value::String(id));
                object.insert("created_at".to_string(), Value::String(created_at));
                object.insert("updated_at".to_string(), Value::String(updated_at));
            }
            documents.push(document);
            if limit > 0 && documents.len() >= limit {
                break;
            }
        }

        Ok(documents)
    }

    fn collections(&self) -> AppResult<Vec<String>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT DISTINCT collection FROM documents WHERE database = ?1 ORDER BY collection",
        )?;
        let names = stmt
            .query_map(params![self.database_name], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }
}

impl DocumentStore for SqliteDocumentStore {
    fn create_document(&self, kind: DocumentKind, payload: Value) -> CoreResult<String> {
        self.insert(kind, payload).map_err(into_core)
    }

    fn get_documents(
        &self,
        kind: DocumentKind,
        filter: &DocumentFilter,
        limit: usize,
    ) -> CoreResult<Vec<Value>> {
        self.select(kind, filter, limit).map_err(into_core)
    }

    fn list_collections(&self) -> CoreResult<Vec<String>> {
        self.collections().map_err(into_core)
    }

    fn database_name(&self) -> &str {
        &self.database_name
    }

    fn is_healthy(&self) -> bool {
        self.pool
            .get()
            .map(|conn| {
                conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

impl std::fmt::Debug for SqliteDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteDocumentStore")
            .field("database_name", &self.database_name)
            .finish()
    }
}

fn into_core(err: AppError) -> CoreError {
    match err {
        AppError::Core(core) => core,
        AppError::Validation(msg) => CoreError::Validation(msg),
        AppError::Serialization(e) => CoreError::Serialization(e),
        other => CoreError::storage(other.to_string()),
    }
}
