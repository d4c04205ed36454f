//! Design Tutor Backend - Rust Backend Library
//!
//! HTTP backend that turns a design name into step-by-step recreation
//! guides for Photoshop, Illustrator and Canva, and stores templates and
//! generated guides in a document store.
//! It includes:
//! - HTTP command handlers and the router
//! - Guide generation service
//! - Storage layer (SQLite and in-memory document stores)
//! - Data models and utilities

pub mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

pub use commands::router;
pub use models::settings::AppConfig;
pub use services::GuideService;
pub use state::AppState;
pub use storage::{InMemoryDocumentStore, SqliteDocumentStore};
pub use utils::error::{AppError, AppResult};
