//! Design Tutor Core
//!
//! Foundational error types and the document store abstraction shared by the
//! Design Tutor workspace. This crate has no dependencies on application-level
//! code (HTTP, SQLite, configuration).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `document` - Document store trait (`DocumentStore`, `DocumentKind`, `DocumentFilter`)

pub mod document;
pub mod error;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Document Store ─────────────────────────────────────────────────────
pub use document::{matches_filter, DocumentFilter, DocumentKind, DocumentStore};
