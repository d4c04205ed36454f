//! Storage Layer
//!
//! Document persistence: SQLite-backed store for deployments and an
//! in-memory store for tests.

pub mod database;
pub mod memory;

pub use database::*;
pub use memory::*;
