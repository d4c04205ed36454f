//! Integration Tests Module
//!
//! Drives the HTTP router in-process against in-memory, failing, absent and
//! SQLite-backed document stores.

// Shared request helpers and test stores
mod common;

// HTTP surface tests
mod api_test;

// Guide generation end-to-end tests
mod guides_test;
