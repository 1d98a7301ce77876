//! # Tenantpress Shared Library
//!
//! This crate contains the data layer shared by the tenantpress tooling:
//! connection pooling, password hashing, and the table models of the
//! multi-tenant content schema.
//!
//! ## Module Organization
//!
//! - `db`: SQLite connection pool management
//! - `auth`: Password hashing and verification
//! - `models`: Table models and their CRUD operations

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the tenantpress shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
