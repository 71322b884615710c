//! # Quill Shared Library
//!
//! Data model and persistence for the Quill API server.
//!
//! ## Module Organization
//!
//! - `models`: User and article rows with their SQL queries
//! - `db`: Connection pool and embedded migrations
//! - `store`: The `Store` persistence interface (PostgreSQL and in-memory)
//! - `password`: Argon2id password hashing

pub mod db;
pub mod models;
pub mod password;
pub mod store;

/// Current version of the Quill shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
