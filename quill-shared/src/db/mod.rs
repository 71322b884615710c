/// Database layer for Quill
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool with a start-up health check
/// - `migrations`: embedded schema migrations
///
/// Row types and their queries live in the `models` module.

pub mod migrations;
pub mod pool;
