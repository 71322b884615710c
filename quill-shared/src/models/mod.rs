/// Database models for Quill
///
/// This module contains the database models and their queries.
///
/// # Models
///
/// - `user`: User accounts
/// - `article`: Articles, each owned by one user
///
/// Handlers go through [`crate::store::Store`] rather than calling these
/// queries directly.

pub mod article;
pub mod user;
