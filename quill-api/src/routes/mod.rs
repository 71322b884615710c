/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: User creation and lookup
/// - `articles`: Article creation and listing
/// - `pages`: Server-rendered HTML pages

pub mod articles;
pub mod health;
pub mod pages;
pub mod users;
