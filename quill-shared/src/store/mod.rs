/// Persistence interface
///
/// The API layer talks to storage only through the [`Store`] trait. Two
/// implementations are provided:
///
/// - [`postgres::PgStore`]: PostgreSQL via the queries in [`crate::models`]
/// - [`memory::MemoryStore`]: in-process storage for tests and local runs
///
/// Each call is one unit of work. There are no transactions spanning calls,
/// so a `find_user_by_email` followed by `create_user` can race; backends
/// report the losing insert as [`StoreError::Conflict`].
///
/// # Example
///
/// ```
/// use quill_shared::models::user::CreateUser;
/// use quill_shared::store::{memory::MemoryStore, Page, Store};
///
/// #[tokio::main]
/// async fn main() -> Result<(), quill_shared::store::StoreError> {
/// let store = MemoryStore::new();
/// let user = store
///     .create_user(CreateUser {
///         email: "a@x.com".to_string(),
///         hashed_password: "hash".to_string(),
///     })
///     .await?;
///
/// let users = store.list_users(Page::default()).await?;
/// assert_eq!(users[0].id, user.id);
/// Ok(())
/// }
/// ```

pub mod memory;
pub mod postgres;

use crate::models::{
    article::{Article, CreateArticle},
    user::{CreateUser, User},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Default page size for list operations
pub const DEFAULT_LIMIT: u32 = 100;

/// Errors raised by a [`Store`]
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness rule was violated (e.g. duplicate email)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A referenced record does not exist (e.g. unknown article owner)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Offset pagination
///
/// Deserializes from `?skip=&limit=` query strings; both fields are optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Number of rows to skip
    #[serde(default)]
    pub skip: u32,

    /// Maximum number of rows to return
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Page {
    /// Creates a page
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }
}

/// Storage backend for users and articles
///
/// List operations return rows in ascending ID order so paging is
/// deterministic when no writes intervene.
#[async_trait]
pub trait Store: Send + Sync {
    /// Returns the backend name, used in logs
    fn name(&self) -> &str;

    /// Checks that the backend is reachable
    async fn ping(&self) -> StoreResult<()>;

    /// Inserts a user with `is_active = true`
    ///
    /// Fails with [`StoreError::Conflict`] if the email is taken.
    async fn create_user(&self, data: CreateUser) -> StoreResult<User>;

    /// Finds a user by exact email
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Finds a user by ID
    async fn find_user_by_id(&self, id: i64) -> StoreResult<Option<User>>;

    /// Lists users ordered by ID
    async fn list_users(&self, page: Page) -> StoreResult<Vec<User>>;

    /// Inserts an article owned by `owner_id`
    ///
    /// Callers do not check the owner first. Backends reject an unknown
    /// owner with [`StoreError::NotFound`].
    async fn create_article(&self, owner_id: i64, data: CreateArticle) -> StoreResult<Article>;

    /// Lists articles across all owners ordered by ID
    async fn list_articles(&self, page: Page) -> StoreResult<Vec<Article>>;

    /// Lists all articles belonging to any of `owner_ids`, ordered by ID
    async fn articles_for_owners(&self, owner_ids: &[i64]) -> StoreResult<Vec<Article>>;
}
