/// PostgreSQL-backed store
///
/// Thin adapter from [`Store`] to the queries in [`crate::models`]. Each call
/// borrows one pooled connection for the duration of a single statement.
///
/// Constraint violations are translated into store errors:
///
/// - unique violation on `users_email_key` → [`StoreError::Conflict`]
/// - foreign key violation on `articles.owner_id` → [`StoreError::NotFound`]

use super::{Page, Store, StoreError, StoreResult};
use crate::db::pool::health_check;
use crate::models::{
    article::{Article, CreateArticle},
    user::{CreateUser, User},
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

/// Store backed by a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wraps an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Maps constraint violations to domain errors, everything else to `Database`
fn classify(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::Conflict("Email already registered".to_string());
        }
        if db_err.is_foreign_key_violation() {
            return StoreError::NotFound("User not found".to_string());
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl Store for PgStore {
    fn name(&self) -> &str {
        "postgres"
    }

    async fn ping(&self) -> StoreResult<()> {
        health_check(&self.pool).await?;
        Ok(())
    }

    async fn create_user(&self, data: CreateUser) -> StoreResult<User> {
        let user = User::create(&self.pool, data).await.map_err(classify)?;
        debug!(user_id = user.id, "Inserted user");
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(User::find_by_email(&self.pool, email).await?)
    }

    async fn find_user_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        Ok(User::find_by_id(&self.pool, id).await?)
    }

    async fn list_users(&self, page: Page) -> StoreResult<Vec<User>> {
        Ok(User::list(&self.pool, i64::from(page.limit), i64::from(page.skip)).await?)
    }

    async fn create_article(&self, owner_id: i64, data: CreateArticle) -> StoreResult<Article> {
        let article = Article::create(&self.pool, owner_id, data)
            .await
            .map_err(classify)?;
        debug!(article_id = article.id, owner_id, "Inserted article");
        Ok(article)
    }

    async fn list_articles(&self, page: Page) -> StoreResult<Vec<Article>> {
        Ok(Article::list(&self.pool, i64::from(page.limit), i64::from(page.skip)).await?)
    }

    async fn articles_for_owners(&self, owner_ids: &[i64]) -> StoreResult<Vec<Article>> {
        Ok(Article::list_for_owners(&self.pool, owner_ids).await?)
    }
}
