/// Article model and database operations
///
/// Every article belongs to exactly one user through `owner_id`.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE articles (
///     id BIGSERIAL PRIMARY KEY,
///     title VARCHAR(255) NOT NULL,
///     content TEXT,
///     owner_id BIGINT NOT NULL REFERENCES users (id)
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Article row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Article {
    /// Unique article ID, assigned by the database
    pub id: i64,

    /// Article title
    pub title: String,

    /// Optional body text
    pub content: Option<String>,

    /// ID of the owning user
    pub owner_id: i64,
}

/// Input for creating a new article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArticle {
    /// Article title
    pub title: String,

    /// Optional body text
    pub content: Option<String>,
}

impl Article {
    /// Creates a new article owned by `owner_id`
    ///
    /// The owner is not looked up first. An unknown owner is rejected by the
    /// `articles_owner_id_fkey` foreign key.
    pub async fn create(
        pool: &PgPool,
        owner_id: i64,
        data: CreateArticle,
    ) -> Result<Self, sqlx::Error> {
        let article = sqlx::query_as::<_, Article>(
            r#"
            INSERT INTO articles (title, content, owner_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, owner_id
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(owner_id)
        .fetch_one(pool)
        .await?;

        Ok(article)
    }

    /// Lists articles across all owners, ordered by ID
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Self>, sqlx::Error> {
        let articles = sqlx::query_as::<_, Article>(
            r#"
            SELECT id, title, content, owner_id
            FROM articles
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(articles)
    }

    /// Lists every article owned by any of `owner_ids`, ordered by ID
    ///
    /// Used to embed articles in user responses with one query per page of
    /// users instead of one per user.
    pub async fn list_for_owners(
        pool: &PgPool,
        owner_ids: &[i64],
    ) -> Result<Vec<Self>, sqlx::Error> {
        if owner_ids.is_empty() {
            return Ok(Vec::new());
        }

        let articles = sqlx::query_as::<_, Article>(
            r#"
            SELECT id, title, content, owner_id
            FROM articles
            WHERE owner_id = ANY($1)
            ORDER BY id ASC
            "#,
        )
        .bind(owner_ids)
        .fetch_all(pool)
        .await?;

        Ok(articles)
    }
}
