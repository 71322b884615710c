/// In-memory store
///
/// Keeps users and articles in vectors behind a single lock. IDs are
/// assigned from 1 upwards, like a fresh `BIGSERIAL`. Enforces the same
/// rules as the PostgreSQL schema: unique emails and existing owners.

use super::{Page, Store, StoreError, StoreResult};
use crate::models::{
    article::{Article, CreateArticle},
    user::{CreateUser, User},
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    articles: Vec<Article>,
    last_user_id: i64,
    last_article_id: i64,
}

/// Store that lives in process memory
///
/// Cloning shares the same underlying tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

fn paginate<T: Clone>(rows: &[T], page: Page) -> Vec<T> {
    rows.iter()
        .skip(page.skip as usize)
        .take(page.limit as usize)
        .cloned()
        .collect()
}

#[async_trait]
impl Store for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_user(&self, data: CreateUser) -> StoreResult<User> {
        let mut tables = self.tables.write().await;

        if tables.users.iter().any(|u| u.email == data.email) {
            return Err(StoreError::Conflict("Email already registered".to_string()));
        }

        tables.last_user_id += 1;
        let user = User {
            id: tables.last_user_id,
            email: data.email,
            hashed_password: data.hashed_password,
            is_active: true,
        };
        tables.users.push(user.clone());

        debug!(user_id = user.id, "Inserted user");
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn list_users(&self, page: Page) -> StoreResult<Vec<User>> {
        let tables = self.tables.read().await;
        Ok(paginate(&tables.users, page))
    }

    async fn create_article(&self, owner_id: i64, data: CreateArticle) -> StoreResult<Article> {
        let mut tables = self.tables.write().await;

        // Stands in for the articles.owner_id foreign key
        if !tables.users.iter().any(|u| u.id == owner_id) {
            return Err(StoreError::NotFound("User not found".to_string()));
        }

        tables.last_article_id += 1;
        let article = Article {
            id: tables.last_article_id,
            title: data.title,
            content: data.content,
            owner_id,
        };
        tables.articles.push(article.clone());

        debug!(article_id = article.id, owner_id, "Inserted article");
        Ok(article)
    }

    async fn list_articles(&self, page: Page) -> StoreResult<Vec<Article>> {
        let tables = self.tables.read().await;
        Ok(paginate(&tables.articles, page))
    }

    async fn articles_for_owners(&self, owner_ids: &[i64]) -> StoreResult<Vec<Article>> {
        let tables = self.tables.read().await;
        Ok(tables
            .articles
            .iter()
            .filter(|a| owner_ids.contains(&a.owner_id))
            .cloned()
            .collect())
    }
}
