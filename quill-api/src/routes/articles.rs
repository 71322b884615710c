/// Article endpoints
///
/// # Endpoints
///
/// - `POST /users/{user_id}/articles` - Create an article owned by a user
/// - `GET /articles/` - List articles across all users

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use quill_shared::{
    models::article::{Article, CreateArticle},
    store::Page,
};
use serde::Deserialize;
use validator::Validate;

/// Create article request
#[derive(Debug, Deserialize, Validate)]
pub struct ArticleCreate {
    /// Article title
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    /// Optional body text
    #[serde(default)]
    pub content: Option<String>,
}

impl From<ArticleCreate> for CreateArticle {
    fn from(req: ArticleCreate) -> Self {
        Self {
            title: req.title,
            content: req.content,
        }
    }
}

/// Create an article for a user
///
/// The user ID is passed to the store as-is. An unknown owner is rejected at
/// insert time and reported as `404 Not Found`.
///
/// # Endpoint
///
/// ```text
/// POST /users/1/articles
/// Content-Type: application/json
///
/// { "title": "T", "content": "optional" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": 1, "title": "T", "content": "optional", "owner_id": 1 }
/// ```
pub async fn create_article_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<ArticleCreate>,
) -> ApiResult<Json<Article>> {
    req.validate()?;

    let article = state.store.create_article(user_id, req.into()).await?;

    tracing::info!(article_id = article.id, owner_id = user_id, "Article created");
    Ok(Json(article))
}

/// List articles
///
/// Not filtered by owner. Articles come back in ascending ID order.
pub async fn list_articles(
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> ApiResult<Json<Vec<Article>>> {
    Ok(Json(state.store.list_articles(page).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_optional() {
        let req: ArticleCreate = serde_json::from_str(r#"{"title": "T"}"#).unwrap();
        assert!(req.validate().is_ok());

        let data = CreateArticle::from(req);
        assert_eq!(data.title, "T");
        assert!(data.content.is_none());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let req = ArticleCreate {
            title: String::new(),
            content: None,
        };
        assert!(req.validate().is_err());
    }
}
