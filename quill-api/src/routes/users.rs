/// User endpoints
///
/// # Endpoints
///
/// - `POST /users/` - Create a user
/// - `GET /users/` - List users
/// - `GET /users/{user_id}` - Get a single user
///
/// Every user response embeds the user's articles as `items`.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use quill_shared::{
    models::{
        article::Article,
        user::{CreateUser, User},
    },
    password,
    store::Page,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct UserCreate {
    /// Email address
    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    pub email: String,

    /// Plaintext password, hashed before storage
    pub password: String,
}

/// User as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID
    pub id: i64,

    /// Email address
    pub email: String,

    /// Whether the account is active
    pub is_active: bool,

    /// Articles owned by the user, ordered by ID
    pub items: Vec<Article>,
}

impl UserResponse {
    /// Builds a response from a user row and its articles
    pub fn new(user: User, items: Vec<Article>) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
            items,
        }
    }
}

/// Attaches each user's articles with a single store call
async fn with_articles(state: &AppState, users: Vec<User>) -> ApiResult<Vec<UserResponse>> {
    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();

    let mut by_owner: HashMap<i64, Vec<Article>> = HashMap::new();
    for article in state.store.articles_for_owners(&ids).await? {
        by_owner.entry(article.owner_id).or_default().push(article);
    }

    Ok(users
        .into_iter()
        .map(|user| {
            let items = by_owner.remove(&user.id).unwrap_or_default();
            UserResponse::new(user, items)
        })
        .collect())
}

/// Create a user
///
/// Fails with a conflict if the email is already registered; nothing is
/// inserted in that case. The check and the insert are separate statements,
/// and the store's unique constraint catches a racing duplicate.
///
/// # Endpoint
///
/// ```text
/// POST /users/
/// Content-Type: application/json
///
/// { "email": "a@x.com", "password": "p" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": 1, "email": "a@x.com", "is_active": true, "items": [] }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Email already registered
/// - `422 Unprocessable Entity`: Invalid or over-long email
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<UserCreate>,
) -> ApiResult<Json<UserResponse>> {
    req.validate()?;

    if state.store.find_user_by_email(&req.email).await?.is_some() {
        tracing::debug!(email = %req.email, "Rejected duplicate email");
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    let hashed_password = password::hash_password(&req.password)?;

    let user = state
        .store
        .create_user(CreateUser {
            email: req.email,
            hashed_password,
        })
        .await?;

    tracing::info!(user_id = user.id, "User created");
    Ok(Json(UserResponse::new(user, Vec::new())))
}

/// List users
///
/// # Endpoint
///
/// ```text
/// GET /users/?skip=0&limit=100
/// ```
///
/// Users come back in ascending ID order.
pub async fn list_users(
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.store.list_users(page).await?;
    Ok(Json(with_articles(&state, users).await?))
}

/// Get a single user
///
/// # Errors
///
/// - `404 Not Found`: No user with this ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .store
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let items = state.store.articles_for_owners(&[user.id]).await?;
    Ok(Json(UserResponse::new(user, items)))
}
