/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use quill_api::{app::{build_router, AppState}, config::Config};
/// use quill_shared::db::pool::create_pool;
/// use quill_shared::store::postgres::PgStore;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(config.pool_config()).await?;
/// let state = AppState::new(PgStore::new(pool), config);
/// let app = build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use quill_shared::store::Store;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend
    pub store: Arc<dyn Store>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(store: impl Store + 'static, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /                            # Home page
/// ├── GET  /admin                       # Admin page
/// ├── GET  /health                      # Health check
/// ├── GET  /static/*                    # Static assets
/// ├── /users/
/// │   ├── POST /                        # Create user
/// │   ├── GET  /                        # List users
/// │   ├── GET  /:user_id                # Get user
/// │   └── POST /:user_id/articles       # Create article for user
/// └── GET  /articles/                   # List articles
/// ```
///
/// Collection routes answer both with and without the trailing slash.
///
/// # Middleware Stack
///
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let page_routes = Router::new()
        .route("/", get(routes::pages::home))
        .route("/admin", get(routes::pages::admin));

    let user_routes = Router::new()
        .route(
            "/users",
            post(routes::users::create_user).get(routes::users::list_users),
        )
        .route(
            "/users/",
            post(routes::users::create_user).get(routes::users::list_users),
        )
        .route("/users/:user_id", get(routes::users::get_user))
        .route(
            "/users/:user_id/articles",
            post(routes::articles::create_article_for_user),
        );

    let article_routes = Router::new()
        .route("/articles", get(routes::articles::list_articles))
        .route("/articles/", get(routes::articles::list_articles));

    let cors = build_cors(&state.config);
    let static_files = ServeDir::new(&state.config.api.static_dir);

    Router::new()
        .merge(page_routes)
        .route("/health", get(routes::health::health_check))
        .merge(user_routes)
        .merge(article_routes)
        .nest_service("/static", static_files)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

fn build_cors(config: &Config) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .api
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600))
}
