/// Router tests for the Quill API
///
/// These run the full router (routing, extraction, validation, error
/// mapping) against the in-memory store.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::TestContext;
use quill_shared::store::{Page, Store};
use serde_json::json;

#[tokio::test]
async fn test_create_user_then_get_by_id() {
    let ctx = TestContext::new();

    let (status, user) = ctx
        .post_json("/users/", json!({ "email": "a@x.com", "password": "p" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["email"], "a@x.com");
    assert_eq!(user["is_active"], true);
    assert_eq!(user["items"], json!([]));
    assert!(user.get("password").is_none());
    assert!(user.get("hashed_password").is_none());

    let id = user["id"].as_i64().unwrap();
    let (status, fetched) = ctx.get_json(&format!("/users/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, user);
}

#[tokio::test]
async fn test_password_is_stored_hashed() {
    let ctx = TestContext::new();
    let id = ctx.create_user("a@x.com").await;

    let stored = ctx.store.find_user_by_id(id).await.unwrap().unwrap();
    assert_ne!(stored.hashed_password, "p");
    assert!(quill_shared::password::verify_password("p", &stored.hashed_password).unwrap());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let ctx = TestContext::new();
    let id = ctx.create_user("a@x.com").await;
    let before = ctx.store.find_user_by_id(id).await.unwrap().unwrap();

    let (status, body) = ctx
        .post_json("/users/", json!({ "email": "a@x.com", "password": "other" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "conflict");
    assert_eq!(body["message"], "Email already registered");

    let after = ctx.store.find_user_by_id(id).await.unwrap().unwrap();
    assert_eq!(before, after);
    assert_eq!(ctx.store.list_users(Page::default()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let ctx = TestContext::new();

    let (status, body) = ctx.get_json("/users/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn test_invalid_email_is_unprocessable() {
    let ctx = TestContext::new();

    let (status, body) = ctx
        .post_json("/users/", json!({ "email": "nope", "password": "p" }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"][0]["field"], "email");
}

#[tokio::test]
async fn test_overlong_email_is_unprocessable() {
    let ctx = TestContext::new();
    let label = "b".repeat(63);
    let email = format!("{}@{label}.{label}.{label}", "a".repeat(64));
    assert_eq!(email.len(), 256);

    let (status, body) = ctx
        .post_json("/users/", json!({ "email": email, "password": "p" }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "email");

    let (_, users) = ctx.get_json("/users/").await;
    assert!(users.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_users_skip_and_limit() {
    let ctx = TestContext::new();
    let first = ctx.create_user("a@x.com").await;
    let second = ctx.create_user("b@x.com").await;

    let (status, page) = ctx.get_json("/users/?skip=0&limit=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page.as_array().unwrap().len(), 1);
    assert_eq!(page[0]["id"], first);

    let (_, again) = ctx.get_json("/users/?skip=0&limit=1").await;
    assert_eq!(page, again);

    let (_, rest) = ctx.get_json("/users/?skip=1").await;
    assert_eq!(rest.as_array().unwrap().len(), 1);
    assert_eq!(rest[0]["id"], second);

    let (_, all) = ctx.get_json("/users").await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, empty) = ctx.get_json("/users/?skip=5").await;
    assert_eq!(empty, json!([]));
}

#[tokio::test]
async fn test_negative_skip_is_rejected() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .uri("/users/?skip=-1")
        .body(Body::empty())
        .unwrap();
    let (status, _) = ctx.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_article_for_user() {
    let ctx = TestContext::new();
    let owner = ctx.create_user("a@x.com").await;

    let (status, first) = ctx
        .post_json(&format!("/users/{owner}/articles"), json!({ "title": "T" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["title"], "T");
    assert!(first["content"].is_null());
    assert_eq!(first["owner_id"], owner);

    let (_, second) = ctx
        .post_json(
            &format!("/users/{owner}/articles"),
            json!({ "title": "U", "content": "body" }),
        )
        .await;
    assert_eq!(second["content"], "body");
    assert_ne!(first["id"], second["id"]);

    let (_, user) = ctx.get_json(&format!("/users/{owner}")).await;
    assert_eq!(user["items"], json!([first, second]));
}

#[tokio::test]
async fn test_create_article_for_unknown_user() {
    let ctx = TestContext::new();

    let (status, body) = ctx
        .post_json("/users/42/articles", json!({ "title": "Orphan" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    let (_, articles) = ctx.get_json("/articles/").await;
    assert_eq!(articles, json!([]));
}

#[tokio::test]
async fn test_empty_title_is_unprocessable() {
    let ctx = TestContext::new();
    let owner = ctx.create_user("a@x.com").await;

    let (status, body) = ctx
        .post_json(&format!("/users/{owner}/articles"), json!({ "title": "" }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "title");
}

#[tokio::test]
async fn test_overlong_title_is_unprocessable() {
    let ctx = TestContext::new();
    let owner = ctx.create_user("a@x.com").await;

    let (status, body) = ctx
        .post_json(
            &format!("/users/{owner}/articles"),
            json!({ "title": "t".repeat(256) }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "title");

    let (_, articles) = ctx.get_json("/articles/").await;
    assert!(articles.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_articles_across_users() {
    let ctx = TestContext::new();
    let a = ctx.create_user("a@x.com").await;
    let b = ctx.create_user("b@x.com").await;

    let mut created = Vec::new();
    for (owner, title) in [(a, "a1"), (b, "b1"), (a, "a2")] {
        let (_, article) = ctx
            .post_json(&format!("/users/{owner}/articles"), json!({ "title": title }))
            .await;
        created.push(article);
    }

    let (status, articles) = ctx.get_json("/articles/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(articles, json!(created));

    let (_, page) = ctx.get_json("/articles?skip=1&limit=1").await;
    assert_eq!(page, json!([created[1]]));

    let (_, users) = ctx.get_json("/users/").await;
    assert_eq!(users[0]["items"], json!([created[0], created[2]]));
    assert_eq!(users[1]["items"], json!([created[1]]));
}

#[tokio::test]
async fn test_example_scenario() {
    let ctx = TestContext::new();

    let (status, user) = ctx
        .post_json("/users/", json!({ "email": "a@x.com", "password": "p" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["is_active"], true);
    assert_eq!(user["items"], json!([]));
    let id = user["id"].as_i64().unwrap();

    let (status, _) = ctx
        .post_json("/users/", json!({ "email": "a@x.com", "password": "p" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, article) = ctx
        .post_json(&format!("/users/{id}/articles"), json!({ "title": "T" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(article["owner_id"], id);

    let (_, articles) = ctx.get_json("/articles/").await;
    assert!(articles.as_array().unwrap().contains(&article));
}

#[tokio::test]
async fn test_pages_render_html() {
    let ctx = TestContext::new();

    for uri in ["/", "/admin"] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = tower::ServiceExt::oneshot(ctx.app.clone(), request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"), "{uri}: {content_type}");
    }
}

#[tokio::test]
async fn test_static_files() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .uri("/static/style.css")
        .body(Body::empty())
        .unwrap();
    let (status, body) = ctx.send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("font-family"));

    let request = Request::builder()
        .uri("/static/missing.css")
        .body(Body::empty())
        .unwrap();
    let (status, _) = ctx.send(request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new();

    let (status, body) = ctx.get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["backend"], "memory");
    assert_eq!(body["database"], "connected");
    assert_eq!(body["version"], quill_shared::VERSION);
}
