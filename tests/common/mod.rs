// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use auth_responder::config::{Config, DEFAULT_PRINCIPAL_HEADER};
use auth_responder::db::InMemoryUserDirectory;
use auth_responder::models::User;
use auth_responder::routes::create_router;
use auth_responder::AppState;
use axum::{
    body::Body,
    http::{Request, Response},
};
use std::sync::Arc;
use tower::ServiceExt;

/// Users seeded into every test directory.
#[allow(dead_code)]
pub fn test_users() -> Vec<User> {
    vec![
        User {
            id: 42,
            email: "alice@example.com".to_string(),
            nickname: "alice".to_string(),
            profile_img_url: "http://img/a.png".to_string(),
        },
        User {
            id: 7,
            email: "bob@example.com".to_string(),
            nickname: "bob".to_string(),
            profile_img_url: "http://img/b.png".to_string(),
        },
    ]
}

/// Create a test app over the in-memory directory.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_config(Config::test_default())
}

#[allow(dead_code)]
pub fn create_test_app_with_config(config: Config) -> (axum::Router, Arc<AppState>) {
    let users = Arc::new(InMemoryUserDirectory::with_users(test_users()));
    let state = Arc::new(AppState::new(config, users));

    (create_router(state.clone()), state)
}

/// POST to the login success route as `principal`.
#[allow(dead_code)]
pub async fn login_as(app: axum::Router, principal: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/auth/login/success")
            .header(DEFAULT_PRINCIPAL_HEADER, principal)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
