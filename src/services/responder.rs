// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Post-authentication responder.
//!
//! Invoked once the upstream authentication layer has established the
//! principal. Issues an access token and answers with the user's public
//! profile.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::db::UserDirectory;
use crate::error::{AppError, Result};
use crate::models::{AuthenticationResponse, Principal};
use crate::services::token::TokenIssuer;

/// Content type of a successful login response.
pub const JSON_UTF8: &str = "application/json;charset=UTF-8";

/// Hook run after successful authentication.
#[async_trait]
pub trait OnAuthSuccess: Send + Sync {
    /// Build the complete response for an authenticated principal.
    async fn on_authentication_success(&self, principal: &Principal) -> Result<Response>;
}

/// Answers a successful login with a token and the user's profile.
pub struct LoginSuccessResponder {
    token_issuer: Arc<dyn TokenIssuer>,
    users: Arc<dyn UserDirectory>,
    authorization_scheme: Option<String>,
}

impl LoginSuccessResponder {
    pub fn new(token_issuer: Arc<dyn TokenIssuer>, users: Arc<dyn UserDirectory>) -> Self {
        Self {
            token_issuer,
            users,
            authorization_scheme: None,
        }
    }

    /// Prefix the `Authorization` header value with `scheme` (e.g. `Bearer`).
    pub fn with_authorization_scheme(mut self, scheme: Option<String>) -> Self {
        self.authorization_scheme = scheme;
        self
    }

    fn authorization_value(&self, token: &str) -> Result<HeaderValue> {
        let value = match &self.authorization_scheme {
            Some(scheme) => format!("{} {}", scheme, token),
            None => token.to_string(),
        };
        HeaderValue::from_str(&value)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid Authorization value: {}", e)))
    }
}

#[async_trait]
impl OnAuthSuccess for LoginSuccessResponder {
    async fn on_authentication_success(&self, principal: &Principal) -> Result<Response> {
        let token = self.token_issuer.issue(principal.as_str())?;

        let user = match self.users.find_by_email(principal.as_str()).await? {
            Some(user) => user,
            None => {
                tracing::warn!("Authenticated principal has no user record");
                return Err(AppError::UserNotFound(principal.to_string()));
            }
        };

        let body = serde_json::to_vec(&AuthenticationResponse::from(&user))
            .map_err(|e| AppError::Internal(e.into()))?;
        let authorization = self.authorization_value(&token)?;

        tracing::info!(user_id = user.id, "Access token issued");

        Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8)),
                (header::AUTHORIZATION, authorization),
            ],
            body,
        )
            .into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryUserDirectory;
    use crate::models::User;
    use crate::services::token::JwtService;

    fn responder() -> (LoginSuccessResponder, Arc<JwtService>) {
        let jwt = Arc::new(JwtService::new(b"test_signing_key_32_bytes_long!!", 3600));
        let users = Arc::new(InMemoryUserDirectory::with_users([User {
            id: 42,
            email: "alice@example.com".to_string(),
            nickname: "alice".to_string(),
            profile_img_url: "http://img/a.png".to_string(),
        }]));
        (LoginSuccessResponder::new(jwt.clone(), users), jwt)
    }

    #[tokio::test]
    async fn test_success_response() {
        let (responder, jwt) = responder();
        let principal = Principal::new("alice@example.com").unwrap();

        let response = responder.on_authentication_success(&principal).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_UTF8);
        let token = response.headers()[header::AUTHORIZATION].to_str().unwrap();
        assert_eq!(jwt.verify(token).unwrap().sub, "alice@example.com");
    }

    #[tokio::test]
    async fn test_missing_user_is_error() {
        let (responder, _) = responder();
        let principal = Principal::new("nobody@example.com").unwrap();

        let result = responder.on_authentication_success(&principal).await;
        assert!(matches!(result, Err(AppError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_authorization_scheme_prefix() {
        let (responder, jwt) = responder();
        let responder = responder.with_authorization_scheme(Some("Bearer".to_string()));
        let principal = Principal::new("alice@example.com").unwrap();

        let response = responder.on_authentication_success(&principal).await.unwrap();

        let value = response.headers()[header::AUTHORIZATION].to_str().unwrap();
        let token = value.strip_prefix("Bearer ").expect("scheme prefix");
        assert!(jwt.verify(token).is_ok());
    }
}
