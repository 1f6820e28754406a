// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication models: the authenticated principal and the login response body.

use std::fmt;

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::AppError;
use crate::models::User;

/// Subject identifier (the user's email) established by the upstream
/// authentication layer for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal(String);

impl Principal {
    /// Build a principal, rejecting empty or whitespace-only subjects.
    pub fn new(subject: impl Into<String>) -> Result<Self, AppError> {
        let subject = subject.into();
        let trimmed = subject.trim();
        if trimmed.is_empty() {
            return Err(AppError::BadRequest("Empty principal".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Principal {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of a successful login response.
///
/// Field order and names are part of the wire contract:
/// `{"id":..,"nickname":..,"profileImgURL":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AuthenticationResponse {
    pub id: i64,
    pub nickname: String,
    #[serde(rename = "profileImgURL")]
    pub profile_img_url: String,
}

impl From<&User> for AuthenticationResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            nickname: user.nickname.clone(),
            profile_img_url: user.profile_img_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_rejects_blank() {
        assert!(Principal::new("").is_err());
        assert!(Principal::new("   ").is_err());
    }

    #[test]
    fn test_principal_trims() {
        let principal = Principal::new("  alice@example.com ").unwrap();
        assert_eq!(principal.as_str(), "alice@example.com");
        assert_eq!(principal.to_string(), "alice@example.com");
    }

    #[test]
    fn test_response_wire_format() {
        let user = User {
            id: 42,
            email: "alice@example.com".to_string(),
            nickname: "alice".to_string(),
            profile_img_url: "http://img/a.png".to_string(),
        };

        let json = serde_json::to_string(&AuthenticationResponse::from(&user)).unwrap();
        assert_eq!(
            json,
            r#"{"id":42,"nickname":"alice","profileImgURL":"http://img/a.png"}"#
        );
    }
}
