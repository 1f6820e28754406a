// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Access token issuance and verification (JWT, HS256).

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{AppError, Result};

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
    /// Unique token ID
    pub jti: String,
}

/// Creates signed tokens bound to a subject, and verifies them.
pub trait TokenIssuer: Send + Sync {
    /// Issue a signed token for `subject`. Local signing only, no I/O.
    fn issue(&self, subject: &str) -> Result<String>;

    /// Verify a token previously issued and return its claims.
    fn verify(&self, token: &str) -> Result<Claims>;
}

/// HS256 JWT issuer.
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: u64,
}

impl JwtService {
    pub fn new(signing_key: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(signing_key),
            decoding_key: DecodingKey::from_secret(signing_key),
            ttl_secs,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.jwt_signing_key, config.jwt_ttl_secs)
    }
}

impl TokenIssuer for JwtService {
    fn issue(&self, subject: &str) -> Result<String> {
        if subject.is_empty() {
            return Err(AppError::TokenIssuance("empty subject".to_string()));
        }

        let now = Utc::now().timestamp().max(0) as usize;
        let exp = usize::try_from(self.ttl_secs)
            .ok()
            .and_then(|ttl| now.checked_add(ttl))
            .ok_or_else(|| AppError::TokenIssuance("token lifetime out of range".to_string()))?;
        let claims = Claims {
            sub: subject.to_string(),
            iat: now,
            exp,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::TokenIssuance(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token verification failed");
                AppError::InvalidToken
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &[u8] = b"test_signing_key_32_bytes_long!!";

    #[test]
    fn test_issue_and_verify() {
        let service = JwtService::new(KEY, 3600);
        let token = service.issue("alice@example.com").unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn test_repeated_issue_yields_distinct_tokens() {
        let service = JwtService::new(KEY, 3600);
        let first = service.issue("alice@example.com").unwrap();
        let second = service.issue("alice@example.com").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_rejects_wrong_key() {
        let issuer = JwtService::new(KEY, 3600);
        let other = JwtService::new(b"another_signing_key_32_bytes_lng", 3600);
        let token = issuer.issue("alice@example.com").unwrap();

        assert!(matches!(other.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let service = JwtService::new(KEY, 3600);
        assert!(matches!(
            service.verify("invalid.token.here"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_issue_rejects_overflowing_ttl() {
        let service = JwtService::new(KEY, u64::MAX);
        assert!(matches!(
            service.issue("alice@example.com"),
            Err(AppError::TokenIssuance(_))
        ));
    }

    #[test]
    fn test_issue_rejects_empty_subject() {
        let service = JwtService::new(KEY, 3600);
        assert!(matches!(
            service.issue(""),
            Err(AppError::TokenIssuance(_))
        ));
    }
}
