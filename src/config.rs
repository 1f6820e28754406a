//! Application configuration loaded from environment variables.
//!
//! A `.env` file is honored for local development.

use axum::http::HeaderName;
use std::env;

/// Minimum HS256 signing key length in bytes.
pub const MIN_SIGNING_KEY_LEN: usize = 32;

/// Longest accepted access token lifetime (one year).
pub const MAX_JWT_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Header set by the upstream authentication layer when none is configured.
pub const DEFAULT_PRINCIPAL_HEADER: &str = "X-Authenticated-User";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// JWT signing key for access tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
    /// Access token lifetime in seconds
    pub jwt_ttl_secs: u64,
    /// Optional scheme prepended to the `Authorization` response header.
    /// `None` sends the raw token.
    pub authorization_scheme: Option<String>,
    /// Request header carrying the authenticated principal
    pub principal_header: String,
    /// JSON file with user records to seed the directory
    pub users_file: Option<String>,
}

impl Config {
    /// Config for tests only.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:5173".to_string(),
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!!".to_vec(),
            jwt_ttl_secs: 24 * 60 * 60,
            authorization_scheme: None,
            principal_header: DEFAULT_PRINCIPAL_HEADER.to_string(),
            users_file: None,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let jwt_signing_key = env::var("JWT_SIGNING_KEY")
            .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
            .into_bytes();
        if jwt_signing_key.len() < MIN_SIGNING_KEY_LEN {
            return Err(ConfigError::Invalid(
                "JWT_SIGNING_KEY",
                format!("must be at least {} bytes", MIN_SIGNING_KEY_LEN),
            ));
        }

        let jwt_ttl_secs = match env::var("JWT_TTL_SECS") {
            Ok(v) => v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ttl| (1..=MAX_JWT_TTL_SECS).contains(ttl))
                .ok_or_else(|| {
                    ConfigError::Invalid(
                        "JWT_TTL_SECS",
                        format!("expected 1..={} seconds, got {}", MAX_JWT_TTL_SECS, v),
                    )
                })?,
            Err(_) => 24 * 60 * 60,
        };

        let principal_header = env::var("PRINCIPAL_HEADER")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_PRINCIPAL_HEADER.to_string());
        HeaderName::from_bytes(principal_header.as_bytes()).map_err(|_| {
            ConfigError::Invalid(
                "PRINCIPAL_HEADER",
                format!("not a valid header name: {:?}", principal_header),
            )
        })?;

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            jwt_signing_key,
            jwt_ttl_secs,
            authorization_scheme: env::var("AUTHORIZATION_SCHEME")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            principal_header,
            users_file: env::var("USERS_FILE").ok().filter(|v| !v.is_empty()),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
