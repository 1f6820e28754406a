// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory user directory keyed by email.

use std::fs;
use std::path::Path;

use async_trait::async_trait;
use dashmap::DashMap;
use validator::Validate;

use crate::db::UserDirectory;
use crate::error::AppError;
use crate::models::User;

/// Directory of users held in memory. Email lookups are case-insensitive.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: DashMap<String, User>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users<I: IntoIterator<Item = User>>(users: I) -> Self {
        let directory = Self::new();
        for user in users {
            directory.insert(user);
        }
        directory
    }

    /// Load users from a JSON file containing an array of user records.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| DirectoryError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load users from a JSON string. Every record is validated.
    pub fn load_from_json(json_data: &str) -> Result<Self, DirectoryError> {
        let users: Vec<User> =
            serde_json::from_str(json_data).map_err(|e| DirectoryError::ParseError(e.to_string()))?;

        for user in &users {
            user.validate().map_err(|e| DirectoryError::InvalidUser {
                id: user.id,
                reason: e.to_string(),
            })?;
        }

        Ok(Self::with_users(users))
    }

    /// Insert or replace a user, keyed by its email.
    pub fn insert(&self, user: User) {
        self.users.insert(normalize(&user.email), user);
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .get(&normalize(email))
            .map(|entry| entry.value().clone()))
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Errors loading a directory seed file.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Invalid user {id}: {reason}")]
    InvalidUser { id: i64, reason: String },
}
