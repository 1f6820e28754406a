//! User directory layer.
//!
//! The service only reads user records; storage is owned elsewhere. The
//! in-memory directory backs standalone runs and tests.

pub mod memory;

pub use memory::{DirectoryError, InMemoryUserDirectory};

use crate::error::AppError;
use crate::models::User;
use async_trait::async_trait;

/// Resolves an authenticated subject to its user record.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Look up a user by email. `Ok(None)` means no such user.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}
