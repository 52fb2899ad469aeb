//! Token storage port definition.

use async_trait::async_trait;

use crate::domain::entities::AuthToken;
use crate::domain::errors::StorageError;

/// Well-known key the session token is persisted under.
pub const TOKEN_KEY: &str = "token";

/// Port for token persistence operations.
#[async_trait]
pub trait TokenStoragePort: Send + Sync {
    /// Retrieves stored token.
    async fn get_token(&self) -> Result<Option<AuthToken>, StorageError>;

    /// Stores token, replacing any previous one.
    async fn store_token(&self, token: &AuthToken) -> Result<(), StorageError>;

    /// Deletes stored token. Deleting a missing token is not an error.
    async fn delete_token(&self) -> Result<(), StorageError>;

    /// Checks if token exists.
    async fn has_token(&self) -> Result<bool, StorageError> {
        Ok(self.get_token().await?.is_some())
    }
}
