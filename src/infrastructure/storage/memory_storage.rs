//! Process-local token storage.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::entities::AuthToken;
use crate::domain::errors::StorageError;
use crate::domain::ports::TokenStoragePort;

/// Keeps the token for the lifetime of the process only.
#[derive(Default)]
pub struct MemoryTokenStorage {
    token: RwLock<Option<AuthToken>>,
}

impl MemoryTokenStorage {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store already holding `token`.
    #[must_use]
    pub fn with_token(token: AuthToken) -> Self {
        Self {
            token: RwLock::new(Some(token)),
        }
    }
}

#[async_trait]
impl TokenStoragePort for MemoryTokenStorage {
    async fn get_token(&self) -> Result<Option<AuthToken>, StorageError> {
        Ok(self.token.read().clone())
    }

    async fn store_token(&self, token: &AuthToken) -> Result<(), StorageError> {
        *self.token.write() = Some(token.clone());
        Ok(())
    }

    async fn delete_token(&self) -> Result<(), StorageError> {
        *self.token.write() = None;
        Ok(())
    }
}
