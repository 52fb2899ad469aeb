//! Token storage error types.

use thiserror::Error;

/// Key-value storage error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum StorageError {
    #[error("failed to access storage: {0}")]
    AccessFailed(String),

    #[error("failed to retrieve value: {0}")]
    RetrievalFailed(String),

    #[error("failed to store value: {0}")]
    StorageFailed(String),

    #[error("failed to delete value: {0}")]
    DeletionFailed(String),

    #[error("storage backend not available: {0}")]
    NotAvailable(String),
}
