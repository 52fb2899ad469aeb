//! Plain key-value file storage.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::entities::AuthToken;
use crate::domain::errors::StorageError;
use crate::domain::ports::{TOKEN_KEY, TokenStoragePort};

/// Name of the key-value file inside the config directory.
pub const STORE_FILE_NAME: &str = "store.toml";

type Entries = BTreeMap<String, String>;

/// String key-value store persisted as a TOML table.
///
/// Writes replace the whole file atomically. Values are stored unencrypted.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    /// Store backed by the file at `path`; created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store file inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(STORE_FILE_NAME))
    }

    /// Path of the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Entries, StorageError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(StorageError::RetrievalFailed(e.to_string())),
        };

        toml::from_str(&content).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Store file is malformed");
            StorageError::RetrievalFailed(format!("malformed store file: {e}"))
        })
    }

    async fn save(&self, entries: Entries) -> Result<(), StorageError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, &entries))
            .await
            .map_err(|e| StorageError::StorageFailed(e.to_string()))?
    }

    /// Reads the value under `key`.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load().await?.remove(key))
    }

    /// Writes `value` under `key`.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or written.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.save(entries).await
    }

    /// Removes `key`, keeping the other entries.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or written.
    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.load().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.save(entries).await
    }
}

fn write_atomically(path: &Path, entries: &Entries) -> Result<(), StorageError> {
    let content =
        toml::to_string(entries).map_err(|e| StorageError::StorageFailed(e.to_string()))?;

    let parent = path
        .parent()
        .ok_or_else(|| StorageError::AccessFailed("invalid store path".to_string()))?;
    std::fs::create_dir_all(parent).map_err(|e| StorageError::AccessFailed(e.to_string()))?;

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)
        .map_err(|e| StorageError::StorageFailed(e.to_string()))?;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| StorageError::StorageFailed(e.to_string()))?;
    temp_file
        .persist(path)
        .map_err(|e| StorageError::StorageFailed(e.error.to_string()))?;

    Ok(())
}

#[async_trait]
impl TokenStoragePort for FileTokenStorage {
    async fn get_token(&self) -> Result<Option<AuthToken>, StorageError> {
        debug!(path = %self.path.display(), "Retrieving token from store file");
        Ok(self.get(TOKEN_KEY).await?.and_then(AuthToken::new))
    }

    async fn store_token(&self, token: &AuthToken) -> Result<(), StorageError> {
        debug!(path = %self.path.display(), "Storing token in store file");
        self.set(TOKEN_KEY, token.as_str()).await
    }

    async fn delete_token(&self) -> Result<(), StorageError> {
        debug!(path = %self.path.display(), "Deleting token from store file");
        self.remove(TOKEN_KEY).await
    }
}
