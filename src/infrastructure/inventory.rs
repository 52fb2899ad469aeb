//! Expiring items read from a local JSON file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::entities::ExpiringItem;

/// Items file failures.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid items list.
    #[error("invalid items file {path}: {source}")]
    Parse {
        /// File that was read.
        path: PathBuf,
        /// Position and cause of the JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Accepts a bare array or an `{ "items": [...] }` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum ItemsFile {
    List(Vec<ExpiringItem>),
    Envelope { items: Vec<ExpiringItem> },
}

/// Loads the items listed in `path`.
///
/// # Errors
/// Returns `InventoryError` if the file cannot be read or parsed.
pub async fn load_items(path: &Path) -> Result<Vec<ExpiringItem>, InventoryError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| InventoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let items = match serde_json::from_str::<ItemsFile>(&content) {
        Ok(ItemsFile::List(items) | ItemsFile::Envelope { items }) => items,
        Err(source) => {
            return Err(InventoryError::Parse {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    debug!(path = %path.display(), count = items.len(), "Items loaded");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_bare_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(
            &path,
            r#"[{"_id": "1", "name": "Milk", "expiryDate": "2024-03-08"}]"#,
        )
        .unwrap();

        let items = load_items(&path).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[0].name, "Milk");
    }

    #[tokio::test]
    async fn test_load_envelope() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(
            &path,
            r#"{"items": [{"id": "7", "name": "Eggs", "expiryDate": "2024-03-11"}]}"#,
        )
        .unwrap();

        let items = load_items(&path).await.unwrap();

        assert_eq!(items[0].id, "7");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempdir().unwrap();

        let err = load_items(&dir.path().join("nope.json")).await.unwrap_err();

        assert!(matches!(err, InventoryError::Read { .. }));
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, "[{\"name\": 1}]").unwrap();

        let err = load_items(&path).await.unwrap_err();

        assert!(matches!(err, InventoryError::Parse { .. }));
    }
}
