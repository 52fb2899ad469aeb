//! Token storage adapters.

mod file_storage;
#[cfg(feature = "keyring")]
mod keyring_storage;
mod memory_storage;

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ports::TokenStoragePort;
use crate::infrastructure::config::TokenBackend;

pub use file_storage::{FileTokenStorage, STORE_FILE_NAME};
#[cfg(feature = "keyring")]
pub use keyring_storage::KeyringTokenStorage;
pub use memory_storage::MemoryTokenStorage;

/// Builds the configured token store; the file store lives in `config_dir`.
#[must_use]
pub fn build_token_storage(backend: TokenBackend, config_dir: &Path) -> Arc<dyn TokenStoragePort> {
    debug!(%backend, "Selecting token storage backend");
    match backend {
        #[cfg(feature = "keyring")]
        TokenBackend::Keyring => Arc::new(KeyringTokenStorage::new()),
        #[cfg(not(feature = "keyring"))]
        TokenBackend::Keyring => {
            warn!("Keyring support not compiled in, using store file");
            Arc::new(FileTokenStorage::in_dir(config_dir))
        }
        TokenBackend::File => Arc::new(FileTokenStorage::in_dir(config_dir)),
        TokenBackend::Memory => {
            warn!("Token kept in memory only, it will be lost on exit");
            Arc::new(MemoryTokenStorage::new())
        }
    }
}
