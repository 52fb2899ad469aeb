//! Infrastructure layer with external service adapters.

/// Pantry REST API client.
pub mod api;
/// Application configuration.
pub mod config;
/// Local inventory files.
pub mod inventory;
/// Terminal prompts.
pub mod prompt;
/// Token storage adapters.
pub mod storage;

pub use api::{ApiClient, HttpAccountClient, RestResource};
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager, TokenBackend};
pub use inventory::{InventoryError, load_items};
pub use prompt::TerminalPrompt;
#[cfg(feature = "keyring")]
pub use storage::KeyringTokenStorage;
pub use storage::{FileTokenStorage, MemoryTokenStorage, build_token_storage};
