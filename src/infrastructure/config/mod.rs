//! Application configuration.

/// Settings file schema and defaults.
pub mod app_config;
/// Command-line parsing.
pub mod args;
/// Config file loading and saving.
pub mod storage;

pub use app_config::{AppConfig, DashboardConfig, LogLevel, ProfileConfig, TokenBackend};
pub use args::{CliArgs, Command, HomeArgs, LabelsCommand, LoginArgs, ProfileCommand, RegisterArgs};
pub use storage::{ConfigError, StorageManager};
