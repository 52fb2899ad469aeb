//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::infrastructure::api::{DEFAULT_API_BASE, DEFAULT_TIMEOUT};

/// Names used for the platform config directory.
pub(crate) const APP_NAME: &str = "dispensa";
pub(crate) const APP_QUALIFIER: &str = "it";
pub(crate) const APP_ORGANIZATION: &str = "gestionale";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Where the session token is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TokenBackend {
    /// Operating system keyring.
    Keyring,
    /// `store.toml` in the config directory.
    File,
    /// Process memory, lost on exit.
    Memory,
}

impl Default for TokenBackend {
    fn default() -> Self {
        if cfg!(feature = "keyring") {
            Self::Keyring
        } else {
            Self::File
        }
    }
}

impl std::fmt::Display for TokenBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyring => write!(f, "keyring"),
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Application configuration, read from `config.toml` and CLI arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Token storage backend.
    #[serde(default)]
    pub token_store: TokenBackend,

    /// Profile screen configuration.
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Home dashboard configuration.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Profile fetch configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileConfig {
    /// Delay before re-polling a failed profile fetch, in seconds.
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,

    /// Total fetch attempts, first one included.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl ProfileConfig {
    /// Retry delay as a duration.
    #[must_use]
    pub const fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            retry_delay_secs: default_retry_delay_secs(),
            max_attempts: default_max_attempts(),
        }
    }
}

/// Expiring items dashboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Items expiring within this many days are shown.
    #[serde(default = "default_expiry_window")]
    pub expiry_window_days: i64,

    /// Default items file.
    #[serde(default)]
    pub items_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            expiry_window_days: default_expiry_window(),
            items_path: None,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_BASE.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

const fn default_retry_delay_secs() -> u64 {
    10
}

const fn default_max_attempts() -> u32 {
    3
}

const fn default_expiry_window() -> i64 {
    7
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(api_url) = &args.api_url {
            self.api_url.clone_from(api_url);
        }
        if let Some(timeout) = args.timeout {
            self.request_timeout_secs = timeout;
        }
        if let Some(token_store) = args.token_store {
            self.token_store = token_store;
        }
    }

    /// Request timeout as a duration.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("dispensa.log"))
    }

    /// Returns effective config path.
    #[must_use]
    pub fn effective_config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Self::default_config_path)
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            api_url: default_api_url(),
            request_timeout_secs: default_timeout_secs(),
            token_store: TokenBackend::default(),
            profile: ProfileConfig::default(),
            dashboard: DashboardConfig::default(),
        }
    }
}
