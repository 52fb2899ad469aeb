use super::app_config::{LogLevel, TokenBackend};
use crate::domain::entities::LabelKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "dispensa",
    version,
    about = "Pantry management from the terminal",
    long_about = None
)]
/// Command-line arguments.
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// API base URL.
    #[arg(long, env = "DISPENSA_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Where to keep the session token.
    #[arg(long, value_enum, global = true)]
    pub token_store: Option<TokenBackend>,

    /// Answer yes to confirmation prompts.
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session token.
    Login(LoginArgs),
    /// Create an account and store the session token.
    Register(RegisterArgs),
    /// Forget the stored session token.
    Logout,
    /// Show whether a session is stored and who it belongs to.
    Status,
    /// Manage food groups, locations, warehouses and cookbooks.
    #[command(subcommand)]
    Labels(LabelsCommand),
    /// Show or edit the account profile.
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// List items expiring soon.
    Home(HomeArgs),
}

/// Log in and store the session token.
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email.
    #[arg(short, long)]
    pub email: String,

    /// Account password; prompted for when omitted.
    #[arg(long, env = "DISPENSA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Create an account and store the session token.
#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Account email.
    #[arg(short, long)]
    pub email: String,

    /// Account password; prompted for when omitted.
    #[arg(long, env = "DISPENSA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// First name.
    #[arg(long)]
    pub username: String,

    /// Last name.
    #[arg(long)]
    pub surname: String,

    /// Phone number.
    #[arg(long)]
    pub phone: Option<String>,
}

/// Manage food groups, locations, warehouses and cookbooks.
#[derive(Debug, Subcommand)]
pub enum LabelsCommand {
    /// List labels; all categories when none is given.
    List {
        /// Category to show.
        category: Option<LabelKind>,
    },
    /// Create a label.
    Add {
        /// Category.
        category: LabelKind,
        /// Label name.
        name: String,
    },
    /// Rename a label.
    Rename {
        /// Category.
        category: LabelKind,
        /// Label id.
        id: String,
        /// New name.
        name: String,
    },
    /// Delete a label after confirmation.
    Remove {
        /// Category.
        category: LabelKind,
        /// Label id.
        id: String,
    },
}

/// Show or edit the account profile.
#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Show the profile.
    Show,
    /// Change profile fields.
    Update {
        /// First name.
        #[arg(long)]
        name: Option<String>,
        /// Last name.
        #[arg(long)]
        surname: Option<String>,
        /// Email.
        #[arg(long)]
        email: Option<String>,
        /// Phone number; an empty value clears it.
        #[arg(long)]
        phone: Option<String>,
    },
}

/// List items expiring soon.
#[derive(Debug, Args)]
pub struct HomeArgs {
    /// JSON file with `[{ "id", "name", "expiryDate" }]` items.
    #[arg(long, value_name = "PATH")]
    pub items: Option<PathBuf>,

    /// Show items expiring within this many days.
    #[arg(long, value_name = "DAYS")]
    pub window: Option<i64>,
}
