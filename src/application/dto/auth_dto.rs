//! Authentication DTOs.

use crate::domain::entities::UserProfile;

/// How the session token was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Credential exchange on `/users/login`.
    Login,
    /// New account on `/users/register`.
    Register,
}

impl AuthMode {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "registration",
        }
    }
}

impl std::fmt::Display for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Result of a successful login or registration.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// Flow that produced the token.
    pub mode: AuthMode,
    /// Whether the token reached the token store.
    pub token_persisted: bool,
}

impl AuthOutcome {
    /// Creates new outcome.
    #[must_use]
    pub const fn new(mode: AuthMode, token_persisted: bool) -> Self {
        Self {
            mode,
            token_persisted,
        }
    }
}

/// Session state found at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// No usable token is stored.
    LoggedOut,
    /// A token is stored.
    LoggedIn {
        /// Masked token for display.
        token_preview: String,
        /// Profile, when the server accepted the token.
        user: Option<UserProfile>,
    },
}

impl SessionStatus {
    /// Returns whether a token is stored.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }
}
