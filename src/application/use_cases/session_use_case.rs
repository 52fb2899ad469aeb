//! Session resolution at start-up.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::SessionStatus;
use crate::domain::errors::ApiError;
use crate::domain::ports::{AccountPort, TokenStoragePort};

/// Decides whether the app starts logged in.
pub struct ResolveSessionUseCase {
    account_port: Arc<dyn AccountPort>,
    storage_port: Arc<dyn TokenStoragePort>,
}

impl ResolveSessionUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(
        account_port: Arc<dyn AccountPort>,
        storage_port: Arc<dyn TokenStoragePort>,
    ) -> Self {
        Self {
            account_port,
            storage_port,
        }
    }

    /// Reads the stored token; with `verify`, also asks the server who it belongs to.
    ///
    /// A storage failure counts as logged out. A rejected token is cleared by
    /// the HTTP client and reported as logged out too.
    ///
    /// # Errors
    /// Returns any verification error other than an expired session.
    pub async fn execute(&self, verify: bool) -> Result<SessionStatus, ApiError> {
        debug!("Checking token store for a session");
        let token = match self.storage_port.get_token().await {
            Ok(Some(token)) => token,
            Ok(None) => {
                debug!("No stored session");
                return Ok(SessionStatus::LoggedOut);
            }
            Err(e) => {
                warn!(error = %e, "Failed to read token store, continuing logged out");
                return Ok(SessionStatus::LoggedOut);
            }
        };

        let token_preview = token.masked();

        if !verify {
            info!("Using stored session");
            return Ok(SessionStatus::LoggedIn {
                token_preview,
                user: None,
            });
        }

        match self.account_port.current_user().await {
            Ok(user) => {
                info!(user_id = %user.id(), "Stored session is valid");
                Ok(SessionStatus::LoggedIn {
                    token_preview,
                    user: Some(user),
                })
            }
            Err(ApiError::AuthExpired) => {
                info!("Stored session expired");
                Ok(SessionStatus::LoggedOut)
            }
            Err(e) => Err(e),
        }
    }
}
