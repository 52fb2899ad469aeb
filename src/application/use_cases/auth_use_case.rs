//! Login, registration and logout.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{AuthMode, AuthOutcome};
use crate::domain::entities::{AuthToken, Credentials, Registration};
use crate::domain::errors::ApiError;
use crate::domain::ports::{AccountPort, ConfirmPort, TokenStoragePort};

/// Handles the authentication screen workflow.
#[derive(Clone)]
pub struct AuthUseCase {
    account_port: Arc<dyn AccountPort>,
    storage_port: Arc<dyn TokenStoragePort>,
}

impl AuthUseCase {
    /// Creates new auth use case.
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

    /// Logs in with email and password.
    ///
    /// # Errors
    /// Returns `Validation` when a field is blank (no request is sent),
    /// otherwise the error reported by the server.
    pub async fn login(&self, credentials: Credentials) -> Result<AuthOutcome, ApiError> {
        credentials.validate().inspect_err(|e| {
            warn!(error = %e, "Login form incomplete");
        })?;

        debug!(email = %credentials.email(), "Attempting login");

        let token = self.account_port.login(&credentials).await.map_err(|e| {
            warn!(error = %e, "Login failed");
            e
        })?;

        info!(email = %credentials.email(), "Successfully authenticated");
        Ok(self.persist(token, AuthMode::Login).await)
    }

    /// Registers a new account and logs it in.
    ///
    /// # Errors
    /// Returns `Validation` when a required field is blank (no request is
    /// sent), otherwise the error reported by the server.
    pub async fn register(&self, registration: Registration) -> Result<AuthOutcome, ApiError> {
        registration.validate().inspect_err(|e| {
            warn!(error = %e, "Registration form incomplete");
        })?;

        debug!(email = %registration.email(), "Attempting registration");

        let token = self
            .account_port
            .register(&registration)
            .await
            .map_err(|e| {
                warn!(error = %e, "Registration failed");
                e
            })?;

        info!(email = %registration.email(), "Account registered");
        Ok(self.persist(token, AuthMode::Register).await)
    }

    async fn persist(&self, token: AuthToken, mode: AuthMode) -> AuthOutcome {
        let token_persisted = match self.storage_port.store_token(&token).await {
            Ok(()) => {
                info!(%mode, "Token persisted");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to persist token");
                false
            }
        };

        AuthOutcome::new(mode, token_persisted)
    }

    /// Asks for confirmation, then deletes the stored token.
    ///
    /// Returns whether the user confirmed.
    ///
    /// # Errors
    /// Returns error if deletion fails.
    pub async fn logout(&self, confirm: &dyn ConfirmPort) -> Result<bool, ApiError> {
        if !confirm.confirm("Confirm Logout", "Are you sure you want to log out?") {
            debug!("Logout cancelled");
            return Ok(false);
        }

        debug!("Deleting stored token");
        match self.storage_port.delete_token().await {
            Ok(()) => {
                info!("Logged out");
                Ok(true)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to delete stored token");
                Err(e.into())
            }
        }
    }
}
