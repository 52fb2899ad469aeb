//! Profile screen: fetch and edit the logged-in account.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::entities::{ProfileChanges, UserProfile};
use crate::domain::errors::ApiError;
use crate::domain::ports::AccountPort;

/// Loads and saves the user profile.
pub struct ProfileUseCase {
    account_port: Arc<dyn AccountPort>,
    retry_delay: Duration,
    max_attempts: u32,
}

impl ProfileUseCase {
    /// Creates new profile use case; `max_attempts` counts the first fetch.
    #[must_use]
    pub fn new(account_port: Arc<dyn AccountPort>, retry_delay: Duration, max_attempts: u32) -> Self {
        Self {
            account_port,
            retry_delay,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Fetches the profile, re-polling after a fixed delay on network or HTTP failures.
    ///
    /// # Errors
    /// Returns any other error (`AuthExpired` included) immediately, or the
    /// last error once attempts run out.
    pub async fn fetch(&self) -> Result<UserProfile, ApiError> {
        let mut attempt = 1;
        loop {
            match self.account_port.current_user().await {
                Ok(user) => {
                    debug!(user_id = %user.id(), attempt, "Profile fetched");
                    return Ok(user);
                }
                Err(e) if !e.is_retryable() || attempt >= self.max_attempts => {
                    warn!(error = %e, attempt, "Profile fetch failed");
                    return Err(e);
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        attempt,
                        delay_secs = self.retry_delay.as_secs_f32(),
                        "Profile fetch failed, retrying"
                    );
                    tokio::time::sleep(self.retry_delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Applies `changes` to `current` and saves the result.
    ///
    /// Returns the profile as sent.
    ///
    /// # Errors
    /// Returns `Validation` when name or email end up blank (no request is
    /// sent), otherwise the server error.
    pub async fn update(
        &self,
        current: &UserProfile,
        changes: ProfileChanges,
    ) -> Result<UserProfile, ApiError> {
        let mut profile = current.clone();
        profile.apply(changes);

        if profile.name().trim().is_empty() {
            return Err(ApiError::validation("name"));
        }
        if profile.email().trim().is_empty() {
            return Err(ApiError::validation("email"));
        }

        self.account_port.update_user(&profile).await.map_err(|e| {
            warn!(error = %e, "Profile update failed");
            e
        })?;

        info!(user_id = %profile.id(), "Profile updated");
        Ok(profile)
    }
}
