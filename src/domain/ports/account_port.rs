//! Account port definition.

use async_trait::async_trait;

use crate::domain::entities::{AuthToken, Credentials, Registration, UserProfile};
use crate::domain::errors::ApiError;

/// Port for account operations on the pantry API.
#[async_trait]
pub trait AccountPort: Send + Sync {
    /// Exchanges credentials for a session token.
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError>;

    /// Creates an account and returns its session token.
    async fn register(&self, registration: &Registration) -> Result<AuthToken, ApiError>;

    /// Fetches the profile of the logged-in account.
    async fn current_user(&self) -> Result<UserProfile, ApiError>;

    /// Saves the edited profile.
    async fn update_user(&self, profile: &UserProfile) -> Result<(), ApiError>;
}
