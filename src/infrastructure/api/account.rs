//! Account endpoints under `/users`.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, warn};

use super::client::ApiClient;
use super::dto::TokenResponse;
use crate::domain::entities::{AuthToken, Credentials, Registration, UserProfile};
use crate::domain::errors::ApiError;
use crate::domain::ports::AccountPort;

const LOGIN_PATH: &str = "/users/login";
const REGISTER_PATH: &str = "/users/register";
const ME_PATH: &str = "/users/me";
const UPDATE_PATH: &str = "/users/update";

/// Account adapter over the authenticated client.
pub struct HttpAccountClient {
    client: Arc<ApiClient>,
}

impl HttpAccountClient {
    /// Adapter sending account requests through `client`.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

fn extract_token(response: TokenResponse) -> Result<AuthToken, ApiError> {
    response.token.and_then(AuthToken::new).ok_or_else(|| {
        warn!("Token not received from server");
        ApiError::MissingToken
    })
}

#[async_trait]
impl AccountPort for HttpAccountClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        debug!(email = %credentials.email(), "Exchanging credentials for token");
        let response: TokenResponse = self
            .client
            .post_with_basic_auth(LOGIN_PATH, credentials)
            .await?;
        extract_token(response)
    }

    async fn register(&self, registration: &Registration) -> Result<AuthToken, ApiError> {
        debug!(email = %registration.email(), "Registering account");
        let response: TokenResponse = self
            .client
            .send_json(Method::POST, REGISTER_PATH, registration)
            .await?;
        extract_token(response)
    }

    async fn current_user(&self) -> Result<UserProfile, ApiError> {
        debug!("Fetching current user");
        self.client.get_json(ME_PATH).await
    }

    async fn update_user(&self, profile: &UserProfile) -> Result<(), ApiError> {
        debug!(user_id = %profile.id(), "Updating profile");
        self.client
            .send_json_unit(Method::PUT, UPDATE_PATH, profile)
            .await
    }
}
