//! Authenticated HTTP client for the pantry API.

use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::{Client, Method, Response, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::dto::ErrorResponse;
use crate::domain::entities::{AuthToken, Credentials};
use crate::domain::errors::{ApiError, NetworkErrorKind};
use crate::domain::ports::TokenStoragePort;

/// Base URL of the hosted API.
pub const DEFAULT_API_BASE: &str = "https://gestionale-latest.onrender.com";
/// Upper bound on every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Credential attached to an outgoing request.
enum RequestAuth<'a> {
    /// Bearer token read from storage, if one is stored.
    Stored,
    /// HTTP basic credentials, used for the login exchange.
    Basic(&'a Credentials),
}

/// HTTP client that attaches the stored session token to every request.
///
/// A `401` response deletes the stored token before the error is returned;
/// routing the user back to login is left to the caller.
pub struct ApiClient {
    client: Client,
    base_url: String,
    storage: Arc<dyn TokenStoragePort>,
}

impl ApiClient {
    /// Creates client for the hosted API with the default timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(storage: Arc<dyn TokenStoragePort>) -> Result<Self, ApiError> {
        Self::with_config(DEFAULT_API_BASE, DEFAULT_TIMEOUT, storage)
    }

    /// Creates client with custom base URL and timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_config(
        base_url: impl Into<String>,
        timeout: Duration,
        storage: Arc<dyn TokenStoragePort>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            storage,
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn stored_token(&self) -> Option<AuthToken> {
        match self.storage.get_token().await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Failed to read stored token, sending request without it");
                None
            }
        }
    }

    /// Sends a request and returns the successful response.
    ///
    /// # Errors
    /// Returns `Network` on transport failure or timeout, `AuthExpired` on
    /// `401`, `Http` on any other non-2xx status.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response, ApiError> {
        self.execute(method, path, body, RequestAuth::Stored).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        auth: RequestAuth<'_>,
    ) -> Result<Response, ApiError> {
        let url = self.url(path);
        debug!(%method, %url, "Sending API request");

        let mut builder = self.client.request(method.clone(), &url);

        let uses_basic_auth = match auth {
            RequestAuth::Stored => {
                if let Some(token) = self.stored_token().await {
                    builder = builder.header(header::AUTHORIZATION, token.bearer_header());
                }
                false
            }
            RequestAuth::Basic(credentials) => {
                builder = builder.header(header::AUTHORIZATION, basic_header(credentials));
                true
            }
        };

        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, %url, "API request failed");
            map_transport_error(&e)
        })?;

        let status = response.status();
        debug!(%method, %url, status = status.as_u16(), "API response received");

        if status.is_success() {
            return Ok(response);
        }

        Err(self
            .handle_error_response(status, response, uses_basic_auth)
            .await)
    }

    async fn handle_error_response(
        &self,
        status: StatusCode,
        response: Response,
        uses_basic_auth: bool,
    ) -> ApiError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(error) => error.message,
            Err(_) => None,
        };

        if status == StatusCode::UNAUTHORIZED {
            info!("Session rejected by server, clearing stored token");
            if let Err(e) = self.storage.delete_token().await {
                warn!(error = %e, "Failed to clear stored token");
            }
            if !uses_basic_auth {
                return ApiError::AuthExpired;
            }
        }

        ApiError::http(status.as_u16(), message)
    }

    /// `GET` a path and decode the JSON body.
    ///
    /// # Errors
    /// Propagates request errors; returns `Decode` on a malformed body.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.request(Method::GET, path, None).await?;
        decode(response).await
    }

    /// Sends a JSON body and decodes the JSON reply.
    ///
    /// # Errors
    /// Propagates request errors; returns `Decode` on a malformed body.
    pub async fn send_json<B, R>(&self, method: Method, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.request(method, path, Some(encode(body)?)).await?;
        decode(response).await
    }

    /// Sends a JSON body and ignores the reply.
    ///
    /// # Errors
    /// Propagates request errors.
    pub async fn send_json_unit<B>(&self, method: Method, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.request(method, path, Some(encode(body)?)).await?;
        Ok(())
    }

    /// `DELETE` a path.
    ///
    /// # Errors
    /// Propagates request errors.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// `POST` an empty JSON object with basic credentials instead of the stored token.
    ///
    /// # Errors
    /// Propagates request errors; a `401` here is reported as `Http`.
    pub async fn post_with_basic_auth<R: DeserializeOwned>(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> Result<R, ApiError> {
        let response = self
            .execute(
                Method::POST,
                path,
                Some(serde_json::json!({})),
                RequestAuth::Basic(credentials),
            )
            .await?;
        decode(response).await
    }
}

fn basic_header(credentials: &Credentials) -> String {
    let encoded = STANDARD.encode(format!("{}:{}", credentials.email(), credentials.password()));
    format!("Basic {encoded}")
}

fn map_transport_error(e: &reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::timeout()
    } else if e.is_connect() {
        ApiError::network(NetworkErrorKind::Connect, "failed to connect to server")
    } else {
        ApiError::network(NetworkErrorKind::Other, e.to_string())
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::unexpected(format!("failed to encode request body: {e}")))
}

async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
    let bytes = response.bytes().await.map_err(|e| map_transport_error(&e))?;
    serde_json::from_slice(&bytes).map_err(|e| {
        warn!(error = %e, "Failed to parse API response");
        ApiError::decode(e.to_string())
    })
}
