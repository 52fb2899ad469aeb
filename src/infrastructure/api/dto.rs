use serde::Deserialize;

/// Body of `/users/login` and `/users/register` responses.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// Session token, absent when the server refuses to issue one.
    #[serde(default)]
    pub token: Option<String>,
}

/// Error payload returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    #[serde(default)]
    pub message: Option<String>,
}
