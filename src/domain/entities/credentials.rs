//! Login and registration form data.

use std::fmt;

use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::domain::errors::ApiError;

fn require(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::validation(field))
    } else {
        Ok(())
    }
}

/// Email and password exchanged for a session token.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Credentials with the email trimmed; the password is kept as typed.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    /// Trimmed email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Password exactly as entered.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Presence check on email and password.
    ///
    /// # Errors
    /// Returns `ApiError::Validation` naming the first missing field.
    pub fn validate(&self) -> Result<(), ApiError> {
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// New account data, sent as the registration body.
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct Registration {
    email: String,
    password: String,
    username: String,
    surname: String,
    phone: String,
}

impl Registration {
    /// Registration without a phone number; text fields other than the password are trimmed.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        username: impl Into<String>,
        surname: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
            username: username.into().trim().to_string(),
            surname: surname.into().trim().to_string(),
            phone: String::new(),
        }
    }

    /// Sets the optional phone number, trimmed.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into().trim().to_string();
        self
    }

    /// Trimmed email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Presence check on every field except the phone number.
    ///
    /// # Errors
    /// Returns `ApiError::Validation` naming the first missing field.
    pub fn validate(&self) -> Result<(), ApiError> {
        require("email", &self.email)?;
        require("password", &self.password)?;
        require("username", &self.username)?;
        require("surname", &self.surname)
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("surname", &self.surname)
            .finish_non_exhaustive()
    }
}
