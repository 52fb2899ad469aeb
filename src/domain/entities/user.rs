//! Account profile entity.

use serde::{Deserialize, Serialize};

use crate::domain::serde_utils;

/// Profile of the logged-in account as served by `/users/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id", default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    surname: String,
    #[serde(default)]
    email: String,
    #[serde(with = "serde_utils::phone_number", default)]
    phone_number: Option<String>,
    #[serde(default)]
    profile_image: Option<String>,
}

impl UserProfile {
    /// Profile without phone number or image.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
            phone_number: None,
            profile_image: None,
        }
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone_number(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = Some(phone.into());
        self
    }

    /// Server identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// First name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last name.
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Trimmed email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Phone number, when set.
    #[must_use]
    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    /// Image URL, when the server has one.
    #[must_use]
    pub fn profile_image(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }

    /// Full name for display.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (self.name.trim(), self.surname.trim()) {
            ("", "") => self.email.clone(),
            (name, "") => name.to_string(),
            ("", surname) => surname.to_string(),
            (name, surname) => format!("{name} {surname}"),
        }
    }

    /// Applies the non-empty fields of `changes`.
    pub fn apply(&mut self, changes: ProfileChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(surname) = changes.surname {
            self.surname = surname;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(phone) = changes.phone_number {
            self.phone_number = (!phone.trim().is_empty()).then_some(phone);
        }
    }
}

/// Edited profile fields; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    /// First name.
    pub name: Option<String>,
    /// Last name.
    pub surname: Option<String>,
    /// Email; blank is rejected on save.
    pub email: Option<String>,
    /// Phone number; empty clears it.
    pub phone_number: Option<String>,
}

impl ProfileChanges {
    /// True when no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.surname.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_me_response() {
        let json = r#"{
            "_id": "65f0c1",
            "name": "Giulia",
            "surname": "Rossi",
            "email": "giulia@example.com",
            "phoneNumber": 3331234567,
            "profileImage": null,
            "createdAt": "2025-04-01T10:00:00Z"
        }"#;

        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.id(), "65f0c1");
        assert_eq!(user.display_name(), "Giulia Rossi");
        assert_eq!(user.phone_number(), Some("3331234567"));
        assert_eq!(user.profile_image(), None);
    }

    #[test]
    fn test_serialize_uses_api_field_names() {
        let user = UserProfile::new("1", "Luca", "Bianchi", "luca@example.com")
            .with_phone_number("3470000000");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["_id"], "1");
        assert_eq!(json["phoneNumber"], 3_470_000_000_u64);
        assert!(json.get("phone_number").is_none());
    }

    #[test]
    fn test_apply_changes() {
        let mut user = UserProfile::new("1", "Luca", "Bianchi", "luca@example.com");
        user.apply(ProfileChanges {
            surname: Some("Verdi".to_string()),
            phone_number: Some(String::new()),
            ..ProfileChanges::default()
        });

        assert_eq!(user.name(), "Luca");
        assert_eq!(user.surname(), "Verdi");
        assert_eq!(user.phone_number(), None);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserProfile::new("1", "", "", "anon@example.com");
        assert_eq!(user.display_name(), "anon@example.com");
    }
}
