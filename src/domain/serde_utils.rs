//! Serde utilities for loosely typed API fields.

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

/// Phone numbers the server may send as a JSON number, a string or `null`.
///
/// Digit-only values are written back as numbers, anything else as a string.
pub mod phone_number {
    use super::{Deserializer, Serializer, Visitor, de, fmt};

    /// Serializes an optional phone number.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value.as_deref() {
            None => serializer.serialize_none(),
            Some(v) => match v.parse::<u64>() {
                Ok(n) if !v.starts_with('0') || v == "0" => serializer.serialize_u64(n),
                _ => serializer.serialize_str(v),
            },
        }
    }

    /// Deserializes an optional phone number from a string, number or null.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither a string, an integer nor null.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PhoneVisitor;

        impl<'de> Visitor<'de> for PhoneVisitor {
            type Value = Option<String>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a phone number as string or integer")
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(self)
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Some(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Some(value.to_string()))
            }

            #[allow(clippy::cast_possible_truncation)]
            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value.fract() == 0.0 && value >= 0.0 {
                    Ok(Some(format!("{}", value as u64)))
                } else {
                    Err(de::Error::custom("phone number must be an integer"))
                }
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let trimmed = value.trim();
                Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
            }
        }

        deserializer.deserialize_option(PhoneVisitor)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Contact {
        #[serde(with = "super::phone_number", default)]
        phone: Option<String>,
    }

    #[test]
    fn test_phone_from_number_and_string() {
        let c: Contact = serde_json::from_str(r#"{"phone":3331234567}"#).unwrap();
        assert_eq!(c.phone.as_deref(), Some("3331234567"));

        let c: Contact = serde_json::from_str(r#"{"phone":"+39 333 1234567"}"#).unwrap();
        assert_eq!(c.phone.as_deref(), Some("+39 333 1234567"));

        let c: Contact = serde_json::from_str(r#"{"phone":null}"#).unwrap();
        assert_eq!(c.phone, None);

        let c: Contact = serde_json::from_str("{}").unwrap();
        assert_eq!(c.phone, None);
    }

    #[test]
    fn test_phone_serialization() {
        let numeric = Contact {
            phone: Some("3331234567".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&numeric).unwrap(),
            r#"{"phone":3331234567}"#
        );

        let leading_zero = Contact {
            phone: Some("0521123456".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&leading_zero).unwrap(),
            r#"{"phone":"0521123456"}"#
        );
    }
}
