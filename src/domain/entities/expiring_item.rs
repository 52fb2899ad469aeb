//! Inventory items with an expiry date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Urgency of an expiring item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryAlert {
    /// Expires within a day, or already expired.
    Critical,
    /// Expires within three days.
    Warning,
    /// Expires later.
    Notice,
}

impl ExpiryAlert {
    const CRITICAL_DAYS: i64 = 1;
    const WARNING_DAYS: i64 = 3;

    /// Classifies the remaining days.
    #[must_use]
    pub const fn from_days_left(days_left: i64) -> Self {
        if days_left <= Self::CRITICAL_DAYS {
            Self::Critical
        } else if days_left <= Self::WARNING_DAYS {
            Self::Warning
        } else {
            Self::Notice
        }
    }

    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Notice => "notice",
        }
    }
}

/// Item tracked on the home dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiringItem {
    /// Server identifier; `_id` is accepted on input.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Calendar date, `YYYY-MM-DD` on the wire.
    pub expiry_date: NaiveDate,
}

impl ExpiringItem {
    /// Item expiring on `expiry_date`.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, expiry_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            expiry_date,
        }
    }

    /// Days from `today` until expiry; negative once expired.
    #[must_use]
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }
}
