use chrono::NaiveDate;

use crate::domain::entities::{ExpiringItem, ExpiryAlert};

/// Item on the home dashboard with its urgency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardEntry {
    /// Item as read from the inventory.
    pub item: ExpiringItem,
    /// Days until expiry; negative once expired.
    pub days_left: i64,
    /// Urgency bucket for `days_left`.
    pub alert: ExpiryAlert,
}

/// Selects the items expiring soon.
#[derive(Debug, Clone, Copy)]
pub struct ExpiryDashboard {
    window_days: i64,
}

impl ExpiryDashboard {
    /// Window used when none is configured.
    pub const DEFAULT_WINDOW_DAYS: i64 = 7;

    /// Dashboard showing items within `window_days` of expiry.
    #[must_use]
    pub const fn new(window_days: i64) -> Self {
        Self { window_days }
    }

    /// Items expiring within the window, soonest first. Expired items are kept.
    #[must_use]
    pub fn expiring(&self, items: &[ExpiringItem], today: NaiveDate) -> Vec<DashboardEntry> {
        let mut entries: Vec<DashboardEntry> = items
            .iter()
            .filter_map(|item| {
                let days_left = item.days_left(today);
                (days_left <= self.window_days).then(|| DashboardEntry {
                    item: item.clone(),
                    days_left,
                    alert: ExpiryAlert::from_days_left(days_left),
                })
            })
            .collect();

        entries.sort_by(|a, b| {
            a.days_left
                .cmp(&b.days_left)
                .then_with(|| a.item.name.cmp(&b.item.name))
        });
        entries
    }
}

impl Default for ExpiryDashboard {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn items() -> Vec<ExpiringItem> {
        vec![
            ExpiringItem::new("1", "Yogurt", date(2024, 3, 12)),
            ExpiringItem::new("2", "Rice", date(2024, 9, 1)),
            ExpiringItem::new("3", "Milk", date(2024, 3, 8)),
            ExpiringItem::new("4", "Eggs", date(2024, 3, 11)),
            ExpiringItem::new("5", "Bread", date(2024, 3, 17)),
        ]
    }

    #[test]
    fn test_expiring_filters_and_sorts() {
        let entries = ExpiryDashboard::default().expiring(&items(), date(2024, 3, 10));

        let names: Vec<_> = entries.iter().map(|e| e.item.name.as_str()).collect();
        assert_eq!(names, ["Milk", "Eggs", "Yogurt", "Bread"]);
    }

    #[test]
    fn test_expiring_assigns_alerts() {
        let entries = ExpiryDashboard::default().expiring(&items(), date(2024, 3, 10));

        let alerts: Vec<_> = entries.iter().map(|e| (e.days_left, e.alert)).collect();
        assert_eq!(
            alerts,
            [
                (-2, ExpiryAlert::Critical),
                (1, ExpiryAlert::Critical),
                (2, ExpiryAlert::Warning),
                (7, ExpiryAlert::Notice),
            ]
        );
    }

    #[test]
    fn test_narrow_window() {
        let entries = ExpiryDashboard::new(1).expiring(&items(), date(2024, 3, 10));

        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(
            ExpiryDashboard::default()
                .expiring(&[], date(2024, 3, 10))
                .is_empty()
        );
    }
}
