//! Plain-text rendering of command results.

use std::fmt::Write;

use color_eyre::eyre::Report;

use crate::application::dto::{AuthOutcome, SessionStatus};
use crate::application::services::DashboardEntry;
use crate::application::use_cases::BoardError;
use crate::domain::entities::{Label, LabelKind, UserProfile};
use crate::domain::errors::ApiError;

/// Renders one category as a titled list of `id  name` rows.
#[must_use]
pub fn labels(kind: LabelKind, labels: &[Label]) -> String {
    let mut out = format!("{} ({})\n", kind.title(), labels.len());
    if labels.is_empty() {
        out.push_str("  no entries\n");
        return out;
    }

    let width = labels.iter().map(|l| l.id().len()).max().unwrap_or(0);
    for label in labels {
        let _ = writeln!(out, "  {:<width$}  {}", label.id(), label.name());
    }
    out
}

/// Renders the profile card; a missing phone shows as `-`.
#[must_use]
pub fn profile(user: &UserProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", user.display_name());
    let _ = writeln!(out, "  name:    {}", user.name());
    let _ = writeln!(out, "  surname: {}", user.surname());
    let _ = writeln!(out, "  email:   {}", user.email());
    let _ = writeln!(out, "  phone:   {}", user.phone_number().unwrap_or("-"));
    out
}

/// Renders the session line.
#[must_use]
pub fn session(status: &SessionStatus) -> String {
    match status {
        SessionStatus::LoggedOut => "Not logged in\n".to_string(),
        SessionStatus::LoggedIn {
            token_preview,
            user: Some(user),
        } => format!(
            "Logged in as {} <{}> (token {token_preview})\n",
            user.display_name(),
            user.email()
        ),
        SessionStatus::LoggedIn {
            token_preview,
            user: None,
        } => format!("Logged in (token {token_preview}, not verified)\n"),
    }
}

/// Renders the login or registration result.
#[must_use]
pub fn auth_outcome(outcome: &AuthOutcome) -> String {
    if outcome.token_persisted {
        format!("Successful {}\n", outcome.mode)
    } else {
        format!(
            "Successful {}, but the session could not be saved\n",
            outcome.mode
        )
    }
}

/// Renders the expiring items table, soonest first.
#[must_use]
pub fn dashboard(entries: &[DashboardEntry], window_days: i64) -> String {
    if entries.is_empty() {
        return format!("Nothing expires in the next {window_days} days\n");
    }

    let mut out = format!("Expiring within {window_days} days\n");
    let width = entries
        .iter()
        .map(|e| e.item.name.chars().count())
        .max()
        .unwrap_or(0);
    for entry in entries {
        let when = match entry.days_left {
            d if d < 0 => format!("expired {} days ago", -d),
            0 => "expires today".to_string(),
            1 => "expires tomorrow".to_string(),
            d => format!("in {d} days"),
        };
        let _ = writeln!(
            out,
            "  [{:<8}] {:<width$}  {}  {when}",
            entry.alert.label(),
            entry.item.name,
            entry.item.expiry_date
        );
    }
    out
}

/// One-line message for a failed command.
///
/// API failures show the server message, or a generic one for bodies the
/// client could not read.
#[must_use]
pub fn error(report: &Report) -> String {
    if let Some(e) = report.downcast_ref::<ApiError>() {
        return e.user_message();
    }
    if let Some(e) = report.downcast_ref::<BoardError>() {
        return match e {
            BoardError::Load { kind, source } => {
                format!("Could not load {}: {}", kind.title(), source.user_message())
            }
            BoardError::Api(source) => source.user_message(),
            BoardError::Unregistered(_) => e.to_string(),
        };
    }
    report.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::AuthMode;
    use crate::domain::entities::{ExpiringItem, ExpiryAlert};
    use chrono::NaiveDate;

    #[test]
    fn test_labels_aligns_ids() {
        let out = labels(
            LabelKind::Locations,
            &[Label::new("a1", "Fridge"), Label::new("b22", "Pantry")],
        );

        assert_eq!(out, "Locations (2)\n  a1   Fridge\n  b22  Pantry\n");
    }

    #[test]
    fn test_empty_labels() {
        assert_eq!(
            labels(LabelKind::Cookbooks, &[]),
            "Cookbooks (0)\n  no entries\n"
        );
    }

    #[test]
    fn test_session_variants() {
        assert_eq!(session(&SessionStatus::LoggedOut), "Not logged in\n");

        let status = SessionStatus::LoggedIn {
            token_preview: "abcd...wxyz".to_string(),
            user: Some(UserProfile::new("u1", "Giulia", "Rossi", "g@example.com")),
        };
        assert_eq!(
            session(&status),
            "Logged in as Giulia Rossi <g@example.com> (token abcd...wxyz)\n"
        );
    }

    #[test]
    fn test_auth_outcome_reports_unsaved_session() {
        let out = auth_outcome(&AuthOutcome::new(AuthMode::Login, false));

        assert!(out.contains("could not be saved"));
    }

    #[test]
    fn test_dashboard_rows() {
        let expiry = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
        let entries = [DashboardEntry {
            item: ExpiringItem::new("1", "Milk", expiry),
            days_left: -2,
            alert: ExpiryAlert::Critical,
        }];

        let out = dashboard(&entries, 7);

        assert_eq!(
            out,
            "Expiring within 7 days\n  [critical] Milk  2024-03-08  expired 2 days ago\n"
        );
    }

    #[test]
    fn test_error_hides_decode_details() {
        let report = Report::new(ApiError::decode("expected value at line 1 column 1"));

        assert_eq!(error(&report), "Something went wrong");
    }

    #[test]
    fn test_error_shows_server_message() {
        let report = Report::new(BoardError::Api(ApiError::http(
            409,
            Some("Name already taken".to_string()),
        )));

        assert_eq!(error(&report), "Name already taken");
    }

    #[test]
    fn test_error_names_failed_category() {
        let report = Report::new(BoardError::Load {
            kind: LabelKind::Warehouses,
            source: ApiError::http(500, None),
        });

        assert_eq!(error(&report), "Could not load Warehouses: Something went wrong");
    }

    #[test]
    fn test_error_keeps_other_messages() {
        let report = color_eyre::eyre::eyre!("no items file");

        assert_eq!(error(&report), "no items file");
    }

    #[test]
    fn test_empty_dashboard() {
        assert_eq!(dashboard(&[], 3), "Nothing expires in the next 3 days\n");
    }
}
