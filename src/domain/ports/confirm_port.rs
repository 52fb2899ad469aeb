//! Two-choice confirmation prompt port.

/// Port for asking the user to confirm a destructive action.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmPort: Send + Sync {
    /// Returns `true` only when the user picked the affirmative choice.
    fn confirm(&self, title: &str, message: &str) -> bool;
}
