//! Labels board DTOs.

/// Result of a confirmed-or-declined removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Server deleted the label and the local list dropped it.
    Removed,
    /// User declined; nothing was sent.
    Declined,
}
