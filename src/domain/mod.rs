//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;

pub use entities::{AuthToken, Label, LabelKind, UserProfile};
pub use errors::{ApiError, StorageError};
pub use ports::{AccountPort, ConfirmPort, ResourcePort, TokenStoragePort};
