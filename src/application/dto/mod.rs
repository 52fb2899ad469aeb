//! Data transfer objects for the application layer.

mod auth_dto;
mod label_dto;

pub use auth_dto::{AuthMode, AuthOutcome, SessionStatus};
pub use label_dto::RemoveOutcome;
