//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Stateless domain services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{AuthMode, AuthOutcome, RemoveOutcome, SessionStatus};
pub use services::{DashboardEntry, ExpiryDashboard};
pub use use_cases::{
    AuthUseCase, BoardError, LabelBoard, LabelRegistry, ProfileUseCase, ResolveSessionUseCase,
};
