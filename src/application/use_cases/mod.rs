//! Use case implementations.

mod auth_use_case;
mod label_board;
mod profile_use_case;
mod session_use_case;

pub use auth_use_case::AuthUseCase;
pub use label_board::{BoardError, LabelBoard, LabelRegistry, LabelResource};
pub use profile_use_case::ProfileUseCase;
pub use session_use_case::ResolveSessionUseCase;
