//! Presentation layer: command dispatch and text output.

/// Command runner.
pub mod app;
/// Text rendering.
pub mod render;

pub use app::App;
