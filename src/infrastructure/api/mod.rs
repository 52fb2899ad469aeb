//! Pantry REST API client.

mod account;
mod client;
mod dto;
mod resource;
#[cfg(test)]
pub(crate) mod test_server;

pub use account::HttpAccountClient;
pub use client::{ApiClient, DEFAULT_API_BASE, DEFAULT_TIMEOUT};
pub use resource::RestResource;
