mod account_port;
mod confirm_port;
mod resource_port;
mod token_storage_port;

pub use account_port::AccountPort;
pub use confirm_port::ConfirmPort;
pub use resource_port::ResourcePort;
pub use token_storage_port::{TOKEN_KEY, TokenStoragePort};
