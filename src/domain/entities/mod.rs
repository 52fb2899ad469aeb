//! Domain entity definitions.

mod credentials;
mod expiring_item;
mod label;
mod token;
mod user;

pub use credentials::{Credentials, Registration};
pub use expiring_item::{ExpiringItem, ExpiryAlert};
pub use label::{Label, LabelCollection, LabelForm, LabelKind};
pub use token::AuthToken;
pub use user::{ProfileChanges, UserProfile};
