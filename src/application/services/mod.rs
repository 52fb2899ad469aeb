/// Home dashboard selection.
pub mod expiry_dashboard;

pub use expiry_dashboard::{DashboardEntry, ExpiryDashboard};
