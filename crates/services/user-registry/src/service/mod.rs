//! Service layer - registry use cases and report formatting.

mod report;
mod user_service;

pub use report::UserReport;
pub use user_service::{UserRegistry, UserService};
