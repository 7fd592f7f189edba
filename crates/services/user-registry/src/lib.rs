//! User Registry Library
//!
//! In-memory user registry: validated creation, sequential identifiers,
//! lookup, admin-protected deactivation, and plain-text reports.

pub mod config;
pub mod repository;
pub mod service;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::UserRegistryConfig;

pub use domain::{DomainError, NewUser, UserId, UserRecord, UserStatus, ValidationError};
pub use service::{UserRegistry, UserService};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.log_level`. Returns `false` when a subscriber
/// was already installed.
pub fn init_tracing(config: &UserRegistryConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(service = %config.service_name, "Tracing initialized");
    }
    installed
}
