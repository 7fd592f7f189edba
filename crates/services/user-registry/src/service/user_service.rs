//! User registry - Handles the lifecycle of user records.

use tracing::{debug, info, warn};

use domain::{DomainResult, NewUser, UserId, UserRecord};

use crate::config::{UserRegistryConfig, DEFAULT_REPORT_TITLE};
use crate::repository::{UserRepository, UserStore};
use crate::service::UserReport;

/// User service trait for dependency injection.
///
/// Operations run synchronously and assume a single caller. Wrap the
/// implementation in a mutex before sharing it between threads.
pub trait UserService: Send {
    /// Validate and store a new active user
    fn create_user(&mut self, new_user: NewUser) -> DomainResult<UserRecord>;

    /// Get a copy of the user, if present
    fn get_user_by_id(&self, id: UserId) -> Option<UserRecord>;

    /// Deactivate a non-admin active user; `false` when nothing changed
    fn deactivate_user(&mut self, id: UserId) -> bool;

    /// Render every user, ordered by ID
    fn generate_user_report(&self) -> String;

    /// Drop all users and restart identifiers (test isolation)
    fn clear(&mut self);
}

/// Concrete implementation of UserService using a repository.
pub struct UserRegistry {
    repo: Box<dyn UserRepository>,
    report_title: String,
}

impl UserRegistry {
    /// Create an empty registry backed by an in-memory store
    pub fn new() -> Self {
        Self::with_repository(Box::new(UserStore::new()))
    }

    /// Create a registry over an existing repository
    pub fn with_repository(repo: Box<dyn UserRepository>) -> Self {
        Self {
            repo,
            report_title: DEFAULT_REPORT_TITLE.to_string(),
        }
    }

    /// Create an empty in-memory registry using configured settings
    pub fn from_config(config: &UserRegistryConfig) -> Self {
        Self::new().with_report_title(config.report_title.clone())
    }

    pub fn with_report_title(mut self, title: impl Into<String>) -> Self {
        self.report_title = title.into();
        self
    }

    /// Number of stored users
    pub fn user_count(&self) -> usize {
        self.repo.count()
    }
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UserService for UserRegistry {
    fn create_user(&mut self, new_user: NewUser) -> DomainResult<UserRecord> {
        if let Err(err) = new_user.validate() {
            warn!(name = %new_user.name, age = new_user.age, error = %err, "Rejected user");
            return Err(err);
        }

        let user = self.repo.insert(new_user);
        info!(id = user.id, is_admin = user.is_admin, "Created user");
        Ok(user)
    }

    fn get_user_by_id(&self, id: UserId) -> Option<UserRecord> {
        let user = self.repo.find_by_id(id);
        debug!(id, found = user.is_some(), "Looked up user");
        user
    }

    fn deactivate_user(&mut self, id: UserId) -> bool {
        let Some(mut user) = self.repo.find_by_id(id) else {
            debug!(id, "Deactivation skipped: user not found");
            return false;
        };

        if !user.deactivate() {
            warn!(
                id,
                is_admin = user.is_admin,
                status = %user.status,
                "Deactivation refused"
            );
            return false;
        }

        let updated = self.repo.update(user);
        if updated {
            info!(id, "Deactivated user");
        }
        updated
    }

    fn generate_user_report(&self) -> String {
        let users = self.repo.list();
        debug!(count = users.len(), "Generating user report");
        UserReport::new(&self.report_title, &users).to_string()
    }

    fn clear(&mut self) {
        self.repo.clear();
        info!("Cleared user registry");
    }
}
