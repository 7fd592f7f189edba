//! User domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_USER_AGE, ROLE_ADMIN, ROLE_USER, STATUS_ACTIVE, STATUS_INACTIVE};
use crate::error::{DomainError, DomainResult};

/// Registry-assigned user identifier
pub type UserId = u64;

/// User status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => STATUS_ACTIVE,
            UserStatus::Inactive => STATUS_INACTIVE,
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub is_admin: bool,
    pub status: UserStatus,
}

impl UserRecord {
    /// Check if user is an administrator
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Check if user is active
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Role label shown in reports
    pub fn role_label(&self) -> &'static str {
        if self.is_admin {
            ROLE_ADMIN
        } else {
            ROLE_USER
        }
    }

    /// Move the user to `Inactive`.
    ///
    /// Returns `false` without touching the record when the user is an
    /// administrator or is already inactive.
    pub fn deactivate(&mut self) -> bool {
        if self.is_admin || !self.is_active() {
            return false;
        }
        self.status = UserStatus::Inactive;
        true
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    /// User display name
    pub name: String,
    /// User email address (not checked)
    pub email: String,
    /// Age in years, at least `MIN_USER_AGE`
    pub age: u32,
    /// Administrators can never be deactivated
    #[serde(default)]
    pub is_admin: bool,
}

impl NewUser {
    /// Regular (non-admin) user
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
            is_admin: false,
        }
    }

    /// Mark the user as an administrator
    pub fn admin(self) -> Self {
        self.with_admin(true)
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Check the creation rules. Age is checked first.
    pub fn validate(&self) -> DomainResult<()> {
        if self.age < MIN_USER_AGE {
            return Err(DomainError::underage(self.age));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::empty_name());
        }
        Ok(())
    }

    /// Build the stored record for an assigned identifier
    pub fn into_record(self, id: UserId) -> UserRecord {
        UserRecord {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
            is_admin: self.is_admin,
            status: UserStatus::Active,
        }
    }
}
