//! Domain-level errors.
//!
//! These errors represent business rule violations. Not-found and refused
//! deactivations are ordinary return values, not errors.

use thiserror::Error;

use crate::constants::{EMPTY_NAME_MESSAGE, UNDERAGE_MESSAGE};

/// Input rejected while creating a user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The user is younger than `MIN_USER_AGE`
    #[error("{}", UNDERAGE_MESSAGE)]
    Underage { age: u32 },

    /// The name is empty or whitespace only
    #[error("{}", EMPTY_NAME_MESSAGE)]
    EmptyName,
}

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DomainError {
    /// Create an underage validation error
    pub fn underage(age: u32) -> Self {
        DomainError::Validation(ValidationError::Underage { age })
    }

    /// Create a blank-name validation error
    pub fn empty_name() -> Self {
        DomainError::Validation(ValidationError::EmptyName)
    }

    /// Check if this is the underage rejection
    pub fn is_underage(&self) -> bool {
        matches!(self, DomainError::Validation(ValidationError::Underage { .. }))
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
