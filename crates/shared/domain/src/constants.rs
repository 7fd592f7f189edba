//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Identity
// =============================================================================

/// Identifier handed to the first record of a fresh (or cleared) registry
pub const FIRST_USER_ID: u64 = 1;

// =============================================================================
// Validation
// =============================================================================

/// Minimum age (inclusive) a user must have to be registered
pub const MIN_USER_AGE: u32 = 18;

/// Message carried by the underage validation error
pub const UNDERAGE_MESSAGE: &str = "O usuário deve ser maior de idade.";

/// Message carried by the blank-name validation error
pub const EMPTY_NAME_MESSAGE: &str = "O nome do usuário não pode ser vazio.";

// =============================================================================
// Status & Roles
// =============================================================================

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_INACTIVE: &str = "inactive";

/// Label used for administrators in reports
pub const ROLE_ADMIN: &str = "admin";

/// Label used for regular users in reports
pub const ROLE_USER: &str = "user";
