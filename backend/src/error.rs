//! Error types for the waitlist service.
//!
//! This module defines the service's error hierarchy:
//!
//! - [`ValidationError`] - Field-level validation failures
//! - [`WaitlistError`] - Top-level waitlist operation errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Validation Errors
// =============================================================================

/// Field-level validation failures for an incoming submission.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Name is empty (or whitespace only).
    #[error("Name must not be empty")]
    EmptyName,

    /// Name exceeds the stored length bound.
    #[error("Name is too long ({0} characters, max 128)")]
    NameTooLong(usize),

    /// Email is not syntactically plausible.
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    /// Mission is not in the fixed catalog.
    #[error("Unknown mission: '{0}'")]
    UnknownMission(String),
}

// =============================================================================
// Waitlist Errors (top-level)
// =============================================================================

/// Top-level errors for waitlist operations.
///
/// This is the error type returned by the store and mapped to HTTP
/// statuses in the API handler.
#[derive(Debug, Error)]
pub enum WaitlistError {
    /// A field failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The email is already registered.
    #[error("Email is already on the waitlist: {0}")]
    DuplicateEmail(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for waitlist operations.
pub type WaitlistResult<T> = Result<T, WaitlistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // ValidationError -> WaitlistError
        let validation_err = ValidationError::EmptyName;
        let waitlist_err: WaitlistError = validation_err.into();
        assert!(waitlist_err.to_string().contains("empty"));

        let validation_err = ValidationError::UnknownMission("Mars Base".into());
        let waitlist_err: WaitlistError = validation_err.into();
        assert!(waitlist_err.to_string().contains("Mars Base"));
    }

    #[test]
    fn test_duplicate_email_format() {
        let err = WaitlistError::DuplicateEmail("ada@example.com".into());
        let msg = err.to_string();
        assert!(msg.contains("already on the waitlist"));
        assert!(msg.contains("ada@example.com"));
    }
}
