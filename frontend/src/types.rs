//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Form Types** - The waitlist submission and its field-change events
//! - **Status Types** - The three-way submission status (idle/loading/settled)
//! - **Error Types** - Frontend error handling
//!
//! Both the submission and the status are replaced wholesale on each
//! transition rather than mutated in place, which keeps every transition
//! a plain value-to-value function that unit tests can exercise directly.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{GENERIC_ERROR_MESSAGE, RESPONSE_ERROR_MESSAGE};

// =============================================================================
// Form Types
// =============================================================================

/// The waitlist form's field values.
///
/// Serialized verbatim as the request body of `POST /api/waitlist`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaitlistSubmission {
    /// Full name (required, non-empty)
    pub name: String,
    /// Email address (required, `type="email"` input)
    pub email: String,
    /// Mission interest - one of the fixed catalog, or empty for none
    pub mission: String,
    /// Optional free-text message
    pub message: String,
    /// Whether the guest agrees to be contacted
    pub consent: bool,
}

impl Default for WaitlistSubmission {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            mission: String::new(),
            message: String::new(),
            consent: true,
        }
    }
}

impl WaitlistSubmission {
    /// Replace exactly one named field, preserving the rest.
    pub fn apply(self, change: FieldChange) -> Self {
        match change {
            FieldChange::Name(name) => Self { name, ..self },
            FieldChange::Email(email) => Self { email, ..self },
            FieldChange::Mission(mission) => Self { mission, ..self },
            FieldChange::Message(message) => Self { message, ..self },
            FieldChange::Consent(consent) => Self { consent, ..self },
        }
    }
}

/// A single field-change event from the form.
///
/// Each variant names the field it replaces and carries the new value.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldChange {
    /// New full name
    Name(String),
    /// New email address
    Email(String),
    /// New mission selection
    Mission(String),
    /// New message text
    Message(String),
    /// New consent checkbox state
    Consent(bool),
}

// =============================================================================
// Status Types
// =============================================================================

/// The submission status shown under the form.
///
/// Invariant: at most one of `success`/`error` is `Some`, and `loading`
/// is true only while a request is in flight. The constructors are the
/// only way transitions happen, so the invariant holds by construction.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SubmissionStatus {
    /// A request is in flight
    pub loading: bool,
    /// Confirmation message after a successful submission
    pub success: Option<String>,
    /// Error message after a failed submission
    pub error: Option<String>,
}

impl SubmissionStatus {
    /// Initial state: nothing in flight, nothing to show.
    pub fn idle() -> Self {
        Self::default()
    }

    /// A request has been issued and has not settled yet.
    pub fn pending() -> Self {
        Self {
            loading: true,
            success: None,
            error: None,
        }
    }

    /// The request settled successfully.
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            loading: false,
            success: Some(message.into()),
            error: None,
        }
    }

    /// The request settled with a failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            loading: false,
            success: None,
            error: Some(message.into()),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Failures of the waitlist submission call.
///
/// Exactly two kinds: the request never completed (`Transport`), or it
/// completed with a non-success HTTP status (`Response`). Both collapse
/// into a single message for display - the user sees no distinction.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitError {
    /// Network-level failure while attempting the call.
    Transport(String),
    /// A received response whose status signals failure.
    Response(u16),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Transport(msg) if msg.is_empty() => {
                write!(f, "{}", GENERIC_ERROR_MESSAGE)
            }
            SubmitError::Transport(msg) => write!(f, "{}", msg),
            SubmitError::Response(_) => write!(f, "{}", RESPONSE_ERROR_MESSAGE),
        }
    }
}

impl std::error::Error for SubmitError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SUCCESS_MESSAGE;

    #[test]
    fn test_default_submission_is_empty_with_consent() {
        let form = WaitlistSubmission::default();
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.mission.is_empty());
        assert!(form.message.is_empty());
        assert!(form.consent);
    }

    #[test]
    fn test_apply_replaces_exactly_one_field() {
        let form = WaitlistSubmission::default()
            .apply(FieldChange::Name("Ada Lovelace".into()))
            .apply(FieldChange::Email("ada@example.com".into()));

        assert_eq!(form.name, "Ada Lovelace");
        assert_eq!(form.email, "ada@example.com");
        assert!(form.mission.is_empty());
        assert!(form.consent);
    }

    #[test]
    fn test_apply_keeps_latest_value_per_field() {
        let form = WaitlistSubmission::default()
            .apply(FieldChange::Mission("Orbital Retreat".into()))
            .apply(FieldChange::Consent(false))
            .apply(FieldChange::Mission("Lunar Flyby".into()));

        assert_eq!(form.mission, "Lunar Flyby");
        assert!(!form.consent);
    }

    #[test]
    fn test_submission_serializes_the_wire_body() {
        let form = WaitlistSubmission {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            mission: "Lunar Flyby".into(),
            message: String::new(),
            consent: true,
        };

        let json = serde_json::to_value(&form).unwrap();
        let body = json.as_object().unwrap();
        assert_eq!(body.len(), 5);
        assert_eq!(body["name"], "Ada Lovelace");
        assert_eq!(body["email"], "ada@example.com");
        assert_eq!(body["mission"], "Lunar Flyby");
        assert_eq!(body["message"], "");
        assert_eq!(body["consent"], true);
    }

    #[test]
    fn test_status_constructors_keep_the_invariant() {
        let idle = SubmissionStatus::idle();
        assert!(!idle.loading);
        assert!(idle.success.is_none() && idle.error.is_none());

        let pending = SubmissionStatus::pending();
        assert!(pending.loading);
        assert!(pending.success.is_none() && pending.error.is_none());

        let ok = SubmissionStatus::succeeded(SUCCESS_MESSAGE);
        assert!(!ok.loading);
        assert_eq!(ok.success.as_deref(), Some(SUCCESS_MESSAGE));
        assert!(ok.error.is_none());

        let failed = SubmissionStatus::failed("Failed to join waitlist");
        assert!(!failed.loading);
        assert!(failed.success.is_none());
        assert_eq!(failed.error.as_deref(), Some("Failed to join waitlist"));
    }

    #[test]
    fn test_response_error_displays_fixed_message() {
        let err = SubmitError::Response(503);
        assert_eq!(err.to_string(), "Failed to join waitlist");
    }

    #[test]
    fn test_transport_error_displays_description_or_fallback() {
        let err = SubmitError::Transport("NetworkError when attempting to fetch resource".into());
        assert_eq!(
            err.to_string(),
            "NetworkError when attempting to fetch resource"
        );

        let blank = SubmitError::Transport(String::new());
        assert_eq!(blank.to_string(), "Something went wrong");
    }
}
