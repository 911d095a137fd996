//! REST API types for frontend integration.
//!
//! The request body matches the landing page's form verbatim; the
//! acknowledgement is small because the page does not parse it.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::models::WaitlistEntry;

/// Body of `POST /api/waitlist` - the form's field values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistRequest {
    /// Full name (required)
    pub name: String,
    /// Email address (required)
    pub email: String,
    /// Mission interest - catalog label or empty
    #[serde(default)]
    pub mission: String,
    /// Optional free-text message
    #[serde(default)]
    pub message: String,
    /// Contact consent
    #[serde(default = "default_consent")]
    pub consent: bool,
}

fn default_consent() -> bool {
    true
}

/// Acknowledgement returned after a successful registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistAck {
    /// Unique entry identifier
    pub id: Uuid,
    /// 1-based waitlist position
    pub position: usize,
    /// Human-readable confirmation
    pub message: String,
}

impl WaitlistAck {
    /// Build the acknowledgement for a stored entry.
    pub fn new(entry: &WaitlistEntry, position: usize) -> Self {
        Self {
            id: entry.id,
            position,
            message: format!("Welcome aboard, {}!", entry.name.as_str()),
        }
    }
}

/// Create an error response body.
pub fn error_response(error: &str) -> Value {
    json!({
        "error": error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        // Exactly what the frontend serializes
        let json = r#"{
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "mission": "Lunar Flyby",
            "message": "",
            "consent": true
        }"#;

        let request: WaitlistRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Ada Lovelace");
        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.mission, "Lunar Flyby");
        assert_eq!(request.message, "");
        assert!(request.consent);
    }

    #[test]
    fn test_request_optional_fields_default() {
        let json = r#"{"name": "Ada Lovelace", "email": "ada@example.com"}"#;

        let request: WaitlistRequest = serde_json::from_str(json).unwrap();
        assert!(request.mission.is_empty());
        assert!(request.message.is_empty());
        assert!(request.consent);
    }

    #[test]
    fn test_error_response_shape() {
        let body = error_response("Validation error: Name must not be empty");
        assert_eq!(body["error"], "Validation error: Name must not be empty");
    }
}
