//! Domain models for the waitlist service.
//!
//! Guest fields are parse-don't-validate newtypes: a [`GuestName`] or
//! [`GuestEmail`] can only be constructed through its `parse` function,
//! so a [`WaitlistEntry`] holds data that has already passed validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ValidationError, ValidationResult};

/// Maximum stored name length, in characters.
const MAX_NAME_LEN: usize = 128;

// =============================================================================
// Guest Newtypes
// =============================================================================

/// A validated guest name.
///
/// Non-empty after trimming, at most 128 characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestName(String);

impl GuestName {
    /// Parse a raw name, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let len = trimmed.chars().count();
        if len > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong(len));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The validated name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A validated email address.
///
/// Syntactic plausibility only: one `@` with a non-empty local part,
/// and a domain containing an interior dot. Anything stricter belongs
/// to a confirmation email, which this service does not send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestEmail(String);

impl GuestEmail {
    /// Parse a raw email address, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let trimmed = raw.trim();

        let invalid = || ValidationError::InvalidEmail(trimmed.to_string());

        let (local, domain) = trimmed.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(invalid());
        }
        // Domain needs an interior dot: "example.com" yes, ".com"/"example." no
        let has_interior_dot = domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1);
        if !has_interior_dot {
            return Err(invalid());
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The validated address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form, used for duplicate detection.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

// =============================================================================
// Mission Interest
// =============================================================================

/// The fixed mission catalog offered on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionInterest {
    OrbitalRetreat,
    LunarFlyby,
    SuborbitalSampler,
}

impl MissionInterest {
    /// Resolve a mission string from the form.
    ///
    /// An empty string means "no preference" and resolves to `None`;
    /// anything outside the catalog is rejected.
    pub fn parse(raw: &str) -> ValidationResult<Option<Self>> {
        match raw.trim() {
            "" => Ok(None),
            "Orbital Retreat" => Ok(Some(Self::OrbitalRetreat)),
            "Lunar Flyby" => Ok(Some(Self::LunarFlyby)),
            "Suborbital Sampler" => Ok(Some(Self::SuborbitalSampler)),
            other => Err(ValidationError::UnknownMission(other.to_string())),
        }
    }

    /// The catalog label, as shown on the page.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrbitalRetreat => "Orbital Retreat",
            Self::LunarFlyby => "Lunar Flyby",
            Self::SuborbitalSampler => "Suborbital Sampler",
        }
    }
}

// =============================================================================
// Waitlist Entry
// =============================================================================

/// A stored waitlist registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistEntry {
    /// Unique entry identifier
    pub id: Uuid,
    /// When the submission was received
    pub received_at: DateTime<Utc>,
    /// Validated guest name
    pub name: GuestName,
    /// Validated email address
    pub email: GuestEmail,
    /// Mission interest, if any
    pub mission: Option<MissionInterest>,
    /// Free-text message from the form
    pub message: String,
    /// Contact consent checkbox state
    pub consent: bool,
}

impl WaitlistEntry {
    /// Build a new entry from validated parts, stamping id and time.
    pub fn new(
        name: GuestName,
        email: GuestEmail,
        mission: Option<MissionInterest>,
        message: String,
        consent: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            name,
            email,
            mission,
            message,
            consent,
        }
    }
}
