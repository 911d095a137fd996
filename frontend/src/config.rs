//! Application configuration.
//!
//! Centralized configuration for the Cosmos Voyages frontend.
//! The backend URL is resolved once at build time; everything else
//! is fixed copy shared between components.

/// Backend API base URL.
///
/// Resolved at build time from `COSMOS_API_URL`, falling back to the
/// local development server.
pub const BACKEND_URL: &str = match option_env!("COSMOS_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Application name, used for the document title.
pub const APP_NAME: &str = "Cosmos Voyages";

/// Spline scene embedded in the hero section.
pub const HERO_SCENE_URL: &str = "https://prod.spline.design/er66D6jbuo0hIjmn/scene.splinecode";

/// Missions offered in the waitlist form's interest selector.
///
/// The empty placeholder option is rendered separately; an empty
/// mission string means "no preference".
pub const MISSIONS: [&str; 3] = ["Orbital Retreat", "Lunar Flyby", "Suborbital Sampler"];

/// Confirmation shown under the form after a successful submission.
pub const SUCCESS_MESSAGE: &str = "You're on the list! We'll be in touch soon.";

/// Error shown when the server answers with a non-success status.
pub const RESPONSE_ERROR_MESSAGE: &str = "Failed to join waitlist";

/// Fallback error when a transport failure carries no description.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";
