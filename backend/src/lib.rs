//! # Cosmos - Waitlist API for the Cosmos Voyages landing page
//!
//! The server side of the landing page's single wire contract: it
//! accepts waitlist submissions, validates them, and keeps them in
//! process memory.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  POST body  │────▶│   Models    │────▶│    Store    │
//! │  (page JSON)│     │ (parse/     │     │ (in-memory, │
//! │             │     │  validate)  │     │  dedup)     │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! #[tokio::main]
//! async fn main() {
//!     cosmos::start_server("0.0.0.0", 8000, None).await.unwrap();
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Domain models (GuestName, GuestEmail, WaitlistEntry)
//! - [`store`] - In-memory entry store
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod models;

// Storage
pub mod store;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ValidationError,
    WaitlistError,
    ValidationResult,
    WaitlistResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    GuestName,
    GuestEmail,
    MissionInterest,
    WaitlistEntry,
};

// =============================================================================
// Re-exports - Store
// =============================================================================

pub use store::WaitlistStore;

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::types::{
    WaitlistRequest,
    WaitlistAck,
    error_response,
};

pub use api::server::{app, start_server};
