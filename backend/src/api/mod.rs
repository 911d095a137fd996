//! HTTP API for the landing page.
//!
//! - [`server`] - Router, CORS and the waitlist handler
//! - [`types`] - Request/response bodies

pub mod server;
pub mod types;
