//! Backend communication services.
//!
//! # Services
//!
//! - [`waitlist`] - Waitlist submission to the cosmos backend

pub mod waitlist;

pub use waitlist::*;
