//! UI Components for the Cosmos Voyages landing page.
//!
//! This module contains all Leptos components organized by section:
//!
//! # Layout Components
//! - [`Hero`] - Full-bleed 3D scene with title and call to action
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`Highlights`] - Static three-card feature grid
//! - [`WaitlistSection`] - Waitlist sign-up form

mod footer;
mod hero;
mod highlights;
mod waitlist;

pub use footer::*;
pub use hero::*;
pub use highlights::*;
pub use waitlist::*;
