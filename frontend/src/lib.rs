//! Cosmos Voyages - Frontend Rust/Leptos Application
//!
//! A WebAssembly single-page site for a space-tourism company:
//! presentational sections plus one waitlist form posting to the
//! cosmos backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  LandingPage                                                 │
//! │  ├── Hero (Spline scene, title, CTA)                        │
//! │  ├── Highlights (static feature grid)                       │
//! │  └── WaitlistSection (form + submission status)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Backend URL, mission catalog, fixed copy
//! - [`types`] - Form, status and error types
//! - [`components`] - UI components (Hero, Highlights, Waitlist, Footer)
//! - [`services`] - Backend communication (waitlist submission)

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Form
    WaitlistSubmission, FieldChange,
    // Status
    SubmissionStatus,
    // Errors
    SubmitError,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Cosmos Voyages - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=config::APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=LandingPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn LandingPage() -> impl IntoView {
    view! {
        <Hero/>
        <Highlights/>
        <WaitlistSection/>
        <Footer/>
    }
}
