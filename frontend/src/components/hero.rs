//! Hero section with the embedded 3D scene.
//!
//! The scene is the Spline viewer web component, whose script tag is
//! loaded by `index.html`. A gradient overlay keeps the copy readable
//! on top of it.

use leptos::*;

use crate::config::HERO_SCENE_URL;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-scene">
                <spline-viewer url=HERO_SCENE_URL></spline-viewer>
            </div>
            <div class="hero-overlay"></div>

            <div class="hero-content">
                <h1>"Cosmos Voyages"</h1>
                <p class="hero-tagline">
                    "Pioneering luxury expeditions across the cosmic frontier. "
                    "Be among the first to experience orbit retreats, lunar flybys, and beyond."
                </p>
                <a href="#waitlist" class="hero-cta">"Join the Waitlist"</a>
            </div>
        </section>
    }
}
