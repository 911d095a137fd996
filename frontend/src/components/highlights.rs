//! Highlights section - the static three-card feature grid.

use leptos::*;

/// Fixed feature catalog rendered below the hero.
const HIGHLIGHTS: [(&str, &str); 3] = [
    (
        "Orbital Retreats",
        "Multi-day stays aboard next-gen stations with panoramic Earth views.",
    ),
    (
        "Lunar Flybys",
        "Witness the Moon up close on curated, once-in-a-lifetime journeys.",
    ),
    (
        "Zero-G Suites",
        "Private cabins engineered for comfort in microgravity.",
    ),
];

#[component]
pub fn Highlights() -> impl IntoView {
    view! {
        <section class="highlights">
            <For
                each=move || HIGHLIGHTS
                key=|(title, _)| *title
                children=move |(title, desc)| {
                    view! {
                        <div class="highlight-card">
                            <h3>{title}</h3>
                            <p>{desc}</p>
                        </div>
                    }
                }
            />
        </section>
    }
}
