//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer>
            <div>"© " {year} " Cosmos Voyages. All rights reserved."</div>
        </footer>
    }
}
