//! Waitlist sign-up form.
//!
//! Holds the page's only mutable state: the form's field values and the
//! submission status. Field edits replace one field at a time; submitting
//! issues a single POST and settles the status exactly once. On success
//! the form is reset; on failure the entered values are kept for retry.

use leptos::*;

use crate::config::{BACKEND_URL, MISSIONS, SUCCESS_MESSAGE};
use crate::services::join_waitlist;
use crate::types::{FieldChange, SubmissionStatus, WaitlistSubmission};

#[component]
pub fn WaitlistSection() -> impl IntoView {
    let (form, set_form) = create_signal(WaitlistSubmission::default());
    let (status, set_status) = create_signal(SubmissionStatus::idle());

    let change = move |field_change: FieldChange| {
        set_form.set(form.get_untracked().apply(field_change));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        // Only reached for a valid form: the browser enforces the
        // required name and email fields before firing submit.
        ev.prevent_default();
        set_status.set(SubmissionStatus::pending());

        let submission = form.get_untracked();
        spawn_local(async move {
            match join_waitlist(&submission, BACKEND_URL).await {
                Ok(()) => {
                    log::info!("Waitlist submission accepted");
                    set_form.set(WaitlistSubmission::default());
                    set_status.set(SubmissionStatus::succeeded(SUCCESS_MESSAGE));
                }
                Err(e) => {
                    log::error!("Waitlist submission failed: {}", e);
                    set_status.set(SubmissionStatus::failed(e.to_string()));
                }
            }
        });
    };

    view! {
        <section id="waitlist" class="waitlist-section">
            <div class="waitlist-card">
                <h2>"Join the waitlist"</h2>
                <p class="waitlist-subtitle">
                    "Secure your place among the first civilians to journey beyond Earth."
                </p>

                <form on:submit=on_submit>
                    <div class="form-grid">
                        <div class="form-field">
                            <label for="name">"Full name"</label>
                            <input
                                type="text"
                                id="name"
                                required
                                placeholder="Ada Lovelace"
                                prop:value=move || form.get().name
                                on:input=move |ev| change(FieldChange::Name(event_target_value(&ev)))
                            />
                        </div>
                        <div class="form-field">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                required
                                placeholder="you@domain.com"
                                prop:value=move || form.get().email
                                on:input=move |ev| change(FieldChange::Email(event_target_value(&ev)))
                            />
                        </div>
                    </div>

                    <div class="form-field">
                        <label for="mission">"Mission interest"</label>
                        <select
                            id="mission"
                            prop:value=move || form.get().mission
                            on:change=move |ev| change(FieldChange::Mission(event_target_value(&ev)))
                        >
                            <option value="">"Select a mission"</option>
                            <For
                                each=move || MISSIONS
                                key=|mission| *mission
                                children=move |mission| {
                                    view! { <option value=mission>{mission}</option> }
                                }
                            />
                        </select>
                    </div>

                    <div class="form-field">
                        <label for="message">"Message (optional)"</label>
                        <textarea
                            id="message"
                            rows="4"
                            placeholder="Tell us what excites you most about space travel..."
                            prop:value=move || form.get().message
                            on:input=move |ev| change(FieldChange::Message(event_target_value(&ev)))
                        ></textarea>
                    </div>

                    <label class="consent-row">
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().consent
                            on:change=move |ev| change(FieldChange::Consent(event_target_checked(&ev)))
                        />
                        "I agree to be contacted about missions and availability."
                    </label>

                    <button
                        type="submit"
                        class="submit-button"
                        disabled=move || status.get().loading
                    >
                        {move || if status.get().loading { "Submitting..." } else { "Join waitlist" }}
                    </button>

                    <Show
                        when=move || status.get().success.is_some()
                        fallback=|| view! { }
                    >
                        <p class="form-success">
                            {move || status.get().success.unwrap_or_default()}
                        </p>
                    </Show>

                    <Show
                        when=move || status.get().error.is_some()
                        fallback=|| view! { }
                    >
                        <p class="form-error">
                            {move || status.get().error.unwrap_or_default()}
                        </p>
                    </Show>
                </form>
            </div>
        </section>
    }
}
