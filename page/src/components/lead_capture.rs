//! Waitlist form.
//!
//! The form has no `action`, no `method` and no submit handler. Native
//! `type="email"` + `required` validation blocks malformed input; valid input
//! goes nowhere because no waitlist backend exists.

use leptos::prelude::*;

use super::Icon;
use crate::styles::{EMAIL_INPUT, FINE_PRINT, MUTED, SECTION_TITLE, SUBMIT_BUTTON};
use crate::types::{IconKind, LeadCaptureContent, SectionKind};

/// Email input and submit button.
#[component]
pub fn LeadCapture(id: Option<String>, content: LeadCaptureContent) -> impl IntoView {
    let LeadCaptureContent {
        heading,
        body,
        placeholder,
        submit_label,
        submit_test_id,
        disclaimer,
    } = content;

    view! {
        <section id=id data-section=SectionKind::LeadCapture.as_str() class="py-16">
            <div class="mx-auto max-w-3xl px-6 text-center">
                <h2 class=SECTION_TITLE>{heading}</h2>
                <p class=format!("mt-3 {MUTED}")>{body}</p>
                <form class="mx-auto mt-6 flex max-w-xl flex-col items-center gap-3 sm:flex-row">
                    <div class="relative w-full">
                        <Icon
                            kind=IconKind::Mail
                            class="pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 h-4 w-4 text-slate-400"
                        />
                        <input
                            type="email"
                            name="email"
                            required=true
                            autocomplete="email"
                            placeholder=placeholder
                            class=EMAIL_INPUT
                        />
                    </div>
                    <button type="submit" data-testid=submit_test_id class=SUBMIT_BUTTON>
                        {submit_label}
                    </button>
                </form>
                <p class=format!("mt-2 {FINE_PRINT}")>{disclaimer}</p>
            </div>
        </section>
    }
}
