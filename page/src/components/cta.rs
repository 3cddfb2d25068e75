//! Buttons and pills shared by several sections.

use leptos::prelude::*;

use super::Icon;
use crate::styles::{BADGE, CTA_PRIMARY};
use crate::types::{CallToAction, IconKind};

/// Call-to-action anchor with a trailing arrow.
///
/// The `data-testid` attribute is emitted only when the CTA carries a marker.
#[component]
pub fn CtaButton(
    cta: CallToAction,
    /// Class list; primary styling unless overridden
    #[prop(default = CTA_PRIMARY)]
    class: &'static str,
) -> impl IntoView {
    view! {
        <a href=cta.href class=class data-testid=cta.test_id>
            {cta.label}
            " "
            <Icon kind=IconKind::ArrowRight class="h-4 w-4" />
        </a>
    }
}

/// Small rounded label.
#[component]
pub fn Badge(text: String) -> impl IntoView {
    view! { <span class=BADGE>{text}</span> }
}
