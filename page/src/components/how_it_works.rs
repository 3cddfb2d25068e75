use leptos::prelude::*;

use crate::styles::{BAND, CARD, CONTAINER, MUTED, SECTION_TITLE};
use crate::types::{HowItWorksContent, SectionKind};

/// Numbered steps.
#[component]
pub fn HowItWorks(id: Option<String>, content: HowItWorksContent) -> impl IntoView {
    view! {
        <section id=id data-section=SectionKind::HowItWorks.as_str() class=BAND>
            <div class=CONTAINER>
                <h2 class=format!("text-center {SECTION_TITLE}")>{content.heading}</h2>
                <ol class="mx-auto mt-10 grid max-w-5xl gap-6 md:grid-cols-4">
                    {content.steps.into_iter().map(|step| view! {
                        <li class=format!("{CARD} text-center") data-step=step.step.to_string()>
                            <div class="mx-auto mb-3 flex h-8 w-8 items-center justify-center rounded-full border text-sm font-bold dark:border-slate-700">
                                {step.step}
                            </div>
                            <p class="font-semibold">{step.title}</p>
                            <p class=format!("text-sm {MUTED}")>{step.description}</p>
                        </li>
                    }).collect::<Vec<_>>()}
                </ol>
            </div>
        </section>
    }
}
