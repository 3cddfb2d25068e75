use leptos::prelude::*;

use super::Icon;
use crate::styles::{CONTAINER, MUTED, SECTION_TITLE};
use crate::types::{IconKind, SectionKind, SocialProofContent};

/// Company pitch, assurances and a customer quote.
#[component]
pub fn SocialProof(id: Option<String>, content: SocialProofContent) -> impl IntoView {
    let SocialProofContent {
        heading,
        body,
        assurances,
        spotlight,
    } = content;

    view! {
        <section id=id data-section=SectionKind::SocialProof.as_str() class="py-16">
            <div class=CONTAINER>
                <div class="grid items-center gap-8 md:grid-cols-3">
                    <div class="md:col-span-2">
                        <h2 class=SECTION_TITLE>{heading}</h2>
                        <p class=format!("mt-3 max-w-2xl {MUTED}")>{body}</p>
                        <ul class="mt-6 grid gap-3 text-sm text-slate-700 dark:text-slate-200 md:grid-cols-2">
                            {assurances.into_iter().map(|line| view! {
                                <li class="flex items-center gap-2">
                                    <Icon kind=IconKind::Check class="h-4 w-4" />
                                    " "
                                    {line}
                                </li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <figure class="rounded-3xl border p-6 text-sm dark:border-slate-800">
                        <p class="font-semibold">{spotlight.label}</p>
                        <blockquote class=format!("mt-3 border-l-2 pl-4 {MUTED}")>
                            {spotlight.quote}
                        </blockquote>
                        <figcaption class="mt-2 text-xs text-slate-500">{spotlight.attribution}</figcaption>
                    </figure>
                </div>
            </div>
        </section>
    }
}
