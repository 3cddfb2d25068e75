use leptos::prelude::*;

use super::Icon;
use crate::styles::{CARD, CONTAINER, MUTED};
use crate::types::{ProblemContent, SectionKind};

/// Pain points as a three-column card grid.
#[component]
pub fn Problem(id: Option<String>, content: ProblemContent) -> impl IntoView {
    view! {
        <section
            id=id
            data-section=SectionKind::Problem.as_str()
            class="border-y bg-white py-14 dark:border-slate-800 dark:bg-slate-950"
        >
            <div class=CONTAINER>
                <div class="mx-auto max-w-3xl text-center">
                    <h2 class="text-2xl font-bold md:text-3xl">{content.heading}</h2>
                    <p class=format!("mt-3 {MUTED}")>{content.body}</p>
                </div>
                <div class="mt-10 grid gap-6 md:grid-cols-3">
                    {content.items.into_iter().map(|item| view! {
                        <div class=CARD>
                            <div class="mb-3 inline-flex items-center gap-2 rounded-xl border px-3 py-1 text-xs dark:border-slate-700">
                                <Icon kind=item.icon />
                                " "
                                <span class="font-medium">{item.title}</span>
                            </div>
                            <p class=MUTED>{item.description}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
