use leptos::prelude::*;

use super::Icon;
use crate::styles::{CHECK_ICON, CHECK_ITEM, CONTAINER, MUTED, SECTION_TITLE};
use crate::types::{AgentCard, FeatureItem, FeaturesContent, IconKind, SectionKind};

/// Feature list beside the popular agents panel.
#[component]
pub fn Features(id: Option<String>, content: FeaturesContent) -> impl IntoView {
    let FeaturesContent {
        heading,
        body,
        items,
        cards_heading,
        cards,
    } = content;

    view! {
        <section id=id data-section=SectionKind::Features.as_str() class="py-16">
            <div class=CONTAINER>
                <div class="grid items-start gap-10 md:grid-cols-2">
                    <div>
                        <h2 class=SECTION_TITLE>{heading}</h2>
                        <p class=format!("mt-3 max-w-xl {MUTED}")>{body}</p>
                        <ul class="mt-6 space-y-4">
                            {items.into_iter().map(|item| view! { <FeatureRow item=item /> }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div class="rounded-3xl border p-6 shadow-sm dark:border-slate-800">
                        <h3 class="text-lg font-semibold">{cards_heading}</h3>
                        <div class="mt-4 grid gap-4 md:grid-cols-2">
                            {cards.into_iter().map(|card| view! { <AgentCardView card=card /> }).collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureRow(item: FeatureItem) -> impl IntoView {
    view! {
        <li class="flex items-start gap-3">
            <div class="mt-1 rounded-lg border p-2 dark:border-slate-700">
                <Icon kind=item.icon />
            </div>
            <div>
                <p class="font-semibold">{item.title}</p>
                <p class=format!("text-sm {MUTED}")>{item.description}</p>
            </div>
        </li>
    }
}

#[component]
fn AgentCardView(card: AgentCard) -> impl IntoView {
    view! {
        <div class="rounded-2xl border p-5 dark:border-slate-800">
            <p class="font-semibold">{card.title}</p>
            <ul class=format!("mt-3 space-y-2 text-sm {MUTED}")>
                {card.bullets.into_iter().map(|bullet| view! {
                    <li class=CHECK_ITEM>
                        <Icon kind=IconKind::Check class=CHECK_ICON />
                        " "
                        {bullet}
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
