//! Pricing tiers.
//!
//! Each tier renders as a block marked `data-tier="<name>"`, which is what
//! tests and the smoke checks count.

use leptos::prelude::*;

use super::{CtaButton, Icon};
use crate::styles::{BAND, CHECK_ICON, CHECK_ITEM, CONTAINER, MUTED, SECTION_TITLE, tier_class};
use crate::types::{IconKind, PricingContent, PricingTier, SectionKind};

/// Heading plus one card per tier.
#[component]
pub fn Pricing(id: Option<String>, content: PricingContent) -> impl IntoView {
    view! {
        <section id=id data-section=SectionKind::Pricing.as_str() class=BAND>
            <div class=CONTAINER>
                <h2 class=format!("text-center {SECTION_TITLE}")>{content.heading}</h2>
                <p class=format!("mx-auto mt-3 max-w-2xl text-center {MUTED}")>{content.subheading}</p>
                <div class="mx-auto mt-10 grid max-w-5xl gap-6 md:grid-cols-3">
                    {content.tiers.into_iter().map(|tier| view! { <TierCard tier=tier /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TierCard(tier: PricingTier) -> impl IntoView {
    let class = tier_class(tier.highlighted);
    let marker = tier.name.clone();

    view! {
        <div class=class data-tier=marker>
            <p class="text-sm font-semibold">{tier.name}</p>
            <p class="mt-2 text-3xl font-extrabold">{tier.price}</p>
            <p class="text-sm text-slate-500">{tier.tagline}</p>
            <ul class="mt-4 space-y-2 text-sm">
                {tier.features.into_iter().map(|feature| view! {
                    <li class=CHECK_ITEM>
                        <Icon kind=IconKind::Check class=CHECK_ICON />
                        " "
                        {feature}
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
            <div class="mt-6">
                <CtaButton cta=tier.cta />
            </div>
        </div>
    }
}
