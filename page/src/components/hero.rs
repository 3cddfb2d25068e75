use leptos::prelude::*;

use super::{Badge, CtaButton, Icon};
use crate::styles::{CHECK_ICON, CHECK_ITEM, CTA_SECONDARY, FINE_PRINT};
use crate::types::{HeroContent, IconKind, Mockup, SectionKind};

/// Headline, badges, call to action pair and the product mockup.
#[component]
pub fn Hero(id: Option<String>, content: HeroContent) -> impl IntoView {
    let HeroContent {
        badges,
        headline,
        headline_accent,
        lede,
        primary,
        secondary,
        fine_print,
        mockup,
    } = content;

    view! {
        <section id=id data-section=SectionKind::Hero.as_str() class="relative overflow-hidden">
            <div class="pointer-events-none absolute -top-24 left-1/2 h-[32rem] w-[32rem] -translate-x-1/2 rounded-full bg-gradient-to-tr from-teal-200 to-emerald-200 opacity-60 blur-3xl dark:from-teal-900/40 dark:to-emerald-900/30"></div>
            <div class="mx-auto grid max-w-7xl items-center gap-10 px-6 pb-16 pt-14 md:grid-cols-2 md:pt-24">
                <div>
                    <div class="mb-4 flex flex-wrap items-center gap-3">
                        {badges.into_iter().map(|text| view! { <Badge text=text /> }).collect::<Vec<_>>()}
                    </div>
                    <h1 class="text-4xl font-extrabold leading-tight tracking-tight md:text-6xl">
                        {headline}
                        " "
                        <span class="block">{headline_accent}</span>
                    </h1>
                    <p class="mt-5 max-w-xl text-lg text-slate-600 dark:text-slate-300">{lede}</p>
                    <div class="mt-8 flex flex-wrap items-center gap-4">
                        <CtaButton cta=primary />
                        <a href=secondary.href class=CTA_SECONDARY data-testid=secondary.test_id>
                            {secondary.label}
                        </a>
                    </div>
                    <p class=format!("mt-3 {FINE_PRINT}")>{fine_print}</p>
                </div>
                <div class="relative">
                    <ProductMockup mockup=mockup />
                </div>
            </div>
        </section>
    }
}

/// Illustrative agent run + monthly report cards.
#[component]
fn ProductMockup(mockup: Mockup) -> impl IntoView {
    let Mockup {
        id,
        run_title,
        run_status,
        run_items,
        report_title,
        metrics,
        caption,
    } = mockup;

    view! {
        <div
            id=id
            class="mx-auto w-full max-w-lg rounded-3xl border bg-white p-5 shadow-xl dark:border-slate-800 dark:bg-slate-900"
        >
            <div class="rounded-2xl border bg-slate-50 p-4 dark:border-slate-800 dark:bg-slate-800">
                <div class="mb-3 flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <Icon kind=IconKind::Bot />
                        <p class="text-sm font-semibold">{run_title}</p>
                    </div>
                    <span class="text-xs text-green-600">{run_status}</span>
                </div>
                <ul class="space-y-2 text-sm">
                    {run_items.into_iter().map(|line| view! {
                        <li class=CHECK_ITEM>
                            <Icon kind=IconKind::Check class=CHECK_ICON />
                            " "
                            {line}
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>
            </div>
            <div class="mt-4 rounded-2xl border bg-slate-50 p-4 dark:border-slate-800 dark:bg-slate-800">
                <div class="mb-3 flex items-center gap-2">
                    <Icon kind=IconKind::BarChart />
                    <p class="text-sm font-semibold">{report_title}</p>
                </div>
                <div class="grid grid-cols-3 gap-3 text-center text-xs">
                    {metrics.into_iter().map(|metric| view! {
                        <div class="rounded-xl border p-3 dark:border-slate-700">
                            <p class="font-bold">{metric.value}</p>
                            <p class="text-slate-500">{metric.label}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
            <p class=format!("mt-3 text-center {FINE_PRINT}")>{caption}</p>
        </div>
    }
}
