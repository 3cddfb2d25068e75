use leptos::prelude::*;

use super::CtaButton;
use crate::types::{NavContent, SectionKind};

/// Sticky header: brand, anchor links and the primary call to action.
#[component]
pub fn Nav(id: Option<String>, content: NavContent) -> impl IntoView {
    let NavContent { brand, links, cta } = content;

    view! {
        <header
            id=id
            data-section=SectionKind::Nav.as_str()
            class="sticky top-0 z-30 border-b bg-white/70 backdrop-blur-md dark:bg-slate-950/60"
        >
            <div class="mx-auto flex max-w-7xl items-center justify-between px-6 py-4">
                <div class="flex items-center gap-3">
                    <div class="h-9 w-9 rounded-xl bg-violet-700 dark:bg-violet-500"></div>
                    <div class="leading-tight">
                        <p class="text-lg font-black tracking-tight">{brand.name}</p>
                        <p class="text-xs text-slate-500">{brand.tagline}</p>
                    </div>
                </div>
                <nav class="hidden gap-6 text-sm font-medium md:flex">
                    {links.into_iter().map(|link| view! {
                        <a href=link.href class="hover:opacity-80">{link.label}</a>
                    }).collect::<Vec<_>>()}
                </nav>
                <div class="hidden md:block">
                    <CtaButton cta=cta />
                </div>
            </div>
        </header>
    }
}
