use leptos::prelude::*;

use crate::styles::{FINE_PRINT, MUTED};
use crate::types::{FooterContent, SectionKind};

/// Brand, company blurb, legal links and copyright.
#[component]
pub fn Footer(id: Option<String>, content: FooterContent) -> impl IntoView {
    let FooterContent {
        brand,
        blurb,
        about_heading,
        about_body,
        legal_links,
        copyright_year,
        copyright_holder,
    } = content;
    let copyright = format!("© {copyright_year} {copyright_holder}");

    view! {
        <footer
            id=id
            data-section=SectionKind::Footer.as_str()
            class="border-t bg-white py-12 text-sm dark:border-slate-800 dark:bg-slate-950"
        >
            <div class="mx-auto grid max-w-7xl gap-8 px-6 md:grid-cols-3">
                <div>
                    <p class="text-lg font-black">{brand.name}</p>
                    <p class=format!("mt-2 max-w-sm {MUTED}")>{blurb}</p>
                </div>
                <div>
                    <p class="font-semibold">{about_heading}</p>
                    <p class=format!("mt-2 max-w-sm {MUTED}")>{about_body}</p>
                </div>
                <div>
                    <p class="font-semibold">"Legal"</p>
                    <ul class=format!("mt-2 space-y-2 {MUTED}")>
                        {legal_links.into_iter().map(|link| view! {
                            <li><a href=link.href class="hover:underline">{link.label}</a></li>
                        }).collect::<Vec<_>>()}
                    </ul>
                    <p class=format!("mt-4 {FINE_PRINT}")>{copyright}</p>
                </div>
            </div>
        </footer>
    }
}
