//! Root components - the full HTML document and the mountable page body.

use leptos::prelude::*;

use super::SectionView;
use crate::styles::{BASE_CSS, PAGE_ROOT, StyleAssets};
use crate::types::{PageModel, SectionDescriptor};

/// The complete HTML document (static target).
#[component]
pub fn PageDocument(model: PageModel, assets: StyleAssets) -> impl IntoView {
    let PageModel {
        title,
        description,
        sections,
    } = model;

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{BASE_CSS}</style>
                {assets.has_stylesheet().then(|| view! {
                    <script src=assets.stylesheet_script.clone()></script>
                })}
            </head>
            <body>
                <LandingPage sections=sections />
            </body>
        </html>
    }
}

/// Page content in descriptor order (what the browser target mounts).
#[component]
pub fn LandingPage(sections: Vec<SectionDescriptor>) -> impl IntoView {
    view! {
        <div class=PAGE_ROOT>
            {sections.into_iter().map(|section| view! {
                <SectionView section=section />
            }).collect::<Vec<_>>()}
        </div>
    }
}
